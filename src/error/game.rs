use thiserror::Error;

/// Rule violations surfaced to the calling adapter.
///
/// Every variant is a precondition failure: nothing has been mutated when
/// one of these is returned. Adapters map them to user-facing rejections;
/// the engine never retries them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("No registered commander for Discord ID {0:?}")]
    DiscordUserNotFound(String),
    #[error("Discord ID {0:?} is already registered")]
    AlreadyRegistered(String),
    #[error("Ship ID {0} not found or not owned by the user")]
    ShipNotFound(i32),
    #[error("User ID {0} has no active ship")]
    NoActiveShip(i32),
    #[error("Guild ID {0} not found")]
    GuildNotFound(i32),
    #[error("User ID {0} is not in a guild")]
    NotInGuild(i32),
    #[error("Recipe ID {0} not found")]
    RecipeNotFound(i32),
    #[error("Resource ID {0} not found or not owned by the user")]
    ResourceNotFound(i32),
    #[error("No market listing named {0:?}")]
    MarketItemNotFound(String),
    #[error("Insufficient credits: need {required}, have {available}")]
    InsufficientCredits { required: i32, available: i32 },
    #[error("Insufficient nexium: need {required}, have {available}")]
    InsufficientNexium { required: i32, available: i32 },
    #[error("Missing crafting material {name:?}: need {required}, have {available}")]
    InsufficientMaterials {
        name: String,
        required: i32,
        available: i32,
    },
    #[error("Insufficient resource quantity: holding {available}, requested {requested}")]
    InsufficientQuantity { available: i32, requested: i32 },
    #[error("Market stock too low: {available} available, {requested} requested")]
    InsufficientAvailability { available: i32, requested: i32 },
    #[error("Ship is already at maximum tier")]
    MaxTier,
    #[error("Ship is already at full health")]
    FullHealth,
    #[error("A commander cannot attack their own fleet")]
    CannotSelfAttack,
}
