//! Sea-orm entity definitions for the Starforge game database.
//!
//! This crate is the schema mapping layer only: every persisted row and
//! every typed JSON column lives here, with no game logic attached.

pub mod alliance;
pub mod combat_log;
pub mod exploration;
pub mod guild;
pub mod market_transaction;
pub mod recipe;
pub mod resource;
pub mod ship;
pub mod types;
pub mod user;

pub mod prelude {
    pub use crate::alliance::Entity as Alliance;
    pub use crate::combat_log::Entity as CombatLog;
    pub use crate::exploration::Entity as Exploration;
    pub use crate::guild::Entity as Guild;
    pub use crate::market_transaction::Entity as MarketTransaction;
    pub use crate::recipe::Entity as Recipe;
    pub use crate::resource::Entity as Resource;
    pub use crate::ship::Entity as Ship;
    pub use crate::user::Entity as User;
}
