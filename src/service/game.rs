//! Commander lifecycle: registration, fleet management, experience.

use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::types::{Rarity, ResourceKind, ShipClass};

use crate::{
    data::{resource::ResourceRepository, ship::ShipRepository, user::UserRepository},
    error::{Error, GameError},
    generator::name,
    model::tiers,
    service::progression::{self, ExperienceGain},
};

/// Everything a fresh commander starts with.
#[derive(Debug)]
pub struct Registration {
    pub user: entity::user::Model,
    pub ship: entity::ship::Model,
}

#[derive(Debug)]
pub struct UpgradeOutcome {
    pub ship: entity::ship::Model,
    pub credits_paid: i32,
    pub nexium_paid: i32,
}

#[derive(Debug)]
pub struct PurchaseOutcome {
    pub ship: entity::ship::Model,
    pub credits_paid: i32,
}

#[derive(Debug)]
pub struct RepairOutcome {
    pub ship: entity::ship::Model,
    pub credits_paid: i32,
}

const STARTER_RESOURCES: [(&str, ResourceKind, i32, Rarity, i32); 3] = [
    ("Iron Ore", ResourceKind::Material, 10, Rarity::Common, 5),
    ("Energy Cell", ResourceKind::Component, 5, Rarity::Common, 15),
    ("Basic Alloy", ResourceKind::Material, 3, Rarity::Uncommon, 25),
];

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a Discord account as a commander: the user row, an
    /// active Tier-1 Scout, and the starter resource bundle, in one
    /// transaction.
    pub async fn register(
        &self,
        rng: &mut impl Rng,
        discord_id: &str,
        username: &str,
    ) -> Result<Registration, Error> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        if users.get_by_discord_id(discord_id).await?.is_some() {
            return Err(GameError::AlreadyRegistered(discord_id.to_string()).into());
        }

        let user = users.create(discord_id, username).await?;

        let spec = &tiers::tiers(ShipClass::Scout)[0];
        let ships = ShipRepository::new(&txn);
        let ship = ships
            .create(
                user.id,
                &format!("{}-{}", spec.variant, name::callsign(rng)),
                ShipClass::Scout,
                spec,
                true,
            )
            .await?;
        ships.set_active(user.id, ship.id).await?;

        let resources = ResourceRepository::new(&txn);
        for (name, kind, quantity, rarity, value) in STARTER_RESOURCES {
            resources
                .grant(user.id, name, kind, quantity, rarity, value)
                .await?;
        }

        // Re-read for the active-ship pointer set above.
        let user = users
            .get(user.id)
            .await?
            .ok_or(GameError::UserNotFound(user.id))?;

        txn.commit().await?;

        tracing::info!("Registered commander {username} ({discord_id})");

        Ok(Registration { user, ship })
    }

    /// Moves a ship to the next tier, charging the tier's credit and
    /// nexium price. Both balances are checked before either is touched.
    pub async fn upgrade_ship(&self, user_id: i32, ship_id: i32) -> Result<UpgradeOutcome, Error> {
        let txn = self.db.begin().await?;

        let ships = ShipRepository::new(&txn);
        let ship = ships
            .get(ship_id)
            .await?
            .filter(|ship| ship.user_id == user_id)
            .ok_or(GameError::ShipNotFound(ship_id))?;

        let next_tier = ship.tier + 1;
        let spec = tiers::tier_spec(ship.class, next_tier).ok_or(GameError::MaxTier)?;

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;

        if user.credits < spec.cost {
            return Err(GameError::InsufficientCredits {
                required: spec.cost,
                available: user.credits,
            }
            .into());
        }
        if user.nexium < spec.nexium {
            return Err(GameError::InsufficientNexium {
                required: spec.nexium,
                available: user.nexium,
            }
            .into());
        }

        users
            .set_currencies(user_id, user.credits - spec.cost, user.nexium - spec.nexium)
            .await?;
        let ship = ships.apply_tier(ship.id, next_tier, spec).await?;

        txn.commit().await?;

        Ok(UpgradeOutcome {
            ship,
            credits_paid: spec.cost,
            nexium_paid: spec.nexium,
        })
    }

    /// Buys a new Tier-1 hull of the given class at its base price. The
    /// new ship arrives inactive.
    pub async fn purchase_ship(
        &self,
        rng: &mut impl Rng,
        user_id: i32,
        class: ShipClass,
    ) -> Result<PurchaseOutcome, Error> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;

        let cost = tiers::base_price(class);
        if user.credits < cost {
            return Err(GameError::InsufficientCredits {
                required: cost,
                available: user.credits,
            }
            .into());
        }

        users.add_credits(user_id, -cost).await?;

        let spec = &tiers::tiers(class)[0];
        let ship = ShipRepository::new(&txn)
            .create(
                user_id,
                &format!("{}-{}", spec.variant, name::callsign(rng)),
                class,
                spec,
                false,
            )
            .await?;

        txn.commit().await?;

        Ok(PurchaseOutcome {
            ship,
            credits_paid: cost,
        })
    }

    /// Restores a damaged ship to full health at 10 credits per point.
    pub async fn repair_ship(&self, user_id: i32, ship_id: i32) -> Result<RepairOutcome, Error> {
        let txn = self.db.begin().await?;

        let ships = ShipRepository::new(&txn);
        let ship = ships
            .get(ship_id)
            .await?
            .filter(|ship| ship.user_id == user_id)
            .ok_or(GameError::ShipNotFound(ship_id))?;

        if ship.health >= ship.max_health {
            return Err(GameError::FullHealth.into());
        }

        let cost = (ship.max_health - ship.health) * 10;

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;
        if user.credits < cost {
            return Err(GameError::InsufficientCredits {
                required: cost,
                available: user.credits,
            }
            .into());
        }

        users.add_credits(user_id, -cost).await?;
        let ship = ships.set_health(ship.id, ship.max_health).await?;

        txn.commit().await?;

        Ok(RepairOutcome {
            ship,
            credits_paid: cost,
        })
    }

    /// Grants experience directly, paying level-up rewards when a
    /// threshold is crossed.
    pub async fn gain_experience(
        &self,
        rng: &mut impl Rng,
        user_id: i32,
        amount: i32,
    ) -> Result<ExperienceGain, Error> {
        let txn = self.db.begin().await?;
        let gain = progression::grant_experience(&txn, rng, user_id, amount).await?;
        txn.commit().await?;
        Ok(gain)
    }

    pub async fn ships(&self, user_id: i32) -> Result<Vec<entity::ship::Model>, Error> {
        Ok(ShipRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn resources(&self, user_id: i32) -> Result<Vec<entity::resource::Model>, Error> {
        Ok(ResourceRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn set_active_ship(&self, user_id: i32, ship_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        ShipRepository::new(&txn)
            .get(ship_id)
            .await?
            .filter(|ship| ship.user_id == user_id)
            .ok_or(GameError::ShipNotFound(ship_id))?;
        ShipRepository::new(&txn).set_active(user_id, ship_id).await?;

        txn.commit().await?;
        Ok(())
    }
}
