use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use entity::types::ShipClass;

use crate::model::tiers::ShipTierSpec;

pub struct ShipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::ship::Model>, DbErr> {
        entity::prelude::Ship::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::ship::Model>, DbErr> {
        entity::prelude::Ship::find()
            .filter(entity::ship::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    pub async fn get_active(&self, user_id: i32) -> Result<Option<entity::ship::Model>, DbErr> {
        entity::prelude::Ship::find()
            .filter(entity::ship::Column::UserId.eq(user_id))
            .filter(entity::ship::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Creates a Tier-1 hull from its class template.
    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        class: ShipClass,
        spec: &ShipTierSpec,
        is_active: bool,
    ) -> Result<entity::ship::Model, DbErr> {
        entity::ship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            class: ActiveValue::Set(class),
            tier: ActiveValue::Set(1),
            variant: ActiveValue::Set(spec.variant.to_string()),
            health: ActiveValue::Set(spec.health),
            max_health: ActiveValue::Set(spec.health),
            speed: ActiveValue::Set(spec.speed),
            cargo: ActiveValue::Set(spec.cargo),
            weapons: ActiveValue::Set(spec.weapons),
            sensors: ActiveValue::Set(spec.sensors),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites a ship's tier, variant, and stat block with a template,
    /// resetting current health to the new maximum.
    pub async fn apply_tier(
        &self,
        id: i32,
        tier: i32,
        spec: &ShipTierSpec,
    ) -> Result<entity::ship::Model, DbErr> {
        entity::ship::ActiveModel {
            id: ActiveValue::Set(id),
            tier: ActiveValue::Set(tier),
            variant: ActiveValue::Set(spec.variant.to_string()),
            health: ActiveValue::Set(spec.health),
            max_health: ActiveValue::Set(spec.health),
            speed: ActiveValue::Set(spec.speed),
            cargo: ActiveValue::Set(spec.cargo),
            weapons: ActiveValue::Set(spec.weapons),
            sensors: ActiveValue::Set(spec.sensors),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    pub async fn set_health(&self, id: i32, health: i32) -> Result<entity::ship::Model, DbErr> {
        entity::ship::ActiveModel {
            id: ActiveValue::Set(id),
            health: ActiveValue::Set(health),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Makes `ship_id` the user's only active ship: deactivates every
    /// ship owned by the user, activates the chosen one, and updates the
    /// user's active-ship pointer. Run inside a transaction when the
    /// surrounding operation has further steps.
    pub async fn set_active(&self, user_id: i32, ship_id: i32) -> Result<(), DbErr> {
        entity::prelude::Ship::update_many()
            .col_expr(entity::ship::Column::IsActive, Expr::value(false))
            .filter(entity::ship::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        entity::ship::ActiveModel {
            id: ActiveValue::Set(ship_id),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        entity::user::ActiveModel {
            id: ActiveValue::Set(user_id),
            active_ship_id: ActiveValue::Set(Some(ship_id)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use starforge_test_utils::{fixtures, TestSetup};

    use entity::types::ShipClass;

    use super::ShipRepository;

    /// Calling set_active twice with different ships must leave exactly
    /// the second one active.
    #[tokio::test]
    async fn test_set_active_is_exclusive() -> Result<(), DbErr> {
        let test = TestSetup::with_game_tables().await?;
        let repo = ShipRepository::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;

        let first = fixtures::ship(&test.db, user.id, ShipClass::Scout, true).await?;
        let second = fixtures::ship(&test.db, user.id, ShipClass::Fighter, false).await?;

        repo.set_active(user.id, first.id).await?;
        repo.set_active(user.id, second.id).await?;

        let ships = repo.get_by_user(user.id).await?;
        let active: Vec<i32> = ships
            .iter()
            .filter(|ship| ship.is_active)
            .map(|ship| ship.id)
            .collect();

        assert_eq!(active, vec![second.id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_active_updates_user_pointer() -> Result<(), DbErr> {
        let test = TestSetup::with_game_tables().await?;
        let repo = ShipRepository::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let ship = fixtures::ship(&test.db, user.id, ShipClass::Scout, false).await?;

        repo.set_active(user.id, ship.id).await?;

        let user = crate::data::user::UserRepository::new(&test.db)
            .get(user.id)
            .await?
            .unwrap();
        assert_eq!(user.active_ship_id, Some(ship.id));

        Ok(())
    }
}
