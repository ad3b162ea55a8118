use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use entity::types::{Rarity, ResourceKind};

pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::resource::Model>, DbErr> {
        entity::prelude::Resource::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<entity::resource::Model>, DbErr> {
        entity::prelude::Resource::find()
            .filter(entity::resource::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Adds a quantity of a named resource to a user's inventory,
    /// stacking onto an existing `(name, kind)` row when one exists.
    pub async fn grant(
        &self,
        user_id: i32,
        name: &str,
        kind: ResourceKind,
        quantity: i32,
        rarity: Rarity,
        value: i32,
    ) -> Result<entity::resource::Model, DbErr> {
        let existing = entity::prelude::Resource::find()
            .filter(entity::resource::Column::UserId.eq(user_id))
            .filter(entity::resource::Column::Name.eq(name))
            .filter(entity::resource::Column::Kind.eq(kind))
            .one(self.db)
            .await?;

        if let Some(row) = existing {
            return entity::resource::ActiveModel {
                id: ActiveValue::Set(row.id),
                quantity: ActiveValue::Set(row.quantity + quantity),
                ..Default::default()
            }
            .update(self.db)
            .await;
        }

        entity::resource::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            kind: ActiveValue::Set(kind),
            quantity: ActiveValue::Set(quantity),
            rarity: ActiveValue::Set(rarity),
            value: ActiveValue::Set(value),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Consumes part of a row: decrements the quantity, or deletes the
    /// row outright when it is fully used up. The caller must already
    /// have verified that `row.quantity >= quantity`.
    pub async fn consume(
        &self,
        row: &entity::resource::Model,
        quantity: i32,
    ) -> Result<(), DbErr> {
        if row.quantity == quantity {
            entity::prelude::Resource::delete_by_id(row.id)
                .exec(self.db)
                .await?;
        } else {
            entity::resource::ActiveModel {
                id: ActiveValue::Set(row.id),
                quantity: ActiveValue::Set(row.quantity - quantity),
                ..Default::default()
            }
            .update(self.db)
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use starforge_test_utils::{fixtures, TestSetup};

    use entity::types::{Rarity, ResourceKind};

    use super::ResourceRepository;

    #[tokio::test]
    async fn test_grant_stacks_same_named_resource() -> Result<(), DbErr> {
        let test = TestSetup::with_game_tables().await?;
        let repo = ResourceRepository::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;

        repo.grant(user.id, "Iron Ore", ResourceKind::Material, 10, Rarity::Common, 5)
            .await?;
        repo.grant(user.id, "Iron Ore", ResourceKind::Material, 4, Rarity::Common, 5)
            .await?;

        let rows = repo.get_by_user(user.id).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 14);

        Ok(())
    }

    #[tokio::test]
    async fn test_consume_partial_then_exact() -> Result<(), DbErr> {
        let test = TestSetup::with_game_tables().await?;
        let repo = ResourceRepository::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let row = fixtures::resource(&test.db, user.id, "Iron Ore", ResourceKind::Material, 10)
            .await?;

        repo.consume(&row, 4).await?;
        let row = repo.get(row.id).await?.unwrap();
        assert_eq!(row.quantity, 6);

        repo.consume(&row, 6).await?;
        assert!(repo.get(row.id).await?.is_none());

        Ok(())
    }
}
