use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter,
};

use entity::types::UserStats;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await
    }

    /// Creates a commander with registration defaults: level 1, 1000
    /// credits, 25 nexium, zeroed activity counters.
    pub async fn create(
        &self,
        discord_id: &str,
        username: &str,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(discord_id.to_string()),
            username: ActiveValue::Set(username.to_string()),
            level: ActiveValue::Set(1),
            experience: ActiveValue::Set(0),
            credits: ActiveValue::Set(1000),
            nexium: ActiveValue::Set(25),
            stats: ActiveValue::Set(UserStats::default()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn set_experience(
        &self,
        id: i32,
        experience: i32,
        level: i32,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            experience: ActiveValue::Set(experience),
            level: ActiveValue::Set(level),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    pub async fn set_currencies(
        &self,
        id: i32,
        credits: i32,
        nexium: i32,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            credits: ActiveValue::Set(credits),
            nexium: ActiveValue::Set(nexium),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Atomic in-place credit adjustment; safe without a prior read.
    pub async fn add_credits(&self, id: i32, amount: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Credits,
                Expr::col(entity::user::Column::Credits).add(amount),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Atomic in-place nexium adjustment; safe without a prior read.
    pub async fn add_nexium(&self, id: i32, amount: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Nexium,
                Expr::col(entity::user::Column::Nexium).add(amount),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_guild(&self, id: i32, guild_id: Option<i32>) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            guild_id: ActiveValue::Set(guild_id),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_stats(&self, id: i32, stats: UserStats) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            stats: ActiveValue::Set(stats),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn guild_members(&self, guild_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::GuildId.eq(guild_id))
            .all(self.db)
            .await
    }

    /// Pays a flat credit bonus to every member of a guild in one
    /// statement.
    pub async fn credit_guild_members(&self, guild_id: i32, amount: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Credits,
                Expr::col(entity::user::Column::Credits).add(amount),
            )
            .filter(entity::user::Column::GuildId.eq(guild_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use starforge_test_utils::{fixtures, TestSetup};

    use super::UserRepository;

    #[tokio::test]
    async fn test_create_and_lookup_by_discord_id() -> Result<(), DbErr> {
        let test = TestSetup::with_game_tables().await?;
        let repo = UserRepository::new(&test.db);

        let created = repo.create("discord-1", "Reza").await?;
        assert_eq!(created.credits, 1000);
        assert_eq!(created.nexium, 25);
        assert_eq!(created.level, 1);

        let found = repo.get_by_discord_id("discord-1").await?;
        assert_eq!(found.map(|u| u.id), Some(created.id));

        let missing = repo.get_by_discord_id("discord-2").await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_credits_is_relative() -> Result<(), DbErr> {
        let test = TestSetup::with_game_tables().await?;
        let repo = UserRepository::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;

        repo.add_credits(user.id, 250).await?;
        repo.add_credits(user.id, -100).await?;

        let user = repo.get(user.id).await?.unwrap();
        assert_eq!(user.credits, 1150);

        Ok(())
    }

    #[tokio::test]
    async fn test_credit_guild_members_only_touches_members() -> Result<(), DbErr> {
        let test = TestSetup::with_game_tables().await?;
        let repo = UserRepository::new(&test.db);

        let member = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let outsider = fixtures::user(&test.db, "discord-2", "Kael").await?;
        repo.set_guild(member.id, Some(42)).await?;

        let paid = repo.credit_guild_members(42, 1000).await?;

        assert_eq!(paid, 1);
        assert_eq!(repo.get(member.id).await?.unwrap().credits, 2000);
        assert_eq!(repo.get(outsider.id).await?.unwrap().credits, 1000);

        Ok(())
    }
}
