use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use entity::types::GuildKind;

pub struct GuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::guild::Model>, DbErr> {
        entity::prelude::Guild::find_by_id(id).one(self.db).await
    }

    /// All guilds, ranking order: level descending, then experience
    /// descending.
    pub async fn get_all(&self) -> Result<Vec<entity::guild::Model>, DbErr> {
        entity::prelude::Guild::find()
            .order_by_desc(entity::guild::Column::Level)
            .order_by_desc(entity::guild::Column::Experience)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        name: &str,
        kind: GuildKind,
        description: &str,
        leader_id: &str,
    ) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            kind: ActiveValue::Set(kind),
            level: ActiveValue::Set(1),
            experience: ActiveValue::Set(0),
            member_count: ActiveValue::Set(1),
            max_members: ActiveValue::Set(100),
            leader_id: ActiveValue::Set(leader_id.to_string()),
            description: ActiveValue::Set(description.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn set_member_count(&self, id: i32, member_count: i32) -> Result<(), DbErr> {
        entity::guild::ActiveModel {
            id: ActiveValue::Set(id),
            member_count: ActiveValue::Set(member_count),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_progress(
        &self,
        id: i32,
        experience: i32,
        level: i32,
        max_members: i32,
    ) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            id: ActiveValue::Set(id),
            experience: ActiveValue::Set(experience),
            level: ActiveValue::Set(level),
            max_members: ActiveValue::Set(max_members),
            ..Default::default()
        }
        .update(self.db)
        .await
    }
}
