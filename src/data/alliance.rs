use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Thin CRUD over player-led alliances. Alliances are referenced by the
/// user row but carry no rules-engine behavior of their own.
pub struct AllianceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::alliance::Model>, DbErr> {
        entity::prelude::Alliance::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::alliance::Model>, DbErr> {
        entity::prelude::Alliance::find().all(self.db).await
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        leader_id: i32,
    ) -> Result<entity::alliance::Model, DbErr> {
        entity::alliance::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            leader_id: ActiveValue::Set(leader_id),
            member_count: ActiveValue::Set(1),
            max_members: ActiveValue::Set(20),
            fleet_power: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn set_member_count(&self, id: i32, member_count: i32) -> Result<(), DbErr> {
        entity::alliance::ActiveModel {
            id: ActiveValue::Set(id),
            member_count: ActiveValue::Set(member_count),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}
