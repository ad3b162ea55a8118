use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use entity::types::{ExplorationKind, ExplorationOutcome};

pub struct ExplorationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExplorationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one resolved exploration. History rows are never mutated.
    pub async fn add(
        &self,
        user_id: i32,
        sector: &str,
        kind: ExplorationKind,
        outcome: ExplorationOutcome,
    ) -> Result<entity::exploration::Model, DbErr> {
        entity::exploration::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            sector: ActiveValue::Set(sector.to_string()),
            kind: ActiveValue::Set(kind),
            outcome: ActiveValue::Set(outcome),
            timestamp: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::exploration::Model>, DbErr> {
        entity::prelude::Exploration::find()
            .filter(entity::exploration::Column::UserId.eq(user_id))
            .order_by_desc(entity::exploration::Column::Timestamp)
            .limit(limit)
            .all(self.db)
            .await
    }
}
