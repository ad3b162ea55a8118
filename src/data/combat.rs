use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use entity::types::{CombatKind, CombatOutcome};

pub struct CombatLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CombatLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one resolved encounter. `defender_id` is `None` for PvE.
    pub async fn add(
        &self,
        attacker_id: i32,
        defender_id: Option<i32>,
        kind: CombatKind,
        outcome: CombatOutcome,
    ) -> Result<entity::combat_log::Model, DbErr> {
        entity::combat_log::ActiveModel {
            attacker_id: ActiveValue::Set(attacker_id),
            defender_id: ActiveValue::Set(defender_id),
            kind: ActiveValue::Set(kind),
            outcome: ActiveValue::Set(outcome),
            timestamp: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_attacker(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::combat_log::Model>, DbErr> {
        entity::prelude::CombatLog::find()
            .filter(entity::combat_log::Column::AttackerId.eq(user_id))
            .order_by_desc(entity::combat_log::Column::Timestamp)
            .limit(limit)
            .all(self.db)
            .await
    }
}
