use sea_orm::entity::prelude::*;

use crate::types::{CombatKind, CombatOutcome};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "combat_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub attacker_id: i32,
    /// `None` for PvE encounters.
    pub defender_id: Option<i32>,
    pub kind: CombatKind,
    pub outcome: CombatOutcome,
    pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
