use sea_orm::entity::prelude::*;

use crate::types::GuildKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub kind: GuildKind,
    pub level: i32,
    pub experience: i32,
    pub member_count: i32,
    pub max_members: i32,
    /// NPC leader tag; not a foreign key into the user table.
    pub leader_id: String,
    pub description: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
