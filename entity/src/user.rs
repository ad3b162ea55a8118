use sea_orm::entity::prelude::*;

use crate::types::UserStats;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub username: String,
    pub level: i32,
    pub experience: i32,
    pub credits: i32,
    pub nexium: i32,
    pub active_ship_id: Option<i32>,
    pub guild_id: Option<i32>,
    pub alliance_id: Option<i32>,
    pub stats: UserStats,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
