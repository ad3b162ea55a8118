use sea_orm::entity::prelude::*;

use crate::types::ShipClass;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub class: ShipClass,
    pub tier: i32,
    pub variant: String,
    pub health: i32,
    pub max_health: i32,
    pub speed: i32,
    pub cargo: i32,
    pub weapons: i32,
    pub sensors: i32,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
