use sea_orm::entity::prelude::*;

use crate::types::{MaterialList, Rarity, ResourceKind};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub kind: ResourceKind,
    pub materials: MaterialList,
    pub result_name: String,
    pub result_quantity: i32,
    pub level: i32,
    pub rarity: Rarity,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
