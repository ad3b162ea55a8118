use sea_orm::entity::prelude::*;

use crate::types::ResourceKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "market_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// `None` for NPC market sales.
    pub seller_id: Option<i32>,
    pub buyer_id: i32,
    pub item_name: String,
    pub item_kind: ResourceKind,
    pub quantity: i32,
    pub price_per_unit: i32,
    pub total_price: i32,
    pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
