use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use entity::types::ResourceKind;

pub struct MarketTransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MarketTransactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one settled trade. `seller_id` is `None` for NPC sales.
    pub async fn add(
        &self,
        seller_id: Option<i32>,
        buyer_id: i32,
        item_name: &str,
        item_kind: ResourceKind,
        quantity: i32,
        price_per_unit: i32,
    ) -> Result<entity::market_transaction::Model, DbErr> {
        entity::market_transaction::ActiveModel {
            seller_id: ActiveValue::Set(seller_id),
            buyer_id: ActiveValue::Set(buyer_id),
            item_name: ActiveValue::Set(item_name.to_string()),
            item_kind: ActiveValue::Set(item_kind),
            quantity: ActiveValue::Set(quantity),
            price_per_unit: ActiveValue::Set(price_per_unit),
            total_price: ActiveValue::Set(price_per_unit * quantity),
            timestamp: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn history(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::market_transaction::Model>, DbErr> {
        entity::prelude::MarketTransaction::find()
            .order_by_desc(entity::market_transaction::Column::Timestamp)
            .limit(limit)
            .all(self.db)
            .await
    }
}
