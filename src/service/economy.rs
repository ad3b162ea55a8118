//! Market trading and crafting.

use chrono::NaiveDateTime;
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::types::{Rarity, UserStats};

use crate::{
    data::{
        market::MarketTransactionRepository, recipe::RecipeRepository,
        resource::ResourceRepository, user::UserRepository,
    },
    error::{Error, GameError},
    model::market::Market,
};

/// Base value of a crafted item by recipe rarity.
fn crafted_value(rarity: Rarity) -> i32 {
    match rarity {
        Rarity::Common => 50,
        Rarity::Uncommon => 150,
        Rarity::Rare => 400,
        Rarity::Epic => 800,
        Rarity::Legendary => 1500,
    }
}

#[derive(Debug)]
pub struct PurchaseReceipt {
    pub item_name: String,
    pub quantity: i32,
    pub total_price: i32,
    pub resource: entity::resource::Model,
    pub transaction: entity::market_transaction::Model,
}

#[derive(Debug)]
pub struct SaleReceipt {
    pub item_name: String,
    pub quantity: i32,
    pub total_price: i32,
    pub transaction: entity::market_transaction::Model,
}

#[derive(Debug)]
pub struct CraftReceipt {
    pub recipe: entity::recipe::Model,
    pub result: entity::resource::Model,
}

pub struct EconomyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EconomyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Buys `quantity` units of a listing from the NPC market. The
    /// listing is only debited once payment has gone through.
    pub async fn buy(
        &self,
        market: &mut Market,
        now: NaiveDateTime,
        rng: &mut impl Rng,
        user_id: i32,
        item_name: &str,
        quantity: i32,
    ) -> Result<PurchaseReceipt, Error> {
        market.items(now, rng);
        let item = market
            .find(item_name)
            .ok_or_else(|| GameError::MarketItemNotFound(item_name.to_string()))?
            .clone();

        if item.availability < quantity {
            return Err(GameError::InsufficientAvailability {
                available: item.availability,
                requested: quantity,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;

        let total_price = item.price * quantity;
        if user.credits < total_price {
            return Err(GameError::InsufficientCredits {
                required: total_price,
                available: user.credits,
            }
            .into());
        }

        users.add_credits(user_id, -total_price).await?;
        let resource = ResourceRepository::new(&txn)
            .grant(user_id, &item.name, item.kind, quantity, item.rarity, item.price)
            .await?;
        let transaction = MarketTransactionRepository::new(&txn)
            .add(None, user_id, &item.name, item.kind, quantity, item.price)
            .await?;

        txn.commit().await?;
        market.take(&item.name, quantity);

        tracing::info!("user {user_id} bought {quantity}x {} for {total_price}", item.name);

        Ok(PurchaseReceipt {
            item_name: item.name,
            quantity,
            total_price,
            resource,
            transaction,
        })
    }

    /// Sells part of an owned resource stack back to the market.
    pub async fn sell(
        &self,
        user_id: i32,
        resource_id: i32,
        quantity: i32,
        price_per_unit: i32,
    ) -> Result<SaleReceipt, Error> {
        let txn = self.db.begin().await?;

        let resources = ResourceRepository::new(&txn);
        let resource = resources
            .get(resource_id)
            .await?
            .filter(|resource| resource.user_id == user_id)
            .ok_or(GameError::ResourceNotFound(resource_id))?;

        if resource.quantity < quantity {
            return Err(GameError::InsufficientQuantity {
                available: resource.quantity,
                requested: quantity,
            }
            .into());
        }

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;

        let total_price = price_per_unit * quantity;
        users.add_credits(user_id, total_price).await?;
        resources.consume(&resource, quantity).await?;
        let transaction = MarketTransactionRepository::new(&txn)
            .add(
                Some(user_id),
                user_id,
                &resource.name,
                resource.kind,
                quantity,
                price_per_unit,
            )
            .await?;
        users
            .set_stats(
                user_id,
                UserStats {
                    trades: user.stats.trades + 1,
                    ..user.stats
                },
            )
            .await?;

        txn.commit().await?;

        Ok(SaleReceipt {
            item_name: resource.name,
            quantity,
            total_price,
            transaction,
        })
    }

    /// Crafts a recipe from the commander's stockpile. Every material
    /// requirement is checked before anything is consumed.
    pub async fn craft(&self, user_id: i32, recipe_id: i32) -> Result<CraftReceipt, Error> {
        let txn = self.db.begin().await?;

        let recipe = RecipeRepository::new(&txn)
            .get(recipe_id)
            .await?
            .ok_or(GameError::RecipeNotFound(recipe_id))?;

        let resources = ResourceRepository::new(&txn);
        let stockpile = resources.get_by_user(user_id).await?;

        let mut consumed = Vec::with_capacity(recipe.materials.0.len());
        for requirement in &recipe.materials.0 {
            let held = stockpile
                .iter()
                .find(|resource| resource.name == requirement.name);
            let available = held.map_or(0, |resource| resource.quantity);
            let Some(held) = held.filter(|_| available >= requirement.quantity) else {
                return Err(GameError::InsufficientMaterials {
                    name: requirement.name.clone(),
                    required: requirement.quantity,
                    available,
                }
                .into());
            };
            consumed.push((held.clone(), requirement.quantity));
        }

        for (resource, quantity) in consumed {
            resources.consume(&resource, quantity).await?;
        }

        let result = resources
            .grant(
                user_id,
                &recipe.result_name,
                recipe.kind,
                recipe.result_quantity,
                recipe.rarity,
                crafted_value(recipe.rarity),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "user {user_id} crafted {}x {}",
            recipe.result_quantity,
            recipe.result_name
        );

        Ok(CraftReceipt { recipe, result })
    }

    pub async fn market_history(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::market_transaction::Model>, Error> {
        Ok(MarketTransactionRepository::new(self.db)
            .history(limit)
            .await?)
    }

    pub async fn recipes(&self) -> Result<Vec<entity::recipe::Model>, Error> {
        Ok(RecipeRepository::new(self.db).get_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};
    use starforge_test_utils::{fixtures, TestSetup};

    use entity::types::{MaterialList, MaterialRequirement, Rarity, ResourceKind};

    use crate::{
        data::{
            recipe::{NewRecipe, RecipeRepository},
            resource::ResourceRepository,
            user::UserRepository,
        },
        error::{Error, GameError},
        model::market::Market,
    };

    use super::EconomyService;

    fn t0() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_buy_charges_and_grants() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = EconomyService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(1);
        let mut market = Market::new(t0());
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;

        let receipt = service
            .buy(&mut market, t0(), &mut rng, user.id, "Hyperspace Fuel", 4)
            .await?;

        assert_eq!(receipt.total_price, 300);
        assert_eq!(receipt.resource.quantity, 4);
        assert_eq!(receipt.resource.kind, ResourceKind::Material);
        assert_eq!(receipt.transaction.seller_id, None);
        assert_eq!(market.find("Hyperspace Fuel").unwrap().availability, 96);

        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.credits, 700);

        Ok(())
    }

    #[tokio::test]
    async fn test_buy_rejects_unaffordable_and_unavailable() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = EconomyService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(1);
        let mut market = Market::new(t0());
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;

        let err = service
            .buy(&mut market, t0(), &mut rng, user.id, "Plasma Cannon", 1)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Game(GameError::InsufficientCredits { required: 5000, available: 1000 })
        ));

        let err = service
            .buy(&mut market, t0(), &mut rng, user.id, "Plasma Cannon", 6)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Game(GameError::InsufficientAvailability { available: 5, requested: 6 })
        ));

        // Nothing charged, nothing granted.
        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.credits, 1000);
        assert!(ResourceRepository::new(&test.db)
            .get_by_user(user.id)
            .await?
            .is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_sell_pays_and_consumes() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = EconomyService::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let stack =
            fixtures::resource(&test.db, user.id, "Iron Ore", ResourceKind::Material, 10).await?;

        let receipt = service.sell(user.id, stack.id, 4, 7).await?;
        assert_eq!(receipt.total_price, 28);
        assert_eq!(receipt.transaction.seller_id, Some(user.id));

        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.credits, 1028);
        assert_eq!(user.stats.trades, 1);

        let stack = ResourceRepository::new(&test.db)
            .get(stack.id)
            .await?
            .unwrap();
        assert_eq!(stack.quantity, 6);

        Ok(())
    }

    #[tokio::test]
    async fn test_sell_rejects_foreign_and_oversized() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = EconomyService::new(&test.db);
        let owner = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let thief = fixtures::user(&test.db, "discord-2", "Kael").await?;
        let stack =
            fixtures::resource(&test.db, owner.id, "Iron Ore", ResourceKind::Material, 3).await?;

        let err = service.sell(thief.id, stack.id, 1, 5).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Game(GameError::ResourceNotFound(_))
        ));

        let err = service.sell(owner.id, stack.id, 4, 5).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Game(GameError::InsufficientQuantity { available: 3, requested: 4 })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_craft_consumes_materials_and_grants_result() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = EconomyService::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        fixtures::resource(&test.db, user.id, "Iron Ore", ResourceKind::Material, 5).await?;
        fixtures::resource(&test.db, user.id, "Silicon", ResourceKind::Material, 2).await?;

        let recipe = RecipeRepository::new(&test.db)
            .create(NewRecipe {
                name: "Hull Plating".to_string(),
                kind: ResourceKind::Component,
                materials: MaterialList(vec![
                    MaterialRequirement { name: "Iron Ore".to_string(), quantity: 3 },
                    MaterialRequirement { name: "Silicon".to_string(), quantity: 2 },
                ]),
                result_name: "Hull Plating".to_string(),
                result_quantity: 1,
                level: 1,
                rarity: Rarity::Uncommon,
                description: "Reinforced plating".to_string(),
            })
            .await?;

        let receipt = service.craft(user.id, recipe.id).await?;
        assert_eq!(receipt.result.name, "Hull Plating");
        assert_eq!(receipt.result.quantity, 1);
        assert_eq!(receipt.result.value, 150);

        let stockpile = ResourceRepository::new(&test.db).get_by_user(user.id).await?;
        let iron = stockpile.iter().find(|r| r.name == "Iron Ore").unwrap();
        assert_eq!(iron.quantity, 2);
        // The silicon stack was fully consumed and its row deleted.
        assert!(stockpile.iter().all(|r| r.name != "Silicon"));

        Ok(())
    }

    #[tokio::test]
    async fn test_craft_checks_all_materials_before_consuming() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = EconomyService::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        fixtures::resource(&test.db, user.id, "Iron Ore", ResourceKind::Material, 5).await?;

        let recipe = RecipeRepository::new(&test.db)
            .create(NewRecipe {
                name: "Hull Plating".to_string(),
                kind: ResourceKind::Component,
                materials: MaterialList(vec![
                    MaterialRequirement { name: "Iron Ore".to_string(), quantity: 3 },
                    MaterialRequirement { name: "Silicon".to_string(), quantity: 2 },
                ]),
                result_name: "Hull Plating".to_string(),
                result_quantity: 1,
                level: 1,
                rarity: Rarity::Uncommon,
                description: "Reinforced plating".to_string(),
            })
            .await?;

        let err = service.craft(user.id, recipe.id).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Game(GameError::InsufficientMaterials { required: 2, available: 0, .. })
        ));

        // The iron stack is untouched.
        let stockpile = ResourceRepository::new(&test.db).get_by_user(user.id).await?;
        assert_eq!(stockpile[0].quantity, 5);

        Ok(())
    }
}
