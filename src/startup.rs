//! Process startup: tracing, database connection, schema, and seed data.

use rand::Rng;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::{
    config::Config,
    data::recipe::RecipeRepository,
    error::Error,
    generator,
    service::guild::GuildService,
};

/// Recipes generated into an empty recipe table.
const SEED_RECIPE_COUNT: usize = 12;

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Connect to the database and create any missing tables from the
/// entity definitions.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    let schema = Schema::new(db.get_database_backend());
    let stmts = vec![
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::Ship),
        schema.create_table_from_entity(entity::prelude::Resource),
        schema.create_table_from_entity(entity::prelude::Guild),
        schema.create_table_from_entity(entity::prelude::Alliance),
        schema.create_table_from_entity(entity::prelude::Exploration),
        schema.create_table_from_entity(entity::prelude::CombatLog),
        schema.create_table_from_entity(entity::prelude::MarketTransaction),
        schema.create_table_from_entity(entity::prelude::Recipe),
    ];
    for mut stmt in stmts {
        stmt.if_not_exists();
        db.execute(&stmt).await?;
    }

    Ok(db)
}

/// Populate an empty world: founding guilds and a starter recipe book.
pub async fn seed_world(db: &DatabaseConnection, rng: &mut impl Rng) -> Result<(), Error> {
    GuildService::new(db).seed_default_guilds().await?;

    let recipes = RecipeRepository::new(db);
    if recipes.get_all().await?.is_empty() {
        for _ in 0..SEED_RECIPE_COUNT {
            let recipe = generator::recipe::generate(rng, None, None, None);
            recipes.create(recipe).await?;
        }
        tracing::info!("seeded {SEED_RECIPE_COUNT} recipes");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use starforge_test_utils::TestSetup;

    use crate::{
        data::{guild::GuildRepository, recipe::RecipeRepository},
        error::Error,
    };

    use super::seed_world;

    #[tokio::test]
    async fn test_seed_world_fills_empty_tables_once() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let mut rng = StdRng::seed_from_u64(1);

        seed_world(&test.db, &mut rng).await?;
        seed_world(&test.db, &mut rng).await?;

        assert_eq!(GuildRepository::new(&test.db).get_all().await?.len(), 4);
        assert_eq!(
            RecipeRepository::new(&test.db).get_all().await?.len(),
            super::SEED_RECIPE_COUNT
        );

        Ok(())
    }
}
