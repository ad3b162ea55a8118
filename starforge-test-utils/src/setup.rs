use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema};

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Connects to a fresh in-memory sqlite database with no tables.
    pub async fn new() -> Result<Self, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    /// Connects and creates every game table from the entity definitions.
    pub async fn with_game_tables() -> Result<Self, DbErr> {
        let setup = Self::new().await?;
        let schema = Schema::new(DbBackend::Sqlite);

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

        for stmt in stmts {
            setup.db.execute(&stmt).await?;
        }

        Ok(setup)
    }
}
