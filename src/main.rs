use rand::{rngs::StdRng, SeedableRng};

use starforge::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = StdRng::from_os_rng();
    if let Err(e) = startup::seed_world(&db, &mut rng).await {
        eprintln!("Seed error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Starforge world ready");
}
