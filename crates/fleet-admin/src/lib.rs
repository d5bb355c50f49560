pub mod api;
pub mod state;

use infrastructure::SeaOrmFleetStore;
use migration::{Migrator, MigratorTrait};
use state::AppState;
use std::sync::Arc;
use tracing::info;

/// Open the database and bring its schema up to date
pub async fn connect_store(database_url: &str) -> anyhow::Result<Arc<SeaOrmFleetStore>> {
    info!("Connecting to database...");
    let store = SeaOrmFleetStore::connect(database_url).await?;

    info!("Running database migrations...");
    Migrator::up(store.connection(), None).await?;
    info!("✅ Migrations applied successfully");

    Ok(Arc::new(store))
}

pub async fn setup_app_state(database_url: &str, fetch_limit: u64) -> anyhow::Result<Arc<AppState>> {
    let store = connect_store(database_url).await?;
    Ok(Arc::new(AppState::new(store, fetch_limit)))
}
