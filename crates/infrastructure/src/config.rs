use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AdminConfig {
    pub database_url: String,
    pub api_port: u16,
    /// Where `fleet-admin export` writes CSV files
    pub export_dir: String,
    /// Row cap for the transaction-like listings
    pub fetch_limit: u64,
}

impl AdminConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("database_url", "sqlite://fleet_admin.db?mode=rwc")?
            .set_default("api_port", 3000)?
            .set_default("export_dir", "exports")?
            .set_default("fetch_limit", 500)?
            // Shared settings, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per-environment overrides
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. FLEET__API_PORT=8080)
            .add_source(
                Environment::with_prefix("FLEET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
