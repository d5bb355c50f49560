use anyhow::Result;
use application::view::{FuelFilter, PrestartFilter, UsageFilter};
use application::{
    EntityCache, ExportFile, FuelTransactionsPage, PageContext, PrestartChecksPage,
    UsageRecordsPage,
};
use clap::{Parser, Subcommand, ValueEnum};
use domain::{FleetStore, Selection};
use infrastructure::{AdminConfig, DirectoryDelivery};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fleet_admin::{api, connect_store, state::AppState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding default.toml and <RUN_MODE>.toml
    #[arg(long, default_value = "config")]
    config_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the admin HTTP API
    Serve {
        /// API Port (overrides configuration)
        #[arg(long)]
        api_port: Option<u16>,
    },
    /// Write one listing's CSV export to a directory
    Export {
        #[arg(value_enum)]
        topic: Topic,

        #[arg(long, default_value = "")]
        search: String,

        /// State code, or "all"
        #[arg(long, default_value = "all")]
        state: String,

        /// Fuel type, prestart result or ownership type, depending on topic
        #[arg(long, default_value = "all")]
        category: String,

        /// Output directory (defaults to export_dir)
        #[arg(long)]
        out: Option<String>,
    },
    /// Apply pending database migrations and exit
    Migrate,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Topic {
    Fuel,
    Prestarts,
    Usage,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fleet_admin=debug,application=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = AdminConfig::load(&cli.config_dir)?;

    match cli.command {
        Command::Serve { api_port } => serve(config, api_port).await,
        Command::Export {
            topic,
            search,
            state,
            category,
            out,
        } => {
            let out = out.unwrap_or_else(|| config.export_dir.clone());
            export(config, topic, search, &state, &category, out).await
        }
        Command::Migrate => {
            connect_store(&config.database_url).await?;
            Ok(())
        }
    }
}

async fn serve(config: AdminConfig, api_port: Option<u16>) -> Result<()> {
    info!("🚚 Fleet Admin API Starting...");

    let store = connect_store(&config.database_url).await?;
    let state = Arc::new(AppState::new(store, config.fetch_limit));

    let app = api::create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], api_port.unwrap_or(config.api_port)));
    info!("🚀 API Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn export(
    config: AdminConfig,
    topic: Topic,
    search: String,
    state: &str,
    category: &str,
    out: String,
) -> Result<()> {
    let store: Arc<dyn FleetStore> = connect_store(&config.database_url).await?;
    let ctx = Arc::new(
        PageContext::new(store, Arc::new(EntityCache::new())).with_fetch_limit(config.fetch_limit),
    );
    let today = chrono::Local::now().date_naive();
    let state = Selection::parse(state)?;

    let file: ExportFile = match topic {
        Topic::Fuel => {
            let filter = FuelFilter {
                search,
                state,
                fuel_type: Selection::parse(category)?,
            };
            FuelTransactionsPage::new(ctx).export(&filter, today).await?
        }
        Topic::Prestarts => {
            let filter = PrestartFilter {
                search,
                state,
                overall_result: Selection::parse(category)?,
                ..Default::default()
            };
            PrestartChecksPage::new(ctx).export(&filter, today).await?
        }
        Topic::Usage => {
            let filter = UsageFilter {
                search,
                state,
                ownership_type: Selection::parse(category)?,
            };
            UsageRecordsPage::new(ctx).export(&filter, today).await?
        }
    };

    let delivery = DirectoryDelivery::new(&out);
    file.deliver(&delivery).await?;
    info!(file = %file.file_name, dir = %out, "✅ Export complete");

    Ok(())
}
