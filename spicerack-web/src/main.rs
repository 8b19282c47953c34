//! spicerack-web - Condiment tracker web service
//!
//! Register condiments with an optional expiry date and photo, review them
//! with expiry status, and search recipes for soon-to-expire condiments.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use spicerack_common::config::AppConfig;
use spicerack_common::db;
use spicerack_web::{build_router, AppState};

/// Command-line arguments (highest-priority configuration tier)
#[derive(Parser, Debug)]
#[command(name = "spicerack-web", about = "Condiment tracker web service", version)]
struct Args {
    /// Data folder holding the database and uploaded images
    #[arg(long)]
    root_folder: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Spicerack Web (spicerack-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = AppConfig::resolve(args.root_folder.as_deref(), args.port)?;
    config.ensure_directories()?;
    info!("Data folder: {}", config.root_folder.display());

    let db_path = config.database_path();
    let pool = match db::init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Database ready: {}", db_path.display());
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    if config.google_api_key.is_none() || config.google_cse_id.is_none() {
        info!("Recipe search disabled (no API credentials configured)");
    } else {
        info!("✓ Recipe search enabled ({})", config.recipe_endpoint);
    }

    let port = config.port;
    let state = AppState::new(pool, config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("spicerack-web listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
