use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::notify::Notifier;
use crate::routes;
use crate::state::AppState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;

    common::env::ensure_env("admin").await?;

    // DB connection; schema is ensured before serving
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    info!("bookings schema ensured");

    let notifier = Notifier::from_config(&cfg.email).map(Arc::new);
    if notifier.is_none() {
        warn!("email not configured; booking notifications disabled");
    }

    let state = AppState { db, notifier };

    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting booking intake server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
