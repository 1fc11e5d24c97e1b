use std::sync::Arc;

use configs::{AppConfig, LoggingConfig, ServerConfig};
use common::utils::logging::{init_logging as init_subscriber, LogFormat};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;
use service::catalog::repository::SeaOrmServiceCategoryRepository;
use service::listing::seaorm::SeaOrmRecordStore;

/// Initialize logging via shared common utils
pub fn init_logging(cfg: &LoggingConfig) {
    init_subscriber(LogFormat::parse(&cfg.format));
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn bind(server: &ServerConfig) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    Ok(listener)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: connect the store, build the app and run the HTTP server
/// until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;

    let store = Arc::new(SeaOrmRecordStore::new(db.clone()));
    let categories = Arc::new(SeaOrmServiceCategoryRepository { db });
    let state = ServerState::from_config(store, categories, &cfg);
    if state.admin.api_key.is_none() {
        warn!("no admin api key configured (admin.api_key / ADMIN_API_KEY); admin writes will be rejected");
    }

    let app = routes::build_router(state, build_cors());

    let listener = bind(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "listing server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
