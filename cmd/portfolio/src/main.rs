//! # Portfolio Binary
//!
//! Assembles the service: settings, tracing, the SQLite content store,
//! the shared-secret gate and the axum router.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::{build_router, RouterOptions};
use auth_adapters::SharedSecretAuthorizer;
use configs::{LogFormat, Settings};
use domains::{ReviewRepository, WorkRepository};
use services::PortfolioService;
use storage_adapters::SqliteContentStore;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_tracing(settings.log_format);

    if settings.admin_key_is_fallback {
        warn!("ADMIN_KEY not set, using the built-in fallback key");
    }

    let addr = settings.bind_addr();
    let options = RouterOptions {
        static_dir: settings.static_dir.clone(),
        max_body_bytes: settings.max_body_bytes,
    };

    let store = Arc::new(SqliteContentStore::open(&settings.database_url).await?);
    info!(
        works = store.count_works().await?,
        reviews = store.count_reviews().await?,
        "content store opened"
    );

    let authorizer = Arc::new(SharedSecretAuthorizer::new(settings.admin_key));
    let service = Arc::new(PortfolioService::new(store.clone(), store.clone(), authorizer));
    let app = build_router(service, &options);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, static_dir = %options.static_dir.display(), "server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
