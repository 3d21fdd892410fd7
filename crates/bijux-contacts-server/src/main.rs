#![forbid(unsafe_code)]

use bijux_contacts_server::{build_router, AppState, ServerConfig};
use bijux_contacts_store::{ContactBook, JsonFileStore};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("unix signal handlers unavailable, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;
    init_tracing(config.log_json);

    let store = JsonFileStore::new(config.data_path.clone());
    store
        .init()
        .map_err(|e| format!("contact store init failed: {e}"))?;
    let book = ContactBook::new(Arc::new(store));

    let bind_addr = config.bind_addr;
    let shutdown_drain = config.shutdown_drain;
    let data_path = config.data_path.display().to_string();
    let backend = book.backend_tag();
    let state = AppState::with_config(book, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| format!("bind failed on {bind_addr}: {e}"))?;
    info!(
        addr = %bind_addr,
        backend,
        data_path = %data_path,
        "contacts server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!(
                drain_ms = shutdown_drain.as_millis() as u64,
                "shutdown signal received"
            );
            tokio::time::sleep(shutdown_drain).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
