use itemstore::config::Config;
use itemstore::db::ItemStore;
use itemstore::server::{AppState, itemstore_router};
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    itemstore::utils::init_tracing(&cfg.basic.loglevel)?;

    info!(
        database_url = %cfg.database.url,
        transactional_mutations = cfg.database.transactional_mutations,
        loglevel = %cfg.basic.loglevel,
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        "Configuration loaded"
    );

    // Schema must be confirmed before the listener is bound.
    let store = ItemStore::connect(&cfg.database).await?;

    let state = AppState::new(store.clone());
    let app = itemstore_router(state);

    let addr = SocketAddr::from((cfg.basic.listen_addr, cfg.basic.listen_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
