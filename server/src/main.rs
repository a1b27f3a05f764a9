use std::io::ErrorKind;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_core::TodoStore;
use todo_server::ServerConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let listener = bind(&config).await?;

    info!(addr = %listener.local_addr()?, "listening");
    info!("open {}", config.todos_url());

    let store = Arc::new(TodoStore::new());
    todo_server::run_until(listener, store, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn bind(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    match (TcpListener::bind(config.addr).await, config.ipv4_fallback()) {
        (Ok(listener), _) => Ok(listener),
        (Err(err), Some(fallback)) if err.kind() != ErrorKind::AddrInUse => {
            warn!(addr = %config.addr, error = %err, "IPv6 wildcard unavailable, using IPv4");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("failed to bind {fallback}"))
        }
        (Err(err), _) => {
            Err(anyhow::Error::new(err).context(format!("failed to bind {}", config.addr)))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server just runs until killed.
        error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
