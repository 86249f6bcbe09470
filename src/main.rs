use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use products_api::lifecycle::{resolve_config, signals, StartupOptions};
use products_api::observability::{logging, metrics};
use products_api::{HttpServer, ProductStore, Shutdown};

#[derive(Parser)]
#[command(name = "products-api")]
#[command(about = "In-memory JSON CRUD service for products", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&StartupOptions {
        config_path: cli.config,
        host: cli.host,
        port: cli.port,
    })?;

    logging::init(&config.observability);
    tracing::info!("products-api v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        mount_path = %config.api.mount_path,
        request_timeout_secs = config.limits.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        "Server listening at http://{}{}",
        local_addr,
        config.api.mount_path
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, ProductStore::shared());
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
