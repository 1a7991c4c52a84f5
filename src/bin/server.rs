use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use log::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use userstore::{
    backend::MemoryStore,
    server::{router, server_config::DEFAULT_CONFIG, ServerConfig, UserService}
};

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// Path to the server configuration file
    #[clap(short, long, value_parser, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Address to listen on, overrides the configuration file
    #[clap(long, value_parser)]
    host: Option<String>,

    /// Port to listen on, overrides the configuration file and `PORT`
    #[clap(short, long, value_parser)]
    port: Option<u16>,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userstore=info,userstore_srv=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", err);
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Before logging, so RUST_LOG may come from the .env file.
    let dotenv = dotenvy::dotenv();
    init_logging();
    match dotenv {
        Ok(path) => info!("loaded environment from {}", path.display()),
        Err(err) if err.not_found() => log::debug!("no .env file"),
        Err(err) => return Err(err).with_context(|| "failed to load .env file"),
    }

    let mut config = ServerConfig::load(&args.config)?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    let service = UserService::new(Arc::new(MemoryStore::new()));
    let app = router(&config.route, service);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("serving {} on {}", config.route, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "server error")?;

    return Ok(());
}
