//! Dummy Submitter
//!
//! A mock document submission endpoint for exercising upstream callers.
//!
//! ```text
//!   POST /submit ──▶ bearer check ──▶ X-Code / service.code ──┬─▶ "ok"    → 201 + Location
//!                     (optional)                              ├─▶ "error" → 500
//!                                                             └─▶ other   → 400
//!   GET  /       ──▶ build info
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use dummy_submitter::config::watcher::ConfigWatcher;
use dummy_submitter::config::SharedConfig;
use dummy_submitter::http::HttpServer;
use dummy_submitter::lifecycle::startup::{self, DEFAULT_CONFIG, ENV_CONFIG};
use dummy_submitter::lifecycle::{signals, Shutdown};
use dummy_submitter::observability::init_default_logging;

#[derive(Parser, Debug)]
#[command(name = "dummy-submitter", version)]
#[command(about = "Mock document submission endpoint", long_about = None)]
struct Cli {
    /// Configuration file (YAML, TOML or JSON).
    #[arg(short, long, env = ENV_CONFIG, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Address to listen on.
    #[arg(short, long, env = "DUMMY_SUBMITTER_BIND", default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// Reload the configuration file when it changes.
    #[arg(long, env = "DUMMY_SUBMITTER_WATCH")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let logging = init_default_logging()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dummy-submitter starting");

    let config = SharedConfig::default();
    startup::load_or_keep(&cli.config, &config, Some(&logging));

    // Dropping the watcher stops it, so it lives until main returns.
    let _watcher = if cli.watch {
        let (watcher, updates) = ConfigWatcher::new(&cli.config);
        match watcher.run() {
            Ok(handle) => {
                startup::spawn_config_reloader(
                    updates,
                    cli.config.clone(),
                    config.clone(),
                    Some(logging.clone()),
                );
                Some(handle)
            }
            Err(e) => {
                tracing::warn!(path = %cli.config.display(), error = %e, "Config watching unavailable");
                None
            }
        }
    } else {
        None
    };

    let listener = TcpListener::bind(cli.bind).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
