//! Application entry point.
//!
//! Parses command line arguments, loads configuration from a TOML file,
//! initializes tracing, builds the router, and runs the HTTP server until
//! the process is terminated.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docker_copy_command::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use docker_copy_command::http::start_server;
use docker_copy_command::routes::create_router;

/// A placeholder web service for container build and deploy exercises
#[derive(Parser, Debug)]
#[command(name = "docker-copy-command", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "docker_copy_command=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Format was validated at config load; anything but "json" is "text".
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        config = %args.config,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    // Create router and start server
    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
