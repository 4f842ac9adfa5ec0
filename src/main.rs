use anyhow::Result;
use receipt_points::config::{self, Config};
use receipt_points::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level; `LOG_FORMAT`
/// selects between human-readable and JSON output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
