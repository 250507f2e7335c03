use clap::Parser;
use tracing::Level;

use historymind_relay::config::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL, RelayConfig,
};
use historymind_relay::logging::{self, LoggingConfig};
use historymind_relay::relay::RelayState;
use historymind_relay::server;

#[derive(Parser, Debug)]
#[command(name = "historymind-relay")]
#[command(about = "HistoryMind relay - forwards chat queries to the AI inference service")]
struct CliArgs {
    /// Host address to bind the relay server
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the relay server
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Base URL of the upstream AI inference service
    #[arg(long, default_value = DEFAULT_UPSTREAM_URL)]
    upstream_url: String,

    /// Timeout in seconds for a single upstream call
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    /// Origins allowed by CORS (e.g. http://localhost:3000)
    #[arg(long, num_args = 0.., default_values_t = [
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ])]
    cors_origins: Vec<String>,

    /// Directory to store log files
    #[arg(long)]
    log_dir: Option<String>,

    /// Set the logging level
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = RelayConfig {
        host: args.host,
        port: args.port,
        upstream_url: args.upstream_url,
        request_timeout_secs: args.request_timeout_secs,
        cors_origins: args.cors_origins,
        log_dir: args.log_dir,
        log_level: args.log_level,
    };
    config.validate()?;

    let _log_guard = logging::init_logging(LoggingConfig {
        level: config.log_level.parse().unwrap_or(Level::INFO),
        log_dir: config.log_dir.clone(),
        ..Default::default()
    });

    let relay_state = RelayState::new(&config)?;
    actix_web::rt::System::new().block_on(server::startup(config, relay_state))?;
    Ok(())
}
