//! slircbot - a small conversational IRC bot.
//!
//! Connects to one server, joins one channel and keeps score, keeps track
//! of who said what, and settles disputes with `/me hits`.

mod config;
mod dice;
mod error;
mod handlers;
mod network;
mod state;
mod telemetry;

use crate::config::Config;
use crate::dice::RandomDice;
use crate::network::Session;
use crate::telemetry::spans;
use tracing::{Instrument, error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "{} configuration error(s) in {}",
            errors.len(),
            config_path
        ));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(
        server = %addr,
        nick = %config.bot.nick,
        channel = %config.bot.channel,
        "Starting slircbot"
    );

    let span = spans::session(&addr, &config.bot.nick);
    async move {
        let session = Session::connect(config, dice::shared(RandomDice::new())).await?;

        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        };

        session.run_until(shutdown).await.map_err(|e| {
            error!(error = %e, "Session ended");
            e
        })?;
        Ok::<(), anyhow::Error>(())
    }
    .instrument(span)
    .await?;

    info!("Goodbye");
    Ok(())
}
