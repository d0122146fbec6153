//! Palindrome messages service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request    ┌─────────┐   ┌──────────┐   ┌─────────┐   ┌───────────────┐
//!     ─────────────────▶│ request │──▶│ handlers │──▶│ service │──▶│ MessageStore  │
//!                       │ id/trace│   │ (axum)   │   │ validate│   │ (in-memory,   │
//!     Client Response   │ timeout │   │          │   │ classify│   │  one mutex)   │
//!     ◀─────────────────│ limits  │◀──│ JSON     │◀──│ map err │◀──│               │
//!                       └─────────┘   └──────────┘   └─────────┘   └───────────────┘
//!
//!     Cross-cutting: config (env/TOML) · observability (tracing, metrics)
//!                    lifecycle (signals → shutdown → bounded drain)
//! ```

use std::path::PathBuf;

use clap::Parser;

use palindrome_messages::config;
use palindrome_messages::lifecycle::{signals, startup, Shutdown};
use palindrome_messages::observability::logging;

#[derive(Parser)]
#[command(name = "palindrome-messages")]
#[command(about = "CRUD HTTP service for palindrome-tagged messages", long_about = None)]
struct Args {
    /// Optional TOML configuration file; environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = config::load(args.config.as_deref())?;
    logging::init(&config.observability)?;

    tracing::info!("palindrome-messages v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        bind_address = %config.server.bind_address(),
        request_timeout_secs = config.server.timeout_secs,
        database = %config.database.kind,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(signals::trigger_on_signal(shutdown.clone()));

    if let Err(e) = startup::run(config, &shutdown).await {
        tracing::error!(error = %e, "Service stopped with an error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
