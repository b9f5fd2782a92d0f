//! Diagnostic logging.
//!
//! User-facing warnings are printed directly by the CLI; this subscriber carries the
//! engine's `debug!`/`warn!` events (tolerated malformed input, duplicate paths).

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `AUTOREF_LOG=autoref=trace`.
pub const LOG_ENV: &str = "AUTOREF_LOG";

/// Install the global subscriber on stderr.
///
/// Without `AUTOREF_LOG` the level is `debug` when `verbose` is set and `warn` otherwise.
/// Stdout stays reserved for command output and the MCP transport.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
