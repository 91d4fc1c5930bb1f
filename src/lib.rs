// sitecopy - targeted copy replacements across the localized site pages

pub mod config;
pub mod diff;
pub mod error;
pub mod error_handling;
pub mod file;
pub mod runner;
pub mod table;

use anyhow::Result;
use tracing::debug;

pub use config::{RunConfig, RunMode};
pub use error::{SiteCopyError, SiteCopyResult};
pub use file::search_replace::{apply_replacements, ApplyResult, FileTarget, ReplacementRule};
pub use runner::{run, FileOutcome, FileStatus, RunReport};
pub use table::ReplacementTable;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging to stderr, keeping stdout for the report.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` picks between
/// `sitecopy=debug` and `sitecopy=warn`.
pub fn init_with_logger(ansi_colors: bool, verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_directive = if verbose { "sitecopy=debug" } else { "sitecopy=warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    debug!("Initialized sitecopy v{}", version());
    Ok(())
}
