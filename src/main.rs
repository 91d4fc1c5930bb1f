use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use sitecopy::config::{RunConfig, RunMode, ROOT_ENV_VAR};
use sitecopy::table::ReplacementTable;

/// Update the site's copy across the localized landing, about, and
/// principles pages.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Only report changes; do not write files
    #[arg(long)]
    check: bool,

    /// Exit with status 1 when --check finds pages that would change
    #[arg(long, requires = "check")]
    fail_on_changes: bool,

    /// Project root the page paths are relative to (defaults to SITECOPY_ROOT, then the current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Print a unified diff for every page that changes
    #[arg(long)]
    diff: bool,

    /// Print the report (or the --list output) as JSON instead of status lines
    #[arg(long)]
    json: bool,

    /// List target pages and their rule labels, then exit
    #[arg(long)]
    list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    sitecopy::init_with_logger(std::io::stderr().is_terminal(), cli.verbose)?;

    let table = ReplacementTable::builtin();

    if cli.list {
        if cli.json {
            let rendered = serde_json::to_string_pretty(&table).context("Failed to render table")?;
            println!("{}", rendered);
            return Ok(ExitCode::SUCCESS);
        }
        for line in table.listing_lines() {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let root = RunConfig::resolve_root(cli.root, std::env::var(ROOT_ENV_VAR).ok())
        .context("Failed to resolve project root")?;

    let mut config = RunConfig::new(root, RunMode::from_check_flag(cli.check));
    config.fail_on_changes = cli.fail_on_changes;
    config.show_diff = cli.diff;

    info!("Starting sitecopy v{}", sitecopy::version());

    let json = cli.json;
    let report = sitecopy::run(&config, &table, |outcome| {
        if json {
            return;
        }
        println!("{}", outcome);
        if let Some(diff) = &outcome.diff {
            print!("{}", diff);
        }
    })
    .context("Replacement run failed")?;

    if json {
        let rendered = serde_json::to_string_pretty(&report).context("Failed to render report")?;
        println!("{}", rendered);
    } else if let Some(summary) = report.summary() {
        println!("{}", summary);
    }

    let code = report.exit_code(config.fail_on_changes);
    Ok(ExitCode::from(code))
}
