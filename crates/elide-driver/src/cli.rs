//! Command-line surface of the `elide` tool.

use std::path::PathBuf;

use clap::Parser;
use elide_core::{parse_threshold, Level, Result};

use crate::{config, policy::ElisionPolicy, report};

#[derive(Debug, Parser)]
#[command(name = "elide")]
#[command(
    version,
    about = "Decide which tagged declarations a build elides below a priority threshold"
)]
pub struct Cli {
    /// YAML file listing declarations and, optionally, a threshold
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Threshold: a decimal integer or a level name (FINEST..SEVERE, ASSERTION, ALL/MINIMUM, OFF/MAXIMUM).
    /// Overrides the config file.
    #[arg(long, value_name = "LEVEL", allow_hyphen_values = true)]
    pub elide_below: Option<String>,

    /// Print the level name table and exit
    #[arg(long)]
    pub list_levels: bool,

    /// Emit decisions as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute one invocation and return what should be printed on stdout.
pub fn run(cli: &Cli) -> Result<String> {
    if cli.list_levels {
        return Ok(report::render_levels());
    }

    let cfg = cli.config.as_ref().map(config::load_from_file).transpose()?;

    let threshold = match (&cli.elide_below, &cfg) {
        (Some(tok), _) => parse_threshold(tok)?,
        (None, Some(cfg)) => cfg.threshold()?,
        (None, None) => Level::ALL,
    };
    tracing::info!(threshold = threshold.value(), "elision threshold resolved");

    let policy = ElisionPolicy::new(threshold);
    let decls = cfg.map(|c| c.declarations()).unwrap_or_default();
    let records = policy.evaluate(&decls);

    if cli.json {
        report::render_json(threshold, &records)
    } else {
        Ok(report::render_text(threshold, &records))
    }
}
