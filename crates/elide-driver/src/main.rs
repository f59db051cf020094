//! elide command-line tool
//!
//! - Threshold from `--elide-below` (integer or level name), else the config file
//! - Keep/elide decision per tagged declaration
//! - Tracing to stderr, filtered by `RUST_LOG`

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use elide_driver::{run, Cli};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "elide failed: {e}");
            eprintln!("error: {e}");
            ExitCode::from(e.code().exit_code())
        }
    }
}
