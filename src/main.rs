use std::path::PathBuf;

use cabling_census::census::{self, RunOutcome};
use cabling_census::config::CountConfig;
use cabling_census::logging::{LogConfig, init_logging};
use cabling_census::{Result, ToolError};
use clap::{ArgAction, Parser};
use tracing::{error, info, warn};

/// Exit status used by `--strict` when rows were skipped.
const EXIT_ROWS_SKIPPED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    let log_config = LogConfig {
        log_file: cli.log_file.clone(),
        ..LogConfig::from_verbosity(cli.verbose)
    };
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }

    match run(&cli) {
        Ok(outcome) => {
            if cli.strict && !outcome.all_pass {
                std::process::exit(EXIT_ROWS_SKIPPED);
            }
        }
        Err(err) => {
            error!(error = %err, "run failed");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<RunOutcome> {
    info!(
        "==== {} ({}) ====",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    if !cli.config.exists() {
        return Err(ToolError::InvalidConfig {
            key: "--config".to_string(),
            reason: format!("settings file {} not found", cli.config.display()),
        });
    }
    let config = CountConfig::load(&cli.config)?;

    let outcome = census::count_devices(&cli.input, &cli.output, &config)?;
    if !outcome.all_pass {
        warn!("[NG] finished with skipped rows");
    }
    for path in &outcome.skipped_files {
        warn!(path = %path.display(), "workbook was not counted");
    }
    info!(report = %outcome.report_path.display(), "==== finish ====");
    Ok(outcome)
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Count routers, switches, access points and outlets per site from cabling workbooks."
)]
struct Cli {
    /// Folder containing one cabling workbook per site.
    input: PathBuf,

    /// Folder receiving the dated report file.
    output: PathBuf,

    /// JSON settings file with column positions and device-name lists.
    #[arg(long, default_value = "appsettings.json")]
    config: PathBuf,

    /// Increase log detail (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Exit with status 2 when any row was skipped for an invalid cable ID.
    #[arg(long)]
    strict: bool,
}
