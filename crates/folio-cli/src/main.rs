//! Folio CLI
//!
//! Main entry point for the `folio` binary.

use std::process::ExitCode;

use clap::Parser;
use folio_common_config::{vars, Environment};
use folio_common_log::{LogConfig, LogLevel};

mod cli;
mod commands;
mod error;

use cli::Cli;
use error::CliError;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    // .env files must be loaded before clap and logging read the environment.
    let env = Environment::init();
    let cli = Cli::parse();
    init_logging(&cli);

    let result = env.map_err(CliError::from).and_then(|_| run(cli));
    match result {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    cli.execute(&mut stdout)
}

fn init_logging(cli: &Cli) {
    let mut config = LogConfig::from_env();

    // Explicit flags beat FOLIO_LOG_LEVEL; without either, stay quiet.
    if cli.verbose > 0 || cli.quiet || Environment::get(vars::FOLIO_LOG_LEVEL).is_none() {
        config.level = LogLevel::from_verbosity(cli.verbose, cli.quiet);
    }

    if let Err(e) = folio_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
