//! CLI argument definitions using clap derive macros.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use folio_common_config::{ConfigLoader, FolioConfig};

use crate::commands::{ConfigCommand, FormCommand, LinksCommand, OffsetCommand};
use crate::error::CliError;

/// Folio - pagination links and page-size forms
///
/// Computes page arithmetic from a request query string and renders the
/// navigation links or the results-per-page form.
#[derive(Debug, Parser)]
#[command(
    name = "folio",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "FOLIO_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render navigation links for a result set
    Links(LinksCommand),

    /// Print the page size and row offset for a request
    Offset(OffsetCommand),

    /// Render the results-per-page form
    Form(FormCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Markup or structured output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

/// Context passed to the pagination commands
#[derive(Debug)]
pub struct CommandContext {
    pub config: FolioConfig,
}

impl Cli {
    /// Loader for `--config`, or `.folio/config.yaml` under the current directory
    pub fn loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::default(),
        }
    }

    /// Execute the selected command
    pub fn execute(self, out: &mut dyn Write) -> Result<(), CliError> {
        let loader = self.loader();
        let ctx = || -> Result<CommandContext, CliError> {
            Ok(CommandContext {
                config: loader.load()?,
            })
        };

        match &self.command {
            Command::Links(cmd) => cmd.execute(&ctx()?, out),
            Command::Offset(cmd) => cmd.execute(&ctx()?, out),
            Command::Form(cmd) => cmd.execute(&ctx()?, out),
            // `config init` has to work before any config file exists.
            Command::Config(cmd) => cmd.execute(&loader, out),
        }
    }
}
