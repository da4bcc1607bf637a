//! Config command implementation.

use std::io::Write;

use anyhow::Context;
use clap::Subcommand;
use folio_common_config::{ConfigLoader, FolioConfig};

use crate::error::CliError;

/// Manage configuration
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as YAML
    Show,

    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn execute(&self, loader: &ConfigLoader, out: &mut dyn Write) -> Result<(), CliError> {
        match self {
            Self::Show => {
                let config = loader.load()?;
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                write!(out, "{yaml}")?;
            }
            Self::Init { force } => {
                let path = loader.config_path();
                if path.exists() && !force {
                    return Err(CliError::config_with_hint(
                        format!("config file already exists: {}", path.display()),
                        "pass --force to overwrite it",
                    ));
                }
                loader.save(&FolioConfig::default())?;
                writeln!(out, "Wrote {}", path.display())?;
            }
        }
        Ok(())
    }
}
