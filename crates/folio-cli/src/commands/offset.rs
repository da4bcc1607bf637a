//! Offset command implementation.

use std::io::Write;

use clap::Parser;
use folio_pagination::{effective_rows_per_page, offset, PaginationConfig, RequestParams};
use serde::Serialize;

use crate::cli::CommandContext;
use crate::error::CliError;

/// Print LIMIT/OFFSET values for a request
#[derive(Debug, Parser)]
pub struct OffsetCommand {
    /// Request query string, e.g. `page=3&perpage=20`
    #[arg(long, default_value = "")]
    pub query: String,

    /// Total number of records; needed when page clamping is enabled
    #[arg(long)]
    pub total: Option<u64>,

    /// Print a JSON object instead of `key: value` lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Limits {
    rows_per_page: u64,
    offset: u64,
}

impl OffsetCommand {
    pub fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<(), CliError> {
        let mut settings = ctx.config.pagination.clone();
        if self.total.is_none() && settings.clamp_current_page {
            tracing::info!("no --total given, page number is not clamped");
            settings.clamp_current_page = false;
        }

        let config = PaginationConfig::from_settings(&settings, self.total.unwrap_or(0))?;
        let params = RequestParams::parse(&self.query);
        let limits = Limits {
            rows_per_page: effective_rows_per_page(&config, &params),
            offset: offset(&config, &params),
        };

        if self.json {
            writeln!(out, "{}", serde_json::to_string(&limits).map_err(anyhow::Error::from)?)?;
        } else {
            writeln!(out, "rows_per_page: {}", limits.rows_per_page)?;
            writeln!(out, "offset: {}", limits.offset)?;
        }
        Ok(())
    }
}
