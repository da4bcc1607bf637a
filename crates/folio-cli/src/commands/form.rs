//! Form command implementation.

use std::io::Write;

use clap::Parser;
use folio_common_log::spans::render_span;
use folio_pagination::{PaginationConfig, PaginationState, RequestParams};

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Render the results-per-page form
#[derive(Debug, Parser)]
pub struct FormCommand {
    /// Total number of records in the result set
    #[arg(long)]
    pub total: u64,

    /// Request query string; its parameters become hidden fields
    #[arg(long, default_value = "")]
    pub query: String,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl FormCommand {
    pub fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<(), CliError> {
        let config = PaginationConfig::from_settings(&ctx.config.pagination, self.total)?;
        let params = RequestParams::parse(&self.query);
        let state = PaginationState::new(&config, &params);

        let Some(form) = state.per_page_form(&ctx.config.per_page_form) else {
            tracing::info!(total = self.total, "result set too small for a page-size form");
            if self.format == OutputFormat::Json {
                writeln!(out, "null")?;
            }
            return Ok(());
        };

        let renderer = super::renderer(self.format, &ctx.config.render)?;
        let _span = render_span(renderer.name()).entered();
        let rendered = folio_common_log::timed!("render_form", renderer.render_form(&form))?;
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}
