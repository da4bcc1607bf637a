//! Links command implementation.

use std::io::Write;

use clap::Parser;
use folio_common_log::spans::render_span;
use folio_pagination::{BaseUrl, PaginationConfig, PaginationState, RequestParams};

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Render navigation links
#[derive(Debug, Parser)]
pub struct LinksCommand {
    /// Total number of records in the result set
    #[arg(long)]
    pub total: u64,

    /// Request query string, e.g. `q=shoes&page=3`
    #[arg(long, default_value = "")]
    pub query: String,

    /// Prefix for link targets; relative `?query` links when omitted
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl LinksCommand {
    pub fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<(), CliError> {
        if matches!(&self.base_url, Some(base) if base.trim().is_empty()) {
            return Err(CliError::validation("base-url", "must not be empty"));
        }

        let config = PaginationConfig::from_settings(&ctx.config.pagination, self.total)?;
        let params = RequestParams::parse(&self.query);

        let state = match &self.base_url {
            Some(base) => {
                PaginationState::with_url_builder(&config, &params, &BaseUrl::new(base.as_str()))
            }
            None => PaginationState::new(&config, &params),
        };

        let renderer = super::renderer(self.format, &ctx.config.render)?;
        let _span = render_span(renderer.name()).entered();
        let rendered = folio_common_log::timed!("render_links", renderer.render_links(state.links()))?;

        if !rendered.is_empty() {
            writeln!(out, "{rendered}")?;
        }
        Ok(())
    }
}
