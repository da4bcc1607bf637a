//! Command implementations.

mod config;
mod form;
mod links;
mod offset;

pub use config::ConfigCommand;
pub use form::FormCommand;
pub use links::LinksCommand;
pub use offset::OffsetCommand;

use folio_common_config::RenderSettings;
use folio_pagination::{HtmlRenderer, JsonRenderer, Renderer};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Renderer for `format`, configured from the `render` section.
fn renderer(format: OutputFormat, settings: &RenderSettings) -> Result<Box<dyn Renderer>, CliError> {
    Ok(match format {
        OutputFormat::Html => Box::new(HtmlRenderer::from_settings(settings)?),
        OutputFormat::Json => Box::new(JsonRenderer::pretty()),
    })
}
