//! Turning structured links and forms into output.

use crate::form::PerPageForm;
use crate::links::LinkSet;
use folio_common_core::Result;

mod html;
mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

/// A swappable presentation layer.
///
/// An empty [`LinkSet`] renders as an empty string in every implementation
/// that produces markup.
pub trait Renderer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn render_links(&self, links: &LinkSet) -> Result<String>;

    fn render_form(&self, form: &PerPageForm) -> Result<String>;
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
