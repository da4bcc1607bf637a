use super::Renderer;
use crate::form::PerPageForm;
use crate::links::LinkSet;
use folio_common_core::Result;
use serde::Serialize;

/// Structured output as JSON, for clients that build their own markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render_links(&self, links: &LinkSet) -> Result<String> {
        self.to_json(links)
    }

    fn render_form(&self, form: &PerPageForm) -> Result<String> {
        self.to_json(form)
    }
}
