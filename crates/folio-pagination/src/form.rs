//! Results-per-page selector form.

use crate::params::RequestParams;
use folio_common_config::PerPageFormSettings;
use serde::Serialize;

/// A parameter carried through the form unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// One entry of the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeOption {
    pub rows: u64,
    pub selected: bool,
}

/// Structured page-size form, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerPageForm {
    /// `None` submits to the current URL.
    pub action: Option<String>,
    pub method: String,
    pub css_class: String,
    pub label: Option<String>,
    pub submit_text: Option<String>,
    /// Name of the `<select>`, i.e. the page-size parameter.
    pub select_name: String,
    pub hidden: Vec<HiddenField>,
    pub options: Vec<SizeOption>,
}

impl PerPageForm {
    /// Build the form, or `None` when every option would already show all
    /// records (`total_records` does not exceed the smallest option).
    ///
    /// Hidden fields follow the same rule as link query strings: every
    /// parameter except the page and page-size ones, in order. HTML has no way
    /// to carry raw bytes, so invalid UTF-8 is replaced here.
    pub fn build(
        settings: &PerPageFormSettings,
        params: &RequestParams,
        page_param: &str,
        size_param: &str,
        total_records: u64,
        rows_per_page: u64,
    ) -> Option<Self> {
        let smallest = settings.options.iter().copied().min()?;
        if total_records <= smallest {
            tracing::debug!(total_records, smallest, "page-size form not needed");
            return None;
        }

        let hidden = params
            .preserved(page_param, size_param)
            .map(|(name, value)| HiddenField {
                name: String::from_utf8_lossy(name).into_owned(),
                value: String::from_utf8_lossy(value).into_owned(),
            })
            .collect();

        let options = settings
            .options
            .iter()
            .map(|&rows| SizeOption {
                rows,
                selected: rows == rows_per_page,
            })
            .collect();

        Some(Self {
            action: settings.action.clone(),
            method: settings.method.to_ascii_uppercase(),
            css_class: settings.css_class.clone(),
            label: non_empty(&settings.label),
            submit_text: non_empty(&settings.submit_text),
            select_name: size_param.to_string(),
            hidden,
            options,
        })
    }

    /// The option matching the current page size, if it is offered.
    pub fn selected(&self) -> Option<u64> {
        self.options.iter().find(|o| o.selected).map(|o| o.rows)
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
