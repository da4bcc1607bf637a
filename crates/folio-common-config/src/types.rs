//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Page arithmetic and link settings.
    pub pagination: PaginationSettings,
    /// Results-per-page form settings.
    pub per_page_form: PerPageFormSettings,
    /// Markup settings.
    pub render: RenderSettings,
}

/// Settings shared by every request.
///
/// The record count is per request and is not part of the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
    /// Width of the page-number window.
    pub visible_page_numbers: u64,
    /// Rows per page when the request does not ask for a valid size.
    pub default_rows_per_page: u64,
    /// Largest page size a request may ask for.
    pub max_rows_per_page: u64,
    /// Query parameter carrying the page number.
    pub page_param: String,
    /// Query parameter carrying the page size.
    pub size_param: String,
    /// Clamp out-of-range page numbers to the last page.
    pub clamp_current_page: bool,
    /// Navigation link text.
    pub labels: LinkLabels,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            visible_page_numbers: 0,
            default_rows_per_page: 10,
            max_rows_per_page: 99,
            page_param: "page".to_string(),
            size_param: "perpage".to_string(),
            clamp_current_page: false,
            labels: LinkLabels::default(),
        }
    }
}

/// Display text for the navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkLabels {
    pub next: String,
    pub prev: String,
    pub first: String,
    pub last: String,
}

impl Default for LinkLabels {
    fn default() -> Self {
        Self {
            next: "Next".to_string(),
            prev: "Previous".to_string(),
            first: "\u{ab}".to_string(),
            last: "\u{bb}".to_string(),
        }
    }
}

/// Results-per-page selector form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerPageFormSettings {
    /// Selectable page sizes, in display order.
    pub options: Vec<u64>,
    /// Form action. `None` submits to the current URL.
    pub action: Option<String>,
    /// HTTP method.
    pub method: String,
    /// Extra CSS class on the wrapper.
    pub css_class: String,
    /// Submit button text. Empty omits the button.
    pub submit_text: String,
    /// Label text. Empty omits the label.
    pub label: String,
}

impl Default for PerPageFormSettings {
    fn default() -> Self {
        Self {
            options: vec![10, 20, 30, 40, 50],
            action: None,
            method: "GET".to_string(),
            css_class: String::new(),
            submit_text: "Update".to_string(),
            label: "Results per page: ".to_string(),
        }
    }
}

/// Markup settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Extra CSS class on the pagination wrapper.
    pub css_class: String,
    /// Stylesheet inlined ahead of the links.
    pub stylesheet: Option<PathBuf>,
}
