//! Validated per-request pagination configuration.

use folio_common_config::{LinkLabels, PaginationSettings};
use folio_common_core::{ensure, Result};
use serde::Serialize;

/// Everything the paginator needs besides the request parameters.
///
/// Built once through [`PaginationConfig::builder`] or
/// [`PaginationConfig::from_settings`]; a built value always satisfies
/// `default_rows_per_page > 0`, `max_rows_per_page > 0` and distinct,
/// non-empty parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationConfig {
    total_records: u64,
    visible_page_numbers: u64,
    default_rows_per_page: u64,
    max_rows_per_page: u64,
    page_param: String,
    size_param: String,
    clamp_current_page: bool,
    labels: LinkLabels,
}

impl PaginationConfig {
    /// Defaults for `total_records` rows.
    pub fn new(total_records: u64) -> Self {
        let settings = PaginationSettings::default();
        Self {
            total_records,
            visible_page_numbers: settings.visible_page_numbers,
            default_rows_per_page: settings.default_rows_per_page,
            max_rows_per_page: settings.max_rows_per_page,
            page_param: settings.page_param,
            size_param: settings.size_param,
            clamp_current_page: settings.clamp_current_page,
            labels: settings.labels,
        }
    }

    /// Start a builder for `total_records` rows.
    pub fn builder(total_records: u64) -> PaginationConfigBuilder {
        PaginationConfigBuilder {
            config: Self::new(total_records),
        }
    }

    /// Combine loaded settings with a record count.
    pub fn from_settings(settings: &PaginationSettings, total_records: u64) -> Result<Self> {
        Self::builder(total_records)
            .visible_page_numbers(settings.visible_page_numbers)
            .default_rows_per_page(settings.default_rows_per_page)
            .max_rows_per_page(settings.max_rows_per_page)
            .page_param(settings.page_param.clone())
            .size_param(settings.size_param.clone())
            .clamp_current_page(settings.clamp_current_page)
            .labels(settings.labels.clone())
            .build()
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn visible_page_numbers(&self) -> u64 {
        self.visible_page_numbers
    }

    pub fn default_rows_per_page(&self) -> u64 {
        self.default_rows_per_page
    }

    pub fn max_rows_per_page(&self) -> u64 {
        self.max_rows_per_page
    }

    /// Name of the page-number parameter.
    pub fn page_param(&self) -> &str {
        &self.page_param
    }

    /// Name of the page-size parameter.
    pub fn size_param(&self) -> &str {
        &self.size_param
    }

    pub fn clamp_current_page(&self) -> bool {
        self.clamp_current_page
    }

    pub fn labels(&self) -> &LinkLabels {
        &self.labels
    }
}

/// Builder for [`PaginationConfig`].
#[derive(Debug, Clone)]
pub struct PaginationConfigBuilder {
    config: PaginationConfig,
}

impl PaginationConfigBuilder {
    /// Width of the page-number window.
    pub fn visible_page_numbers(mut self, width: u64) -> Self {
        self.config.visible_page_numbers = width;
        self
    }

    pub fn default_rows_per_page(mut self, rows: u64) -> Self {
        self.config.default_rows_per_page = rows;
        self
    }

    pub fn max_rows_per_page(mut self, rows: u64) -> Self {
        self.config.max_rows_per_page = rows;
        self
    }

    pub fn page_param(mut self, name: impl Into<String>) -> Self {
        self.config.page_param = name.into();
        self
    }

    pub fn size_param(mut self, name: impl Into<String>) -> Self {
        self.config.size_param = name.into();
        self
    }

    /// Clamp page numbers past the end to the last page.
    pub fn clamp_current_page(mut self, clamp: bool) -> Self {
        self.config.clamp_current_page = clamp;
        self
    }

    pub fn labels(mut self, labels: LinkLabels) -> Self {
        self.config.labels = labels;
        self
    }

    /// Validate and finish.
    pub fn build(self) -> Result<PaginationConfig> {
        let config = self.config;

        ensure!(
            config.default_rows_per_page > 0,
            "default_rows_per_page",
            "must be greater than 0"
        );
        ensure!(
            config.max_rows_per_page > 0,
            "max_rows_per_page",
            "must be greater than 0"
        );
        ensure!(
            !config.page_param.trim().is_empty(),
            "page_param",
            "must not be empty"
        );
        ensure!(
            !config.size_param.trim().is_empty(),
            "size_param",
            "must not be empty"
        );
        ensure!(
            config.page_param != config.size_param,
            "size_param",
            format!("must differ from page_param {:?}", config.page_param)
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common_core::Error;
    use folio_test_utils::{assert_err, assert_ok};

    #[test]
    fn test_defaults() {
        let config = PaginationConfig::new(42);
        assert_eq!(config.total_records(), 42);
        assert_eq!(config.visible_page_numbers(), 0);
        assert_eq!(config.default_rows_per_page(), 10);
        assert_eq!(config.max_rows_per_page(), 99);
        assert_eq!(config.page_param(), "page");
        assert_eq!(config.size_param(), "perpage");
        assert!(!config.clamp_current_page());
        assert_eq!(config.labels().next, "Next");
    }

    #[test]
    fn test_builder_overrides() {
        let config = PaginationConfig::builder(500)
            .visible_page_numbers(7)
            .default_rows_per_page(25)
            .max_rows_per_page(100)
            .page_param("p")
            .size_param("n")
            .clamp_current_page(true)
            .build()
            .unwrap();

        assert_eq!(config.visible_page_numbers(), 7);
        assert_eq!(config.default_rows_per_page(), 25);
        assert_eq!(config.page_param(), "p");
        assert_eq!(config.size_param(), "n");
        assert!(config.clamp_current_page());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let err = PaginationConfig::builder(10)
            .default_rows_per_page(0)
            .build()
            .unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "default_rows_per_page"),
            other => panic!("Expected Validation error, got {other:?}"),
        }

        assert_err!(PaginationConfig::builder(10).max_rows_per_page(0).build());
    }

    #[test]
    fn test_param_names_must_differ() {
        let err = PaginationConfig::builder(10)
            .size_param("page")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must differ"));

        assert_err!(PaginationConfig::builder(10).page_param(" ").build());
    }

    #[test]
    fn test_from_settings() {
        let settings = PaginationSettings {
            visible_page_numbers: 5,
            size_param: "limit".to_string(),
            ..PaginationSettings::default()
        };
        let config = assert_ok!(PaginationConfig::from_settings(&settings, 300));
        assert_eq!(config.total_records(), 300);
        assert_eq!(config.visible_page_numbers(), 5);
        assert_eq!(config.size_param(), "limit");
    }
}
