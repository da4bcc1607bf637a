//! Environment variable handling.

use crate::types::FolioConfig;
use std::env;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    // Configuration
    pub const FOLIO_CONFIG: &str = "FOLIO_CONFIG";
    pub const FOLIO_ENV: &str = "FOLIO_ENV";

    // Pagination overrides
    pub const FOLIO_VISIBLE_PAGE_NUMBERS: &str = "FOLIO_VISIBLE_PAGE_NUMBERS";
    pub const FOLIO_DEFAULT_ROWS_PER_PAGE: &str = "FOLIO_DEFAULT_ROWS_PER_PAGE";
    pub const FOLIO_MAX_ROWS_PER_PAGE: &str = "FOLIO_MAX_ROWS_PER_PAGE";
    pub const FOLIO_PAGE_PARAM: &str = "FOLIO_PAGE_PARAM";
    pub const FOLIO_SIZE_PARAM: &str = "FOLIO_SIZE_PARAM";

    // Logging
    pub const FOLIO_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Environment configuration.
pub struct Environment {
    _guard: (),
}

impl Environment {
    /// Initialize environment from .env files.
    ///
    /// Missing files are skipped; a file that exists but does not parse is
    /// an error.
    pub fn init() -> Result<Self, EnvError> {
        // Variables that are already set win, so load the most specific file first.
        if let Ok(env) = env::var(vars::FOLIO_ENV) {
            load_optional(&format!(".env.{}", env))?;
        }
        load_optional(".env.local")?;
        load_optional(".env")?;

        Ok(Self { _guard: () })
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }
}

fn load_optional(name: &str) -> Result<(), EnvError> {
    match dotenvy::from_filename(name) {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Apply `FOLIO_*` overrides from the process environment.
pub fn apply_overrides(config: &mut FolioConfig) -> Result<(), EnvError> {
    apply_overrides_with(config, |var| env::var(var).ok())
}

/// Apply overrides read through `lookup`.
pub fn apply_overrides_with<F>(config: &mut FolioConfig, lookup: F) -> Result<(), EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    let pagination = &mut config.pagination;

    if let Some(v) = parse_int(&lookup, vars::FOLIO_VISIBLE_PAGE_NUMBERS)? {
        pagination.visible_page_numbers = v;
    }
    if let Some(v) = parse_int(&lookup, vars::FOLIO_DEFAULT_ROWS_PER_PAGE)? {
        pagination.default_rows_per_page = v;
    }
    if let Some(v) = parse_int(&lookup, vars::FOLIO_MAX_ROWS_PER_PAGE)? {
        pagination.max_rows_per_page = v;
    }
    if let Some(v) = lookup(vars::FOLIO_PAGE_PARAM) {
        pagination.page_param = v;
    }
    if let Some(v) = lookup(vars::FOLIO_SIZE_PARAM) {
        pagination.size_param = v;
    }

    Ok(())
}

fn parse_int<F>(lookup: &F, var: &str) -> Result<Option<u64>, EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(v) => v.trim().parse().map(Some).map_err(|_| EnvError::InvalidValue {
            var: var.to_string(),
            message: format!("expected a non-negative integer, got {v:?}"),
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = FolioConfig::default();
        apply_overrides_with(
            &mut config,
            lookup(&[
                (vars::FOLIO_VISIBLE_PAGE_NUMBERS, "5"),
                (vars::FOLIO_MAX_ROWS_PER_PAGE, " 200 "),
                (vars::FOLIO_PAGE_PARAM, "p"),
            ]),
        )
        .unwrap();

        assert_eq!(config.pagination.visible_page_numbers, 5);
        assert_eq!(config.pagination.max_rows_per_page, 200);
        assert_eq!(config.pagination.page_param, "p");
        // Untouched
        assert_eq!(config.pagination.default_rows_per_page, 10);
        assert_eq!(config.pagination.size_param, "perpage");
    }

    #[test]
    fn test_invalid_integer_override() {
        let mut config = FolioConfig::default();
        let err = apply_overrides_with(
            &mut config,
            lookup(&[(vars::FOLIO_DEFAULT_ROWS_PER_PAGE, "ten")]),
        )
        .unwrap_err();

        match err {
            EnvError::InvalidValue { var, .. } => {
                assert_eq!(var, vars::FOLIO_DEFAULT_ROWS_PER_PAGE)
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_get_unset_var() {
        assert_eq!(Environment::get("FOLIO_TEST_DEFINITELY_UNSET"), None);
    }
}
