//! Configuration file loading and parsing.

use crate::env::{apply_overrides, EnvError};
use crate::types::FolioConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory, relative to the project root, holding the config file.
pub const CONFIG_DIR: &str = ".folio";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("invalid substitution pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Where the loader reads from.
#[derive(Debug, Clone)]
enum Source {
    /// `<project>/.folio/config.yaml`, optional.
    Project(PathBuf),
    /// An explicit file, required.
    File(PathBuf),
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    source: Source,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            source: Source::Project(project_dir.as_ref().to_path_buf()),
        }
    }

    /// Create a loader for an explicit config file that must exist.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
        }
    }

    /// Path of the config file this loader reads and writes.
    pub fn config_path(&self) -> PathBuf {
        match &self.source {
            Source::Project(dir) => dir.join(CONFIG_DIR).join(CONFIG_FILE),
            Source::File(path) => path.clone(),
        }
    }

    /// Load configuration, apply environment overrides and validate.
    pub fn load(&self) -> Result<FolioConfig, ConfigError> {
        let config_path = self.config_path();

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let expanded = self.expand_env_vars(&contents)?;
            tracing::debug!(path = %config_path.display(), "loaded config file");
            Self::parse(&expanded)?
        } else {
            match self.source {
                Source::File(_) => return Err(ConfigError::NotFound { path: config_path }),
                Source::Project(_) => FolioConfig::default(),
            }
        };

        apply_overrides(&mut config)?;
        self.validate(&config)?;
        Ok(config)
    }

    fn parse(contents: &str) -> Result<FolioConfig, ConfigError> {
        // An empty or comment-only file means "all defaults".
        if contents.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(FolioConfig::default());
        }

        serde_yaml::from_str(contents).map_err(|e| ConfigError::ParseError {
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;

        for cap in re.captures_iter(content) {
            let Some(full_match) = cap.get(0) else {
                continue;
            };
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result = result.replace(full_match.as_str(), &value);
        }

        Ok(result)
    }

    /// Validate configuration values.
    pub fn validate(&self, config: &FolioConfig) -> Result<(), ConfigError> {
        let pagination = &config.pagination;

        if pagination.default_rows_per_page == 0 {
            return Err(validation("pagination.default_rows_per_page must be greater than 0"));
        }

        if pagination.max_rows_per_page == 0 {
            return Err(validation("pagination.max_rows_per_page must be greater than 0"));
        }

        if pagination.page_param.trim().is_empty() || pagination.size_param.trim().is_empty() {
            return Err(validation("pagination parameter names must not be empty"));
        }

        if pagination.page_param == pagination.size_param {
            return Err(validation(
                "pagination.page_param and pagination.size_param must differ",
            ));
        }

        if config.per_page_form.options.contains(&0) {
            return Err(validation("per_page_form.options must not contain 0"));
        }

        let method = config.per_page_form.method.to_ascii_uppercase();
        if method != "GET" && method != "POST" {
            return Err(validation("per_page_form.method must be GET or POST"));
        }

        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, config: &FolioConfig) -> Result<(), ConfigError> {
        let config_path = self.config_path();
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(&config_path, yaml)?;
        tracing::info!(path = %config_path.display(), "wrote config file");
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

fn validation(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_test_utils::temp_dir;
    use std::fs;

    fn write_config(dir: &Path, contents: &str) {
        let config_dir = dir.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE), contents).unwrap();
    }

    #[test]
    fn test_load_defaults_when_no_file() {
        let dir = temp_dir();
        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config.pagination.default_rows_per_page, 10);
        assert_eq!(config.pagination.page_param, "page");
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = temp_dir();
        let missing = dir.path().join("nope.yaml");
        match ConfigLoader::from_file(&missing).load().unwrap_err() {
            ConfigError::NotFound { path } => assert_eq!(path, missing),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_from_yaml_file() {
        let dir = temp_dir();
        write_config(
            dir.path(),
            r#"
pagination:
  visible_page_numbers: 7
  max_rows_per_page: 50
  size_param: per_page
  labels:
    next: "Older"
per_page_form:
  options: [25, 50]
render:
  css_class: compact
"#,
        );

        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(config.pagination.visible_page_numbers, 7);
        assert_eq!(config.pagination.max_rows_per_page, 50);
        assert_eq!(config.pagination.size_param, "per_page");
        assert_eq!(config.pagination.labels.next, "Older");
        assert_eq!(config.per_page_form.options, vec![25, 50]);
        assert_eq!(config.render.css_class, "compact");

        // Unspecified values keep their defaults
        assert_eq!(config.pagination.default_rows_per_page, 10);
        assert_eq!(config.pagination.labels.prev, "Previous");
        assert_eq!(config.per_page_form.submit_text, "Update");
    }

    #[test]
    fn test_comment_only_file_uses_defaults() {
        let dir = temp_dir();
        write_config(dir.path(), "# nothing here yet\n\n");
        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_env_var_default() {
        let loader = ConfigLoader::new(".");
        let result = loader
            .expand_env_vars("max_rows_per_page: ${FOLIO_TEST_NONEXISTENT:-40}")
            .unwrap();
        assert_eq!(result, "max_rows_per_page: 40");
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("FOLIO_TEST_PAGE_PARAM", "p");
        let loader = ConfigLoader::new(".");
        let result = loader.expand_env_vars("page_param: ${FOLIO_TEST_PAGE_PARAM}").unwrap();
        assert_eq!(result, "page_param: p");
        std::env::remove_var("FOLIO_TEST_PAGE_PARAM");
    }

    #[test]
    fn test_env_var_missing_error() {
        let loader = ConfigLoader::new(".");
        match loader.expand_env_vars("key: ${FOLIO_TEST_MISSING_VAR}").unwrap_err() {
            ConfigError::EnvVarNotFound { var } => assert_eq!(var, "FOLIO_TEST_MISSING_VAR"),
            other => panic!("Expected EnvVarNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_errors() {
        let loader = ConfigLoader::new(".");

        let mut config = FolioConfig::default();
        config.pagination.default_rows_per_page = 0;
        match loader.validate(&config).unwrap_err() {
            ConfigError::ValidationError { message } => {
                assert!(message.contains("default_rows_per_page"))
            }
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let mut config = FolioConfig::default();
        config.pagination.size_param = "page".to_string();
        match loader.validate(&config).unwrap_err() {
            ConfigError::ValidationError { message } => assert!(message.contains("must differ")),
            other => panic!("Expected ValidationError, got {other:?}"),
        }

        let mut config = FolioConfig::default();
        config.per_page_form.method = "DELETE".to_string();
        assert!(loader.validate(&config).is_err());

        let mut config = FolioConfig::default();
        config.per_page_form.options = vec![10, 0];
        assert!(loader.validate(&config).is_err());
    }

    #[test]
    fn test_parse_error_with_line_number() {
        let dir = temp_dir();
        write_config(
            dir.path(),
            r#"
pagination:
  page_param: page
  labels: [unclosed
"#,
        );

        match ConfigLoader::new(dir.path()).load().unwrap_err() {
            ConfigError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_save_config_round_trips() {
        let dir = temp_dir();
        let loader = ConfigLoader::new(dir.path());

        let mut config = FolioConfig::default();
        config.pagination.visible_page_numbers = 9;
        config.per_page_form.action = Some("/search".to_string());
        loader.save(&config).unwrap();

        assert!(dir.path().join(".folio/config.yaml").exists());
        assert_eq!(loader.load().unwrap(), config);
    }
}
