//! Answers file loading and validation.

use crate::types::{ProjectAnswers, ProjectConfig};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Answers file name, relative to the project directory.
pub const ANSWERS_FILE: &str = ".doctool.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("answers file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read answers file: {source}")]
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
}

/// Resolves a [`ProjectConfig`] for a project directory.
pub struct ConfigLoader {
    project_dir: PathBuf,
    answers_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
            answers_file: None,
        }
    }

    /// Read answers from an explicit file instead of `.doctool.yaml`.
    ///
    /// Unlike the default location, an explicit file must exist.
    pub fn with_answers_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.answers_file = Some(path.into());
        self
    }

    /// Load defaults and the answers file, without overrides.
    pub fn load(&self) -> Result<ProjectConfig, ConfigError> {
        self.load_with(&ProjectAnswers::default())
    }

    /// Load defaults, then the answers file, then `overrides`, and validate.
    pub fn load_with(&self, overrides: &ProjectAnswers) -> Result<ProjectConfig, ConfigError> {
        let mut config = ProjectConfig::for_directory(&self.project_dir);

        if let Some(answers) = self.read_answers()? {
            config.apply(&answers);
        }
        config.apply(overrides);

        validate(&config)?;
        Ok(config)
    }

    fn read_answers(&self) -> Result<Option<ProjectAnswers>, ConfigError> {
        let path = match &self.answers_file {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::NotFound {
                        path: explicit.clone(),
                    });
                }
                explicit.clone()
            }
            None => {
                let default = self.project_dir.join(ANSWERS_FILE);
                if !default.exists() {
                    return Ok(None);
                }
                default
            }
        };

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Some(ProjectAnswers::default()));
        }
        let expanded = expand_env_vars(&contents)?;

        let answers = serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

        Ok(Some(answers))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

fn env_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("env pattern is a valid regex")
    })
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
pub fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let mut result = content.to_string();

    for cap in env_pattern().captures_iter(content) {
        let full_match = &cap[0];
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

        result = result.replace(full_match, &value);
    }

    Ok(result)
}

/// Validate resolved configuration values.
pub fn validate(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project_name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "project_name must not be empty".to_string(),
        });
    }

    let slug = &config.project_slug;
    if slug.is_empty() {
        return Err(ConfigError::ValidationError {
            message: "project_slug must not be empty".to_string(),
        });
    }
    if slug.contains(['/', '\\']) || slug == "." || slug == ".." {
        return Err(ConfigError::ValidationError {
            message: format!("project_slug '{slug}' must be a single directory name"),
        });
    }
    if slug.chars().any(char::is_whitespace) {
        return Err(ConfigError::ValidationError {
            message: format!("project_slug '{slug}' must not contain whitespace"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert!(config.include_grammar_check);
        assert!(config.create_introduction_chapter);
        assert!(!config.project_slug.is_empty());
    }

    #[test]
    fn test_load_answers_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(ANSWERS_FILE),
            r#"
project_name: Field Manual
project_slug: field-manual
include_grammar_check: false
"#,
        )
        .unwrap();

        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(config.project_name, "Field Manual");
        assert_eq!(config.project_slug, "field-manual");
        assert!(!config.include_grammar_check);
        // Unspecified values keep their defaults
        assert!(config.create_introduction_chapter);
    }

    #[test]
    fn test_overrides_win_over_answers_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(ANSWERS_FILE),
            "project_name: From File\ncreate_introduction_chapter: true\n",
        )
        .unwrap();

        let overrides = ProjectAnswers {
            project_name: Some("From Flag".to_string()),
            create_introduction_chapter: Some(false),
            ..Default::default()
        };
        let config = ConfigLoader::new(dir.path()).load_with(&overrides).unwrap();

        assert_eq!(config.project_name, "From Flag");
        assert!(!config.create_introduction_chapter);
    }

    #[test]
    fn test_empty_answers_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(ANSWERS_FILE), "\n").unwrap();

        assert!(ConfigLoader::new(dir.path()).load().is_ok());
    }

    #[test]
    fn test_explicit_answers_file_must_exist() {
        let dir = tempdir().unwrap();
        let result = ConfigLoader::new(dir.path())
            .with_answers_file(dir.path().join("missing.yaml"))
            .load();

        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(ANSWERS_FILE), "include_grammer_check: true\n").unwrap();

        let result = ConfigLoader::new(dir.path()).load();
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_env_var_default() {
        let result = expand_env_vars("project_name: ${DOCTOOL_NONEXISTENT_VAR:-Fallback}").unwrap();
        assert_eq!(result, "project_name: Fallback");
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("DOCTOOL_TEST_SLUG", "ops-guide");
        let result = expand_env_vars("project_slug: ${DOCTOOL_TEST_SLUG}").unwrap();
        assert_eq!(result, "project_slug: ops-guide");
        std::env::remove_var("DOCTOOL_TEST_SLUG");
    }

    #[test]
    fn test_env_var_missing_error() {
        let result = expand_env_vars("project_name: ${DOCTOOL_MISSING_VAR}");
        match result.unwrap_err() {
            ConfigError::EnvVarNotFound { var } => assert_eq!(var, "DOCTOOL_MISSING_VAR"),
            other => panic!("Expected EnvVarNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_bad_slugs() {
        for slug in ["", "a/b", "..", "has space", "back\\slash"] {
            let config = ProjectConfig {
                project_slug: slug.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(validate(&config), Err(ConfigError::ValidationError { .. })),
                "slug {slug:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let config = ProjectConfig {
            project_name: "   ".to_string(),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }
}
