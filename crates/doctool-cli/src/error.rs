//! CLI error handling and formatting.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use doctool_config::ConfigError;
use doctool_setup::SetupError;
use thiserror::Error;

/// CLI error type with rich context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Validation {
        message: String,
        hint: Option<String>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Validation { .. } => "E004",
            Self::Other(_) => "E999",
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub(crate) fn exit_status(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Validation { .. } => 5,
            Self::Other(_) => 1,
        }
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } | Self::Validation { hint, .. } => hint.as_deref(),
            Self::Io { .. } => Some("Check that the project directory exists and is writable"),
            Self::Other(_) => None,
        }
    }

    /// Create a validation error with hint
    pub fn validation_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Render as `error[CODE]: message`, followed by the path and hint when known.
    pub fn render(&self) -> String {
        let mut out = format!("error[{}]: {self}", self.code());

        if let Self::Io { path: Some(p), .. } = self {
            out.push_str(&format!("\n  path: {}", p.display()));
        }
        if let Some(hint) = self.hint() {
            out.push_str(&format!("\n\nhint: {hint}"));
        }

        out
    }
}

// Conversion implementations
impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::anyhow!("JSON serialization failed: {err}"))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
            hint: Some("Check the project answers file and command-line flags".to_string()),
        }
    }
}

impl From<SetupError> for CliError {
    fn from(err: SetupError) -> Self {
        match err {
            SetupError::Io { path, source } => Self::Io {
                message: format!("Failed to write {}", path.display()),
                source,
                path: Some(path),
            },
            SetupError::Config(e) => e.into(),
        }
    }
}
