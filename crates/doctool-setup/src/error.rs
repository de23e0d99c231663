//! Setup error types.

use std::path::PathBuf;

use doctool_config::ConfigError;
use thiserror::Error;

/// Errors that abort the setup pipeline.
///
/// Only conditions the pipeline cannot continue past end up here. Missing
/// tools and failing child processes are recorded as task outcomes instead.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SetupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type SetupResult<T> = Result<T, SetupError>;
