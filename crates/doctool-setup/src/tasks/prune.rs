//! Removal of unused placeholder files.

use std::io;
use std::path::Path;

use doctool_config::ProjectConfig;
use tracing::{debug, warn};

use super::TaskContext;
use crate::outcome::TaskOutcome;

/// A file the template always creates, left empty when its feature is off.
#[derive(Clone, Copy)]
pub struct Placeholder {
    /// Path relative to the project root.
    pub path: &'static str,
    /// What the file is, as shown to the user.
    pub label: &'static str,
    enabled: fn(&ProjectConfig) -> bool,
}

impl Placeholder {
    pub fn is_enabled(&self, config: &ProjectConfig) -> bool {
        (self.enabled)(config)
    }
}

fn grammar_check(config: &ProjectConfig) -> bool {
    config.include_grammar_check
}

fn introduction(config: &ProjectConfig) -> bool {
    config.create_introduction_chapter
}

pub const PLACEHOLDERS: &[Placeholder] = &[
    Placeholder {
        path: "tools/check_grammar.py",
        label: "grammar checker",
        enabled: grammar_check,
    },
    Placeholder {
        path: "chapters/introduction.org",
        label: "introduction chapter",
        enabled: introduction,
    },
];

/// Delete `path` only if it is an existing, zero-length regular file.
///
/// Returns whether the file was removed.
pub fn remove_if_empty(path: &Path) -> io::Result<bool> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if !metadata.is_file() || metadata.len() != 0 {
        return Ok(false);
    }

    std::fs::remove_file(path)?;
    Ok(true)
}

pub fn run(ctx: &mut TaskContext<'_>) -> TaskOutcome {
    let mut removed = 0;
    let mut failures = Vec::new();

    for placeholder in PLACEHOLDERS {
        if placeholder.is_enabled(ctx.config) {
            continue;
        }

        let path = ctx.project_dir.join(placeholder.path);
        match remove_if_empty(&path) {
            Ok(true) => {
                removed += 1;
                ctx.reporter
                    .success(format!("Removed unused {}", placeholder.label));
            }
            Ok(false) => {
                debug!(path = placeholder.path, "Placeholder absent or non-empty, leaving it");
            }
            Err(e) => {
                warn!(path = placeholder.path, error = %e, "Failed to remove placeholder");
                ctx.reporter.warning(format!(
                    "Could not remove unused {} ({})",
                    placeholder.label, placeholder.path
                ));
                failures.push(format!("{}: {e}", placeholder.path));
            }
        }
    }

    if !failures.is_empty() {
        TaskOutcome::soft_failure(failures.join("; "))
    } else if removed > 0 {
        TaskOutcome::Success
    } else {
        TaskOutcome::NoOp
    }
}
