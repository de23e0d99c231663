//! Tool and version detection.

use std::path::PathBuf;

use serde::Serialize;

use crate::runner::{CommandRunner, Invocation};

/// Tool detection results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub available: bool,
    pub version: Option<String>,
}

/// Probe for `name` and, if found, ask it for its version.
pub async fn detect_tool(runner: &dyn CommandRunner, name: &str) -> ToolInfo {
    let mut info = ToolInfo {
        name: name.to_string(),
        available: runner.probe(name),
        version: None,
    };

    if info.available {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let invocation = Invocation::new(name, cwd).arg("--version");
        if let Ok(output) = runner.run(&invocation).await {
            if output.success() {
                info.version = extract_version(&output.stdout);
            }
        }
    }

    info
}

/// Pull the first version-looking word out of `--version` output.
pub fn extract_version(output: &str) -> Option<String> {
    output
        .lines()
        .flat_map(str::split_whitespace)
        .find(|word| looks_like_version(word))
        .map(str::to_string)
}

fn looks_like_version(s: &str) -> bool {
    let s = s.strip_prefix('v').unwrap_or(s);

    // Must start with a digit
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }

    // Must contain at least one dot
    if !s.contains('.') {
        return false;
    }

    s.len() >= 3 && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}
