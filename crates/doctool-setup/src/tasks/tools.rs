//! Presence check for the external tools the generated Makefile uses.

use tracing::warn;

use super::TaskContext;
use crate::outcome::TaskOutcome;
use crate::runner::CommandRunner;

/// An executable the documentation build depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredTool {
    pub command: &'static str,
    pub description: &'static str,
}

pub const REQUIRED_TOOLS: &[RequiredTool] = &[
    RequiredTool {
        command: "pandoc",
        description: "Document conversion",
    },
    RequiredTool {
        command: "yq",
        description: "YAML processing for Makefile",
    },
    RequiredTool {
        command: "make",
        description: "Build system",
    },
];

/// Package-manager commands for installing the required tools, per platform.
pub const INSTALL_HINTS: &[(&str, &str)] = &[
    ("macOS", "brew install pandoc yq"),
    ("Ubuntu", "apt-get install pandoc && snap install yq"),
];

/// Required tools that do not resolve on the search path.
pub fn missing_tools(runner: &dyn CommandRunner) -> Vec<RequiredTool> {
    REQUIRED_TOOLS
        .iter()
        .filter(|tool| !runner.probe(tool.command))
        .copied()
        .collect()
}

pub fn run(ctx: &mut TaskContext<'_>) -> TaskOutcome {
    let missing = missing_tools(ctx.runner);

    if missing.is_empty() {
        ctx.reporter.success("All required tools found");
        return TaskOutcome::Success;
    }

    ctx.reporter.blank();
    ctx.reporter.warning("Missing required tools:");
    for tool in &missing {
        ctx.reporter
            .detail(format!("- {}: {}", tool.command, tool.description));
    }

    ctx.reporter.blank();
    ctx.reporter.line("Install them using your package manager:");
    for (platform, command) in INSTALL_HINTS {
        ctx.reporter.detail(format!("{platform}: {command}"));
    }

    let names: Vec<_> = missing.iter().map(|t| t.command).collect();
    warn!(missing = ?names, "Required tools not found");
    TaskOutcome::soft_failure(format!("missing tools: {}", names.join(", ")))
}
