//! Per-task outcomes and the run report.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The setup tasks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    PrunePlaceholders,
    WriteGitignore,
    CheckTools,
    InstallDependencies,
    InitGit,
    PrintGuidance,
}

impl TaskKind {
    /// All tasks in the order the pipeline runs them.
    pub const ORDER: [TaskKind; 6] = [
        TaskKind::PrunePlaceholders,
        TaskKind::WriteGitignore,
        TaskKind::CheckTools,
        TaskKind::InstallDependencies,
        TaskKind::InitGit,
        TaskKind::PrintGuidance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PrunePlaceholders => "prune_placeholders",
            Self::WriteGitignore => "write_gitignore",
            Self::CheckTools => "check_tools",
            Self::InstallDependencies => "install_dependencies",
            Self::InitGit => "init_git",
            Self::PrintGuidance => "print_guidance",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened when a task ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskOutcome {
    /// The task did its work.
    Success,
    /// The task had nothing to do.
    NoOp,
    /// The task failed; the pipeline carried on.
    SoftFailure { reason: String },
    /// The executable the task needs is not installed.
    SkippedToolMissing { tool: String },
    /// The task was switched off by the caller.
    Skipped { reason: String },
}

impl TaskOutcome {
    pub fn soft_failure(reason: impl Into<String>) -> Self {
        Self::SoftFailure {
            reason: reason.into(),
        }
    }

    pub fn tool_missing(tool: impl Into<String>) -> Self {
        Self::SkippedToolMissing { tool: tool.into() }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    /// True for outcomes that deserve a user's attention.
    pub fn is_problem(&self) -> bool {
        matches!(self, Self::SoftFailure { .. } | Self::SkippedToolMissing { .. })
    }
}

/// One entry of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    pub task: TaskKind,
    pub outcome: TaskOutcome,
}

/// Ordered outcomes of one pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetupReport {
    pub project_dir: PathBuf,
    pub outcomes: Vec<TaskRecord>,
}

impl SetupReport {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, task: TaskKind, outcome: TaskOutcome) {
        self.outcomes.push(TaskRecord { task, outcome });
    }

    /// Outcome of the given task, if it ran.
    pub fn outcome(&self, task: TaskKind) -> Option<&TaskOutcome> {
        self.outcomes
            .iter()
            .find(|r| r.task == task)
            .map(|r| &r.outcome)
    }

    /// True when no task failed or was missing its tool.
    pub fn is_clean(&self) -> bool {
        !self.outcomes.iter().any(|r| r.outcome.is_problem())
    }

    /// Tasks whose outcome needs attention.
    pub fn problems(&self) -> impl Iterator<Item = &TaskRecord> {
        self.outcomes.iter().filter(|r| r.outcome.is_problem())
    }
}
