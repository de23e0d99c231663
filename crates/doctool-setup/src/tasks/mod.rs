//! The individual setup tasks.
//!
//! Each task reads what it needs from a [`TaskContext`] and returns a
//! [`TaskOutcome`](crate::TaskOutcome). Only [`gitignore::run`] can return
//! an error.

pub mod git;
pub mod gitignore;
pub mod guidance;
pub mod install;
pub mod prune;
pub mod tools;

use std::path::Path;

use doctool_config::ProjectConfig;

use crate::reporter::Reporter;
use crate::runner::{CommandRunner, OutputMode};

/// Everything a task may touch.
pub struct TaskContext<'a> {
    pub project_dir: &'a Path,
    pub config: &'a ProjectConfig,
    pub runner: &'a dyn CommandRunner,
    pub reporter: &'a mut Reporter,
    /// Where long-running children such as pipenv write their output.
    pub child_output: OutputMode,
}
