//! The ordered setup pipeline.

use std::path::{Path, PathBuf};

use doctool_config::{ConfigLoader, ProjectConfig};
use tracing::{info, info_span, Instrument};

use crate::error::SetupResult;
use crate::outcome::{SetupReport, TaskKind, TaskOutcome};
use crate::reporter::{auto_color, Reporter};
use crate::runner::{CommandRunner, OutputMode, SystemRunner};
use crate::tasks::{self, TaskContext};

/// Switches for the optional tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupOptions {
    pub check_tools: bool,
    pub install_dependencies: bool,
    pub init_git: bool,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            check_tools: true,
            install_dependencies: true,
            init_git: true,
        }
    }
}

impl SetupOptions {
    fn enabled(&self, task: TaskKind) -> bool {
        match task {
            TaskKind::CheckTools => self.check_tools,
            TaskKind::InstallDependencies => self.install_dependencies,
            TaskKind::InitGit => self.init_git,
            TaskKind::PrunePlaceholders | TaskKind::WriteGitignore | TaskKind::PrintGuidance => {
                true
            }
        }
    }
}

/// Runs every setup task once, in [`TaskKind::ORDER`].
pub struct SetupPipeline<'a> {
    project_dir: PathBuf,
    config: ProjectConfig,
    options: SetupOptions,
    child_output: OutputMode,
    runner: &'a dyn CommandRunner,
    reporter: Reporter,
}

impl<'a> SetupPipeline<'a> {
    pub fn new(
        project_dir: impl AsRef<Path>,
        config: ProjectConfig,
        runner: &'a dyn CommandRunner,
        reporter: Reporter,
    ) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
            config,
            options: SetupOptions::default(),
            child_output: OutputMode::Inherit,
            runner,
            reporter,
        }
    }

    pub fn options(mut self, options: SetupOptions) -> Self {
        self.options = options;
        self
    }

    /// Where pipenv's own progress output goes. Defaults to the terminal.
    pub fn child_output(mut self, output: OutputMode) -> Self {
        self.child_output = output;
        self
    }

    /// Run all tasks.
    ///
    /// Returns `Err` only if `.gitignore` could not be written. Every other
    /// failure is printed and recorded in the report.
    pub async fn run(mut self) -> SetupResult<SetupReport> {
        let mut report = SetupReport::new(&self.project_dir);

        self.reporter.blank();
        self.reporter
            .decorated("🚀", format!("Setting up {}...", self.config.project_name));
        self.reporter.blank();

        for task in TaskKind::ORDER {
            let outcome = if self.options.enabled(task) {
                let span = info_span!("task", name = task.name());
                self.run_task(task).instrument(span).await?
            } else {
                TaskOutcome::skipped("disabled")
            };

            info!(task = task.name(), outcome = ?outcome, "Task finished");
            report.record(task, outcome);
        }

        self.reporter.flush();
        Ok(report)
    }

    async fn run_task(&mut self, task: TaskKind) -> SetupResult<TaskOutcome> {
        let mut ctx = TaskContext {
            project_dir: &self.project_dir,
            config: &self.config,
            runner: self.runner,
            reporter: &mut self.reporter,
            child_output: self.child_output,
        };

        let outcome = match task {
            TaskKind::PrunePlaceholders => tasks::prune::run(&mut ctx),
            TaskKind::WriteGitignore => tasks::gitignore::run(&mut ctx)?,
            TaskKind::CheckTools => tasks::tools::run(&mut ctx),
            TaskKind::InstallDependencies => tasks::install::run(&mut ctx).await,
            TaskKind::InitGit => tasks::git::run(&mut ctx).await,
            TaskKind::PrintGuidance => tasks::guidance::run(&mut ctx),
        };
        Ok(outcome)
    }
}

/// Resolve the configuration for `project_dir` and run the pipeline against
/// real processes, printing to stdout. Color follows [`auto_color`].
pub async fn run(project_dir: impl AsRef<Path>) -> SetupResult<SetupReport> {
    let project_dir = project_dir.as_ref();
    let config = ConfigLoader::new(project_dir).load()?;
    let runner = SystemRunner::new();

    SetupPipeline::new(project_dir, config, &runner, Reporter::stdout(auto_color()))
        .run()
        .await
}
