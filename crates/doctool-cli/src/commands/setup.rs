//! Setup command implementation.

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use doctool_config::{ConfigLoader, ProjectAnswers};
use doctool_setup::{
    IconContext, OutputMode, Reporter, SetupOptions, SetupPipeline, SystemRunner,
};
use tracing::info;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Run the post-generation setup tasks
#[derive(Debug, Parser)]
pub struct SetupCommand {
    /// Project directory produced by the template
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub project_dir: PathBuf,

    /// Answers file (defaults to <PROJECT_DIR>/.doctool.yaml)
    #[arg(long, env = "DOCTOOL_ANSWERS", value_hint = ValueHint::FilePath)]
    pub answers: Option<PathBuf>,

    /// Project display name
    #[arg(long)]
    pub name: Option<String>,

    /// Project directory slug
    #[arg(long)]
    pub slug: Option<String>,

    /// Whether the grammar checker was included
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub grammar_check: Option<bool>,

    /// Whether an introduction chapter was created
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub introduction: Option<bool>,

    /// Skip `pipenv install --dev`
    #[arg(long)]
    pub no_install: bool,

    /// Skip git repository initialization
    #[arg(long)]
    pub no_git: bool,

    /// Skip the pandoc/yq/make presence check
    #[arg(long)]
    pub no_tool_check: bool,
}

impl SetupCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        if !self.project_dir.is_dir() {
            return Err(CliError::validation_with_hint(
                format!("Project directory not found: {}", self.project_dir.display()),
                "Pass the directory the template was rendered into",
            ));
        }

        let mut loader = ConfigLoader::new(&self.project_dir);
        if let Some(answers) = &self.answers {
            loader = loader.with_answers_file(answers);
        }
        let config = loader.load_with(&self.overrides())?;
        info!(project = %config.project_name, slug = %config.project_slug, "Resolved project configuration");

        let runner = SystemRunner::new();
        let report = SetupPipeline::new(&self.project_dir, config, &runner, reporter(ctx))
            .options(self.options())
            .child_output(child_output(ctx))
            .run()
            .await?;

        if ctx.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(())
    }

    fn overrides(&self) -> ProjectAnswers {
        ProjectAnswers {
            project_name: self.name.clone(),
            project_slug: self.slug.clone(),
            include_grammar_check: self.grammar_check,
            create_introduction_chapter: self.introduction,
        }
    }

    fn options(&self) -> SetupOptions {
        SetupOptions {
            check_tools: !self.no_tool_check,
            install_dependencies: !self.no_install,
            init_git: !self.no_git,
        }
    }
}

/// Status lines go to stdout, or to stderr when stdout carries JSON.
pub(crate) fn reporter(ctx: &CommandContext) -> Reporter {
    let icons = IconContext::new();
    if ctx.quiet {
        Reporter::new(io::sink(), icons, false)
    } else if ctx.format == OutputFormat::Json {
        Reporter::new(io::stderr(), icons, ctx.color)
    } else {
        Reporter::new(io::stdout(), icons, ctx.color)
    }
}

/// Keeps pipenv's progress off stdout when stdout carries JSON, and
/// silences it entirely under `--quiet`.
fn child_output(ctx: &CommandContext) -> OutputMode {
    if ctx.quiet {
        OutputMode::Discard
    } else if ctx.format == OutputFormat::Json {
        OutputMode::Stderr
    } else {
        OutputMode::Inherit
    }
}
