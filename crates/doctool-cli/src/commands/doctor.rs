//! Doctor command for checking the documentation toolchain.

use clap::Parser;
use doctool_setup::tasks::tools::{RequiredTool, INSTALL_HINTS, REQUIRED_TOOLS};
use doctool_setup::{detect_tool, CommandRunner, Reporter, SystemRunner, ToolInfo};
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::commands::setup::reporter;
use crate::error::CliError;

/// Tools the setup uses opportunistically; their absence is not fatal.
const OPTIONAL_TOOLS: &[RequiredTool] = &[
    RequiredTool {
        command: "pipenv",
        description: "Python dependency management",
    },
    RequiredTool {
        command: "git",
        description: "Version control",
    },
];

/// Check that the documentation toolchain is installed
#[derive(Debug, Parser)]
pub struct DoctorCommand {
    /// Only check pandoc, yq and make
    #[arg(long)]
    pub required_only: bool,
}

#[derive(Debug, Serialize)]
struct ToolCheck {
    #[serde(flatten)]
    info: ToolInfo,
    description: &'static str,
    required: bool,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    tools: Vec<ToolCheck>,
    missing_required: usize,
}

impl DoctorCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let runner = SystemRunner::new();
        let report = self.check(&runner).await;

        let mut out = reporter(ctx);
        print_report(&mut out, &report);

        if ctx.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(())
    }

    async fn check(&self, runner: &dyn CommandRunner) -> DoctorReport {
        let required = REQUIRED_TOOLS.iter().map(|tool| (tool, true));
        let optional = OPTIONAL_TOOLS
            .iter()
            .filter(|_| !self.required_only)
            .map(|tool| (tool, false));

        let mut tools = Vec::new();
        for (tool, required) in required.chain(optional) {
            tools.push(ToolCheck {
                info: detect_tool(runner, tool.command).await,
                description: tool.description,
                required,
            });
        }

        let missing_required = tools
            .iter()
            .filter(|t| t.required && !t.info.available)
            .count();

        DoctorReport {
            tools,
            missing_required,
        }
    }
}

fn print_report(out: &mut Reporter, report: &DoctorReport) {
    for check in &report.tools {
        let name = &check.info.name;
        match (check.info.available, check.info.version.as_deref()) {
            (true, Some(version)) => {
                out.success(format!("{name} {version} ({})", check.description))
            }
            (true, None) => out.success(format!("{name} ({})", check.description)),
            (false, _) => out.warning(format!("{name} not found ({})", check.description)),
        }
    }

    if report.missing_required > 0 {
        out.blank();
        out.line("Install them using your package manager:");
        for (platform, command) in INSTALL_HINTS {
            out.detail(format!("{platform}: {command}"));
        }
    }

    out.flush();
}
