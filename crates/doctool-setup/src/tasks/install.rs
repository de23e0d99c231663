//! Dependency installation through pipenv.

use tracing::warn;

use super::TaskContext;
use crate::outcome::TaskOutcome;
use crate::runner::{Invocation, RunError};

pub const PACKAGE_MANAGER: &str = "pipenv";
pub const INSTALL_ARGS: [&str; 2] = ["install", "--dev"];

/// The command a user can run by hand if the automatic install fails.
pub fn manual_command() -> String {
    format!("{PACKAGE_MANAGER} {}", INSTALL_ARGS.join(" "))
}

pub async fn run(ctx: &mut TaskContext<'_>) -> TaskOutcome {
    ctx.reporter.line("Installing Python dependencies...");
    ctx.reporter.flush();

    let invocation = Invocation::new(PACKAGE_MANAGER, ctx.project_dir)
        .args(INSTALL_ARGS)
        .with_output(ctx.child_output);

    match ctx.runner.run(&invocation).await {
        Ok(output) if output.success() => {
            ctx.reporter.success("Installed Python dependencies");
            TaskOutcome::Success
        }
        Ok(output) => {
            warn!(code = ?output.code, "Dependency install failed");
            ctx.reporter
                .warning("Could not install dependencies automatically");
            ctx.reporter
                .detail(format!("Run '{}' manually", manual_command()));
            TaskOutcome::soft_failure(match output.code {
                Some(code) => format!("{invocation} exited with status {code}"),
                None => format!("{invocation} was terminated by a signal"),
            })
        }
        Err(RunError::NotFound { .. }) => {
            warn!("pipenv not found");
            ctx.reporter
                .warning("Pipenv not found - please install it first:");
            ctx.reporter.detail("pip install pipenv");
            TaskOutcome::tool_missing(PACKAGE_MANAGER)
        }
        Err(e) => {
            warn!(error = %e, "Dependency install could not start");
            ctx.reporter
                .warning("Could not install dependencies automatically");
            ctx.reporter
                .detail(format!("Run '{}' manually", manual_command()));
            TaskOutcome::soft_failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_command() {
        assert_eq!(manual_command(), "pipenv install --dev");
    }
}
