//! Repository initialization.

use tracing::{debug, warn};

use super::TaskContext;
use crate::outcome::TaskOutcome;
use crate::runner::{Invocation, RunError};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from Pandoc Documentation Tool";

/// `git init`, `git add .`, `git commit -m ...`, in order.
pub fn steps(project_dir: &std::path::Path) -> [Invocation; 3] {
    [
        Invocation::new("git", project_dir).arg("init"),
        Invocation::new("git", project_dir).args(["add", "."]),
        Invocation::new("git", project_dir).args(["commit", "-m", INITIAL_COMMIT_MESSAGE]),
    ]
}

/// Run the steps, stopping at the first failure. Whatever the earlier
/// steps created is left in place.
pub async fn run(ctx: &mut TaskContext<'_>) -> TaskOutcome {
    for step in steps(ctx.project_dir) {
        match ctx.runner.run(&step).await {
            Ok(output) if output.success() => {
                debug!(command = %step, "Git step succeeded");
            }
            Ok(output) => {
                warn!(command = %step, code = ?output.code, "Git step failed");
                ctx.reporter.warning("Could not initialize git repository");
                return TaskOutcome::soft_failure(format!(
                    "{step} exited with status {}",
                    output
                        .code
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "unknown".to_string())
                ));
            }
            Err(RunError::NotFound { .. }) => {
                warn!("git not found");
                ctx.reporter
                    .warning("Git not found - skipping repository initialization");
                return TaskOutcome::tool_missing("git");
            }
            Err(e) => {
                warn!(command = %step, error = %e, "Git step could not start");
                ctx.reporter.warning("Could not initialize git repository");
                return TaskOutcome::soft_failure(e.to_string());
            }
        }
    }

    ctx.reporter.success("Initialized git repository");
    TaskOutcome::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps() {
        let lines: Vec<_> = steps(std::path::Path::new("."))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            vec![
                "git init".to_string(),
                "git add .".to_string(),
                format!("git commit -m \"{INITIAL_COMMIT_MESSAGE}\""),
            ]
        );
    }
}
