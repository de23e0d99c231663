//! The closing "next steps" message.

use std::path::Path;

use doctool_config::ProjectConfig;

use super::TaskContext;
use crate::outcome::TaskOutcome;
use crate::reporter::Reporter;
use crate::tasks::install;

/// Present once dependencies have been installed.
pub const LOCK_FILE: &str = "Pipfile.lock";

const RULE_WIDTH: usize = 50;

/// Print the welcome block for `config`.
///
/// The install step is listed only while `Pipfile.lock` is absent. Steps
/// are numbered after that filtering, so with a lock file present `make`
/// is step 2 rather than keeping a gap at 2.
pub fn print(reporter: &mut Reporter, config: &ProjectConfig, project_dir: &Path) {
    let rule = "=".repeat(RULE_WIDTH);

    reporter.blank();
    reporter.line(&rule);
    reporter.decorated(
        "🎉",
        format!("{} created successfully!", config.project_name),
    );
    reporter.line(&rule);

    let mut steps = vec![format!("cd {}", config.project_slug)];
    if !project_dir.join(LOCK_FILE).exists() {
        steps.push(install::manual_command());
    }
    steps.push("make              # Build documentation".to_string());
    steps.push("make serve        # Preview at http://localhost:4030".to_string());

    reporter.blank();
    reporter.decorated("📝", "Next steps:");
    for (i, step) in steps.iter().enumerate() {
        reporter.detail(format!("{}. {step}", i + 1));
    }

    reporter.blank();
    reporter.decorated("📚", "Quick tips:");
    reporter.detail("- Write chapters in chapters/*.org");
    reporter.detail("- Update metadata.yml to add new chapters");
    reporter.detail("- Run 'make watch' for auto-rebuild");
    if config.include_grammar_check {
        reporter.detail("- Run 'make grammar' to check grammar");
    }

    reporter.blank();
    reporter.decorated("📖", "Documentation: See README.md for full details");
    reporter.blank();
    reporter.decorated_suffix("Happy writing!", "✨");
    reporter.flush();
}

pub fn run(ctx: &mut TaskContext<'_>) -> TaskOutcome {
    print(ctx.reporter, ctx.config, ctx.project_dir);
    TaskOutcome::Success
}
