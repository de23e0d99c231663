mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn setup_without_any_tools_still_succeeds() {
    let ctx = TestContext::new().with_placeholders();

    ctx.command()
        .arg("setup")
        .arg(ctx.path())
        .args(["--grammar-check", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed unused grammar checker"))
        .stdout(predicate::str::contains("Created .gitignore file"))
        .stdout(predicate::str::contains("Missing required tools:"))
        .stdout(predicate::str::contains("Pipenv not found"))
        .stdout(predicate::str::contains("Git not found"))
        .stdout(predicate::str::contains("Happy writing!"));

    assert!(!ctx.path().join("tools/check_grammar.py").exists());
    assert!(ctx.path().join("chapters/introduction.org").exists());

    let gitignore = std::fs::read_to_string(ctx.path().join(".gitignore")).unwrap();
    assert!(gitignore.starts_with("# Python\n__pycache__/\n"));
}

#[test]
fn setup_banner_uses_answers_file() {
    let ctx = TestContext::new();
    ctx.write(".doctool.yaml", "project_name: Field Manual\n");

    ctx.command()
        .arg("setup")
        .arg(ctx.path())
        .arg("--no-install")
        .arg("--no-git")
        .assert()
        .success()
        .stdout(predicate::str::contains("Setting up Field Manual..."))
        .stdout(predicate::str::contains("Pipenv not found").not());
}

#[test]
fn setup_rejects_invalid_slug() {
    let ctx = TestContext::new();

    ctx.command()
        .arg("setup")
        .arg(ctx.path())
        .args(["--slug", "a/b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error[E001]"));

    assert!(!ctx.path().join(".gitignore").exists());
}

#[test]
fn setup_rejects_missing_directory() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["setup", "does-not-exist"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("error[E004]"))
        .stderr(predicate::str::contains("Project directory not found"));
}

#[test]
fn setup_json_report_lists_every_task() {
    let ctx = TestContext::new();

    let output = ctx
        .command()
        .args(["--format", "json", "setup"])
        .arg(ctx.path())
        .arg("--no-git")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 6);
    assert_eq!(outcomes[0]["task"], "prune_placeholders");
    assert_eq!(outcomes[1]["outcome"]["status"], "success");
    assert_eq!(outcomes[3]["outcome"]["status"], "skipped_tool_missing");
    assert_eq!(outcomes[4]["outcome"]["status"], "skipped");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Created .gitignore file"));
}

#[cfg(unix)]
#[test]
fn setup_json_report_survives_noisy_pipenv() {
    let ctx = TestContext::new()
        .with_tool_script("pipenv", "echo 'Installing dependencies from Pipfile...'");

    let output = ctx
        .command()
        .args(["--format", "json", "setup"])
        .arg(ctx.path())
        .arg("--no-git")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcomes"][3]["outcome"]["status"], "success");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Installing dependencies from Pipfile..."));
    assert!(stderr.contains("Installed Python dependencies"));
}

#[cfg(unix)]
#[test]
fn quiet_setup_silences_pipenv() {
    let ctx = TestContext::new()
        .with_tool_script("pipenv", "echo 'Installing dependencies'; echo oops >&2");

    ctx.command()
        .args(["-q", "setup"])
        .arg(ctx.path())
        .arg("--no-git")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Installing").not())
        .stderr(predicate::str::contains("oops").not());
}

#[test]
fn quiet_setup_prints_nothing() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["-q", "setup"])
        .arg(ctx.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(ctx.path().join(".gitignore").exists());
}

#[test]
fn doctor_reports_missing_tools_without_failing() {
    let ctx = TestContext::new();

    ctx.command()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("pandoc not found"))
        .stdout(predicate::str::contains("brew install pandoc yq"));
}

#[test]
fn version_flag() {
    let ctx = TestContext::new();

    ctx.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("doctool"));
}
