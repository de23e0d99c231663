//! The `.gitignore` manifest.

use super::TaskContext;
use crate::error::{SetupError, SetupResult};
use crate::outcome::TaskOutcome;

pub const GITIGNORE_PATH: &str = ".gitignore";

/// Fixed content written to every generated project.
pub const GITIGNORE: &str = "\
# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
env/
venv/
.venv
pip-log.txt
pip-delete-this-directory.txt
.tox/
.coverage
.coverage.*
.cache
.pytest_cache/
nosetests.xml
coverage.xml
*.cover
.hypothesis/

# Pipenv
Pipfile.lock

# IDE
.vscode/
.idea/
*.swp
*.swo
*~
.DS_Store

# Build outputs
index.html
index.md
build_readme.md
*.log

# Ruff
.ruff_cache/
";

/// Overwrite `.gitignore`. A write failure aborts the pipeline.
pub fn run(ctx: &mut TaskContext<'_>) -> SetupResult<TaskOutcome> {
    let path = ctx.project_dir.join(GITIGNORE_PATH);
    std::fs::write(&path, GITIGNORE).map_err(|e| SetupError::io(&path, e))?;

    ctx.reporter.success("Created .gitignore file");
    Ok(TaskOutcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_sections() {
        for section in ["# Python", "# Pipenv", "# IDE", "# Build outputs", "# Ruff"] {
            assert!(GITIGNORE.contains(section), "missing section {section}");
        }
        assert!(GITIGNORE.starts_with("# Python\n"));
        assert!(GITIGNORE.ends_with(".ruff_cache/\n"));
    }

    #[test]
    fn test_lists_build_outputs() {
        let lines: Vec<_> = GITIGNORE.lines().collect();
        assert!(lines.contains(&"index.html"));
        assert!(lines.contains(&"Pipfile.lock"));
        assert!(lines.contains(&"*$py.class"));
    }
}
