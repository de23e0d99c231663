//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fully resolved template answers for one generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Human-readable project name.
    pub project_name: String,
    /// Directory slug the project was generated into.
    pub project_slug: String,
    /// Whether the grammar checker tooling was requested.
    pub include_grammar_check: bool,
    /// Whether an introduction chapter was requested.
    pub create_introduction_chapter: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: "Documentation".to_string(),
            project_slug: "documentation".to_string(),
            include_grammar_check: true,
            create_introduction_chapter: true,
        }
    }
}

impl ProjectConfig {
    /// Derive defaults from the project directory name.
    pub fn for_directory(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let name = dir
            .canonicalize()
            .ok()
            .as_deref()
            .and_then(Path::file_name)
            .or_else(|| dir.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty());

        match name {
            Some(name) => Self {
                project_slug: slugify(&name),
                project_name: name,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Overlay the answers that are set, leaving the rest untouched.
    pub fn apply(&mut self, answers: &ProjectAnswers) {
        if let Some(name) = &answers.project_name {
            self.project_name = name.clone();
        }
        if let Some(slug) = &answers.project_slug {
            self.project_slug = slug.clone();
        }
        if let Some(grammar) = answers.include_grammar_check {
            self.include_grammar_check = grammar;
        }
        if let Some(intro) = answers.create_introduction_chapter {
            self.create_introduction_chapter = intro;
        }
    }
}

/// Partial answers, as found in an answers file or on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectAnswers {
    pub project_name: Option<String>,
    pub project_slug: Option<String>,
    pub include_grammar_check: Option<bool>,
    pub create_introduction_chapter: Option<bool>,
}

impl ProjectAnswers {
    /// True when no answer is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Turn a display name into a directory-safe kebab-case slug.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
