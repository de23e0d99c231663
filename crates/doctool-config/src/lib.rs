//! Configuration types for doctool.
//!
//! This crate resolves the template answers of a freshly generated
//! documentation project into a typed [`ProjectConfig`]. Values come from
//! directory-derived defaults, an optional `.doctool.yaml` answers file, and
//! command-line overrides, in that order.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_optional_features() {
        let config = ProjectConfig::default();

        assert_eq!(config.project_name, "Documentation");
        assert_eq!(config.project_slug, "documentation");
        assert!(config.include_grammar_check);
        assert!(config.create_introduction_chapter);
    }

    #[test]
    fn test_config_serializes_to_yaml() {
        let config = ProjectConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        assert!(yaml.contains("project_name:"));
        assert!(yaml.contains("project_slug:"));
        assert!(yaml.contains("include_grammar_check: true"));
        assert!(yaml.contains("create_introduction_chapter: true"));
    }
}
