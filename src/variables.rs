//! The token table substituted into names and contents of a generated project.

use crate::case::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
use crate::config::ProjectConfig;
use indexmap::IndexMap;

pub const PROJECT_NAME: &str = "PROJECT_NAME";
pub const PROJECT_NAME_CAMEL: &str = "PROJECT_NAME_CAMEL";
pub const PROJECT_NAME_KEBAB: &str = "PROJECT_NAME_KEBAB";
pub const PROJECT_NAME_PASCAL: &str = "PROJECT_NAME_PASCAL";
pub const PROJECT_NAME_SNAKE: &str = "PROJECT_NAME_SNAKE";
pub const ORGANIZATION_NAME: &str = "ORGANIZATION_NAME";
pub const LICENSE: &str = "LICENSE";

/// Ordered mapping from token name to its resolved value.
///
/// Built once per run and only read afterwards. Optional config fields that
/// are not set resolve to an empty string, so no recognized token survives
/// in the generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariables {
    values: IndexMap<String, String>,
}

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the standard token table from a project configuration.
    pub fn from_config(config: &ProjectConfig) -> Self {
        let name = config.project_name();
        let mut vars = Self::new();
        vars.insert(PROJECT_NAME, name);
        vars.insert(PROJECT_NAME_CAMEL, to_camel_case(name));
        vars.insert(PROJECT_NAME_KEBAB, to_kebab_case(name));
        vars.insert(PROJECT_NAME_PASCAL, to_pascal_case(name));
        vars.insert(PROJECT_NAME_SNAKE, to_snake_case(name));
        vars.insert(ORGANIZATION_NAME, config.organization_name().unwrap_or_default());
        vars.insert(LICENSE, config.license().unwrap_or_default());
        vars
    }

    /// Adds or replaces a token. Intended for building the table, not for
    /// changing it once a walk has started.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (key, value) in iter {
            vars.insert(key, value);
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = ProjectConfig::builder("my-awesome-project")
            .organization_name(Some("acme".to_string()))
            .license(Some("MIT".to_string()))
            .build()
            .unwrap();
        let vars = TemplateVariables::from_config(&config);

        assert_eq!(vars.get(PROJECT_NAME), Some("my-awesome-project"));
        assert_eq!(vars.get(PROJECT_NAME_CAMEL), Some("myAwesomeProject"));
        assert_eq!(vars.get(PROJECT_NAME_KEBAB), Some("my-awesome-project"));
        assert_eq!(vars.get(PROJECT_NAME_PASCAL), Some("MyAwesomeProject"));
        assert_eq!(vars.get(PROJECT_NAME_SNAKE), Some("my_awesome_project"));
        assert_eq!(vars.get(ORGANIZATION_NAME), Some("acme"));
        assert_eq!(vars.get(LICENSE), Some("MIT"));
        assert_eq!(vars.len(), 7);
    }

    #[test]
    fn test_undefined_optionals_resolve_to_empty() {
        let config = ProjectConfig::builder("lib").build().unwrap();
        let vars = TemplateVariables::from_config(&config);

        assert_eq!(vars.get(ORGANIZATION_NAME), Some(""));
        assert_eq!(vars.get(LICENSE), Some(""));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let vars: TemplateVariables = [("B", "2"), ("A", "1")].into_iter().collect();
        let keys: Vec<&str> = vars.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["B", "A"]);
    }
}
