//! Token substitution for file names, directory names and file contents.
//!
//! Tokens look like `{{PROJECT_NAME}}` and may carry whitespace inside the
//! braces (`{{ PROJECT_NAME }}`). Matching is case-sensitive; any double-brace
//! text that does not name a known variable is left as it is.
use crate::error::{Error, Result};
use crate::variables::TemplateVariables;
use regex::{NoExpand, Regex};

/// Trait for rendering template text against a fixed variable set.
pub trait TemplateRenderer {
    /// Returns `template` with every known token replaced.
    fn render(&self, template: &str) -> String;
}

/// Flat `{{TOKEN}}` substitution, compiled once per run.
#[derive(Debug)]
pub struct TokenRenderer {
    /// One pattern per variable, in the variable set's order
    patterns: Vec<(Regex, String)>,
}

impl TokenRenderer {
    /// Compiles one token pattern per variable.
    ///
    /// # Errors
    /// * `Error::ValidationError` if a variable name cannot be turned into a
    ///   pattern (only possible for pathological, very large names)
    pub fn new(vars: &TemplateVariables) -> Result<Self> {
        let patterns = vars
            .iter()
            .map(|(key, value)| {
                let pattern = format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(key));
                Regex::new(&pattern)
                    .map(|re| (re, value.to_string()))
                    .map_err(|e| Error::ValidationError(format!("invalid token '{key}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }
}

impl TemplateRenderer for TokenRenderer {
    fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (pattern, value) in &self.patterns {
            if pattern.is_match(&result) {
                result = pattern.replace_all(&result, NoExpand(value)).into_owned();
            }
        }
        result
    }
}

/// Substitutes every token of `vars` found in `text`.
///
/// Builds a throwaway [`TokenRenderer`]; walks over many entries should build
/// one renderer and reuse it.
pub fn substitute(text: &str, vars: &TemplateVariables) -> Result<String> {
    Ok(TokenRenderer::new(vars)?.render(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVariables {
        [
            ("PROJECT_NAME", "my-lib"),
            ("PROJECT_NAME_PASCAL", "MyLib"),
            ("LICENSE", ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_replaces_all_occurrences() {
        let result = substitute("{{PROJECT_NAME}} and {{PROJECT_NAME}}", &vars()).unwrap();
        assert_eq!(result, "my-lib and my-lib");
    }

    #[test]
    fn test_interior_whitespace() {
        let result = substitute("{{ PROJECT_NAME }}|{{PROJECT_NAME_PASCAL  }}", &vars()).unwrap();
        assert_eq!(result, "my-lib|MyLib");
    }

    #[test]
    fn test_prefix_keys_do_not_clash() {
        let result = substitute("{{PROJECT_NAME_PASCAL}}/{{PROJECT_NAME}}", &vars()).unwrap();
        assert_eq!(result, "MyLib/my-lib");
    }

    #[test]
    fn test_unknown_and_miscased_tokens_are_kept() {
        let text = "{{ UNKNOWN }} {{project_name}} {PROJECT_NAME}";
        assert_eq!(substitute(text, &vars()).unwrap(), text);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(substitute("License: {{LICENSE}}.", &vars()).unwrap(), "License: .");
    }

    #[test]
    fn test_values_are_inserted_literally() {
        let vars: TemplateVariables = [("PRICE", "$1 ${name}")].into_iter().collect();
        assert_eq!(substitute("{{PRICE}}", &vars).unwrap(), "$1 ${name}");
    }

    #[test]
    fn test_token_free_text_is_unchanged() {
        let text = "export const tag = 'x-button';\n{ \"a\": { \"b\": 1 } }\n";
        let once = substitute(text, &vars()).unwrap();
        assert_eq!(once, text);
        assert_eq!(substitute(&once, &vars()).unwrap(), text);
    }

    #[test]
    fn test_renderer_is_reusable() {
        let renderer = TokenRenderer::new(&vars()).unwrap();
        assert_eq!(renderer.render("{{PROJECT_NAME}}.ts"), "my-lib.ts");
        assert_eq!(renderer.render("x-{{PROJECT_NAME_PASCAL}}"), "x-MyLib");
    }
}
