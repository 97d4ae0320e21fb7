//! Partially filled project options, from the command line or preloaded JSON.
//!
//! Preloaded answers let scripts drive the generator without a terminal:
//!
//! ```text
//! echo '{"project_name": "ui-kit", "organization_name": "acme"}' \
//!     | create-stencil-components --stdin --yes
//! ```

use crate::config::PackageManager;
use crate::error::Result;
use crate::template::TemplateKind;
use serde::Deserialize;
use std::io::Read;

/// Every project option, each one possibly missing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Answers {
    pub project_name: Option<String>,
    pub organization_name: Option<String>,
    pub template: Option<TemplateKind>,
    pub package_manager: Option<PackageManager>,
    pub git: Option<bool>,
    pub install: Option<bool>,
    pub license: Option<String>,
}

impl Answers {
    /// Fills the fields missing from `self` with those of `fallback`.
    pub fn or(self, fallback: Answers) -> Answers {
        Answers {
            project_name: self.project_name.or(fallback.project_name),
            organization_name: self.organization_name.or(fallback.organization_name),
            template: self.template.or(fallback.template),
            package_manager: self.package_manager.or(fallback.package_manager),
            git: self.git.or(fallback.git),
            install: self.install.or(fallback.install),
            license: self.license.or(fallback.license),
        }
    }
}

/// Reads answers as a JSON object from `reader`. Blank input yields no answers.
///
/// # Errors
/// * `Error::JSONParseError` if the input is not a valid answers object
pub fn load_answers<R: Read>(mut reader: R) -> Result<Answers> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    let input = buffer.trim();
    if input.is_empty() {
        return Ok(Answers::default());
    }
    Ok(serde_json::from_str(input)?)
}

/// Reads answers from the process's stdin.
pub fn load_answers_from_stdin() -> Result<Answers> {
    load_answers(std::io::stdin().lock())
}
