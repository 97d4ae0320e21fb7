//! Interactive collection of project options.
//! Values already known from the command line or preloaded answers are never
//! asked for again.

use crate::answers::Answers;
use crate::config::{validate_organization_name, validate_project_name, ProjectConfig};
use crate::error::{Error, Result};
use crate::template::TemplateKind;
use dialoguer::{Input, Select};

/// Validation hook applied to text answers before they are accepted.
pub type Validator = fn(&str) -> Result<()>;

/// Trait for asking the user questions.
pub trait Prompter {
    /// Asks for free text, re-asking until `validate` accepts the answer.
    /// `default` is offered as the answer when the user just presses enter.
    fn text(&self, message: &str, default: Option<String>, validate: Validator) -> Result<String>;

    /// Asks to pick one of `items`; returns the chosen index.
    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, message: &str, default: Option<String>, validate: Validator) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(message);
        if let Some(default) = default {
            input = input.default(default);
        }
        let value = input
            .validate_with(move |value: &String| -> std::result::Result<(), String> {
                match validate(value) {
                    Ok(()) => Ok(()),
                    Err(Error::ValidationError(msg)) => Err(msg),
                    Err(e) => Err(e.to_string()),
                }
            })
            .interact_text()?;
        Ok(value)
    }

    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(Select::new().with_prompt(message).items(items).default(default).interact()?)
    }
}

/// Random two-word project name such as `brave-otter`, offered as the
/// prompt's default. `None` if the generated name would not validate.
pub fn suggest_project_name() -> Option<String> {
    petname::petname(2, "-").filter(|name| validate_project_name(name).is_ok())
}

/// Random single lowercase word offered as the organization default.
pub fn suggest_organization_name() -> Option<String> {
    petname::petname(1, "").filter(|name| validate_organization_name(name).is_ok())
}

fn prompt_template(prompt: &dyn Prompter) -> Result<TemplateKind> {
    let items: Vec<String> = TemplateKind::ALL_KINDS
        .iter()
        .map(|kind| format!("{kind} ({})", kind.hint()))
        .collect();
    let default = TemplateKind::ALL_KINDS
        .iter()
        .position(|kind| *kind == TemplateKind::default())
        .unwrap_or(0);

    let index = prompt.select("Select a framework", &items, default)?;
    TemplateKind::ALL_KINDS
        .get(index)
        .copied()
        .ok_or_else(|| Error::ValidationError(format!("invalid framework selection {index}")))
}

/// Turns answers into a validated configuration, asking for what is missing.
///
/// Prompted names come prefilled with a random suggestion.
/// With `prompt` set to `None` nothing is asked: a missing project name is an
/// error, a missing organization name stays unset and the template defaults
/// to `all`. Package manager, git and install are never asked for.
///
/// # Errors
/// * `Error::ValidationError` for invalid or missing required values
/// * `Error::PromptError` if the terminal interaction fails
pub fn collect_config(prompt: Option<&dyn Prompter>, answers: Answers) -> Result<ProjectConfig> {
    let project_name = match (answers.project_name, prompt) {
        (Some(name), _) => name,
        (None, Some(prompt)) => {
            prompt.text("Project name", suggest_project_name(), validate_project_name)?
        }
        (None, None) => {
            return Err(Error::ValidationError("Project name is required".to_string()))
        }
    };

    let organization_name = match (answers.organization_name, prompt) {
        (Some(name), _) => Some(name),
        (None, Some(prompt)) => Some(prompt.text(
            "Organization name (used in the scope name field of the package.json)",
            suggest_organization_name(),
            validate_organization_name,
        )?),
        (None, None) => None,
    };

    let template = match (answers.template, prompt) {
        (Some(template), _) => template,
        (None, Some(prompt)) => prompt_template(prompt)?,
        (None, None) => TemplateKind::default(),
    };

    ProjectConfig::builder(project_name)
        .organization_name(organization_name)
        .template(template)
        .package_manager(answers.package_manager.unwrap_or_default())
        .init_git(answers.git.unwrap_or(false))
        .install_dependencies(answers.install.unwrap_or(false))
        .license(answers.license)
        .build()
}
