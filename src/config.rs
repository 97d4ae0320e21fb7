//! Project configuration handed to the generator.
//! A `ProjectConfig` is validated once when built and is read-only afterwards.

use crate::error::{Error, Result};
use crate::template::TemplateKind;
use clap::ValueEnum;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static PROJECT_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());
static ORGANIZATION_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+$").unwrap());

/// Package manager used to install dependencies of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Executable name of the package manager.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}

/// Checks a project name: lowercase letters, digits, hyphens and underscores.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("Project name is required".to_string()));
    }
    if !PROJECT_NAME_PATTERN.is_match(name) {
        return Err(Error::ValidationError(format!(
            "Invalid project name '{name}' (can only contain lowercase letters, numbers, hyphens, and underscores)"
        )));
    }
    Ok(())
}

/// Checks an organization name: lowercase letters only.
pub fn validate_organization_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("Organization name is required".to_string()));
    }
    if !ORGANIZATION_NAME_PATTERN.is_match(name) {
        return Err(Error::ValidationError(format!(
            "Invalid organization name '{name}' (can only contain lowercase letters)"
        )));
    }
    Ok(())
}

/// Everything the generator needs to materialize one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: String,
    organization_name: Option<String>,
    template: TemplateKind,
    package_manager: PackageManager,
    init_git: bool,
    install_dependencies: bool,
    license: Option<String>,
}

impl ProjectConfig {
    /// Starts a builder for a project called `project_name`.
    pub fn builder<S: Into<String>>(project_name: S) -> ProjectConfigBuilder {
        ProjectConfigBuilder {
            project_name: project_name.into(),
            organization_name: None,
            template: TemplateKind::default(),
            package_manager: PackageManager::default(),
            init_git: false,
            install_dependencies: false,
            license: None,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.organization_name.as_deref()
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn init_git(&self) -> bool {
        self.init_git
    }

    pub fn install_dependencies(&self) -> bool {
        self.install_dependencies
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }
}

/// Collects the fields of a [`ProjectConfig`]; `build` validates them.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    project_name: String,
    organization_name: Option<String>,
    template: TemplateKind,
    package_manager: PackageManager,
    init_git: bool,
    install_dependencies: bool,
    license: Option<String>,
}

impl ProjectConfigBuilder {
    pub fn organization_name(mut self, name: Option<String>) -> Self {
        self.organization_name = name;
        self
    }

    pub fn template(mut self, template: TemplateKind) -> Self {
        self.template = template;
        self
    }

    pub fn package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    pub fn init_git(mut self, init_git: bool) -> Self {
        self.init_git = init_git;
        self
    }

    pub fn install_dependencies(mut self, install: bool) -> Self {
        self.install_dependencies = install;
        self
    }

    pub fn license(mut self, license: Option<String>) -> Self {
        self.license = license;
        self
    }

    /// Validates the names and returns the finished configuration.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the project or organization name does not
    ///   match its pattern
    pub fn build(self) -> Result<ProjectConfig> {
        validate_project_name(&self.project_name)?;
        if let Some(organization_name) = &self.organization_name {
            validate_organization_name(organization_name)?;
        }

        Ok(ProjectConfig {
            project_name: self.project_name,
            organization_name: self.organization_name,
            template: self.template,
            package_manager: self.package_manager,
            init_git: self.init_git,
            install_dependencies: self.install_dependencies,
            license: self.license,
        })
    }
}
