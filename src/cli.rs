//! Command-line interface implementation for create-stencil-components.
//! Provides argument parsing using clap.

use crate::answers::Answers;
use crate::config::PackageManager;
use crate::template::TemplateKind;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Create a stencil component library project using Nx, TypeScript, and SASS.",
    long_about = None
)]
pub struct Args {
    /// Name of the project
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Name of the organization (used in the name field of the package.json)
    #[arg(short, long, value_name = "NAME")]
    pub organization_name: Option<String>,

    /// Template type
    #[arg(short, long, value_enum)]
    pub template: Option<TemplateKind>,

    /// Package manager used to install dependencies
    #[arg(short, long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Initialize a git repository in the new project
    #[arg(long)]
    pub git: bool,

    /// Install dependencies after generating the project
    #[arg(long)]
    pub install: bool,

    /// License identifier substituted for {{LICENSE}}
    #[arg(long)]
    pub license: Option<String>,

    /// Directory containing the `base` and `variants` templates
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Directory in which the project directory is created
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Read answers as a JSON object from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Never prompt; fail if a required value is missing
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Options given on the command line. Flags that were not passed are
    /// left unset so preloaded answers can still provide them.
    pub fn answers(&self) -> Answers {
        Answers {
            project_name: self.project_name.clone(),
            organization_name: self.organization_name.clone(),
            template: self.template,
            package_manager: self.package_manager,
            git: self.git.then_some(true),
            install: self.install.then_some(true),
            license: self.license.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
