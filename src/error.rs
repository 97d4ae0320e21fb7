//! Error handling for create-stencil-components.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors that can occur while collecting options or generating a project.
///
/// Decode failures on individual files and failures of the post-generation
/// steps are recovered where they happen and logged instead; everything that
/// reaches the CLI as an `Error` aborts the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project directory is already present before generation starts.
    #[error("Project directory '{target_dir}' already exists.")]
    DestinationExistsError { target_dir: String },

    /// No `variants/<template>` directory exists under the templates root.
    #[error("Template '{template}' not found in '{templates_dir}'.")]
    TemplateNotFoundError { template: String, templates_dir: String },

    /// Substituting tokens in an entry name produced the name of an existing sibling.
    #[error("Cannot rename '{from}' to '{to}': target already exists.")]
    RenameCollisionError { from: String, to: String },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Interactive prompt failure (terminal closed, not a tty, ...)
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Preloaded answers could not be parsed.
    #[error("Failed to parse answers: {0}.")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// The package manager could not be started or exited unsuccessfully.
    #[error("Dependency installation failed: {0}.")]
    InstallError(String),
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to report
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
