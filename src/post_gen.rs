//! Optional steps run once the project tree has been generated:
//! initializing a git repository and installing dependencies.
//!
//! Both return errors to the caller, which reports them as warnings; a
//! failure here never rolls back the generated project.

use crate::config::PackageManager;
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Initializes an empty git repository in `project_dir`.
pub fn init_git(project_dir: &Path) -> Result<()> {
    debug!("Initializing git repository in '{}'", project_dir.display());
    git2::Repository::init(project_dir)?;
    Ok(())
}

/// Runs `<package manager> install` in `project_dir`, streaming its output.
///
/// # Errors
/// * `Error::InstallError` if the package manager cannot be started or exits
///   with a non-zero status
pub fn install_dependencies(project_dir: &Path, package_manager: PackageManager) -> Result<()> {
    let program = package_manager.command();
    debug!("Running '{program} install' in '{}'", project_dir.display());

    let status = Command::new(program)
        .arg("install")
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::InstallError(format!("failed to run '{program}': {e}")))?;

    if !status.success() {
        return Err(Error::InstallError(format!(
            "'{program} install' failed with status: {status}"
        )));
    }

    Ok(())
}
