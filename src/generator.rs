//! Project generation orchestration.
//! Sequences the merge, rename and content passes over a fresh destination,
//! then runs the optional post-generation steps.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::merger::{merge, template_not_found};
use crate::post_gen::{init_git, install_dependencies};
use crate::processor::process_tree;
use crate::renamer::rename_tree;
use crate::renderer::TokenRenderer;
use crate::template::TemplateLayout;
use crate::variables::TemplateVariables;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Ensures the project directory does not exist yet.
///
/// # Errors
/// * `Error::DestinationExistsError` if anything is already at `target_dir`
pub fn ensure_target_dir<P: AsRef<Path>>(target_dir: P) -> Result<PathBuf> {
    let target_dir = target_dir.as_ref();
    if fs::symlink_metadata(target_dir).is_ok() {
        return Err(Error::DestinationExistsError {
            target_dir: target_dir.display().to_string(),
        });
    }
    Ok(target_dir.to_path_buf())
}

/// Generates a project below `output_root` from the templates in `layout`.
///
/// The project is created at `output_root/<project name>`; its path is
/// returned on success.
///
/// # Flow
/// 1. Refuses an existing project directory
/// 2. Derives the template variables
/// 3. Refuses a missing variant template
/// 4. Creates the project directory and merges base + variant into it
/// 5. Renames tokenized directories, then tokenized files
/// 6. Substitutes tokens in text file contents
/// 7. Optionally initializes git and installs dependencies (best effort)
///
/// # Errors
/// * `Error::DestinationExistsError` and `Error::TemplateNotFoundError` are
///   raised before the filesystem is touched
/// * Any other error aborts the run and may leave a partial project behind
pub fn generate_project(
    config: &ProjectConfig,
    layout: &TemplateLayout,
    output_root: &Path,
) -> Result<PathBuf> {
    let target_dir = ensure_target_dir(output_root.join(config.project_name()))?;

    let vars = TemplateVariables::from_config(config);
    let renderer = TokenRenderer::new(&vars)?;

    let variant_dir = layout.variant_dir(config.template());
    if !variant_dir.is_dir() {
        return Err(template_not_found(&variant_dir));
    }

    info!("Creating project in {}", target_dir.display());
    fs::create_dir_all(&target_dir)?;

    merge(&layout.base_dir(), &variant_dir, &target_dir)?;
    let renamed = rename_tree(&target_dir, &renderer)?;
    let summary = process_tree(&target_dir, &renderer)?;
    debug!(
        "Generated '{}': {} entries renamed, {} files processed",
        config.project_name(),
        renamed,
        summary.processed
    );

    if config.init_git() {
        match init_git(&target_dir) {
            Ok(()) => info!("Initialized git repository"),
            Err(e) => warn!("Failed to initialize git repository: {e}"),
        }
    }

    if config.install_dependencies() {
        let package_manager = config.package_manager();
        match install_dependencies(&target_dir, package_manager) {
            Ok(()) => info!("Installed dependencies"),
            Err(e) => {
                warn!("Failed to install dependencies: {e}");
                warn!("Run \"{package_manager} install\" manually");
            }
        }
    }

    Ok(target_dir)
}
