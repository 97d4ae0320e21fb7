//! Copies the base template and one variant template into the destination.
//!
//! The base tree is copied first and the variant tree second, so a file that
//! exists in both ends up with the variant's content.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Name under which the base template ships its ignore file. A literal
/// `.gitignore` would be dropped by most packaging tools.
pub const GITIGNORE_TEMPLATE: &str = "gitignore";

/// Copies every entry below `source` into `dest`, preserving relative
/// structure. Existing files in `dest` are overwritten.
///
/// Symlinks are followed and copied by content.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    debug!("Copying '{}' into '{}'", source.display(), dest.display());

    for entry in WalkDir::new(source).min_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let relative_path = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::IoError(std::io::Error::other(e)))?;
        let target = dest.join(relative_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            debug!("Copied file: {}", relative_path.display());
        }
    }
    Ok(())
}

/// Merges `base_dir` and `variant_dir` into `dest_dir`.
///
/// # Arguments
/// * `base_dir` - Files common to every variant; skipped if missing
/// * `variant_dir` - Framework specific files, copied last
/// * `dest_dir` - Destination root, created if needed
///
/// # Errors
/// * `Error::TemplateNotFoundError` if `variant_dir` does not exist; nothing
///   is copied in that case
/// * `Error::RenameCollisionError` if the base ships both `gitignore` and
///   `.gitignore`
/// * `Error::IoError` on any copy failure
pub fn merge(base_dir: &Path, variant_dir: &Path, dest_dir: &Path) -> Result<()> {
    if !variant_dir.is_dir() {
        return Err(template_not_found(variant_dir));
    }

    fs::create_dir_all(dest_dir)?;

    if base_dir.is_dir() {
        copy_tree(base_dir, dest_dir)?;

        // Only the root-level file is renamed.
        let gitignore = dest_dir.join(GITIGNORE_TEMPLATE);
        if gitignore.is_file() {
            let dotfile = dest_dir.join(".gitignore");
            if fs::symlink_metadata(&dotfile).is_ok() {
                return Err(Error::RenameCollisionError {
                    from: gitignore.display().to_string(),
                    to: dotfile.display().to_string(),
                });
            }
            fs::rename(&gitignore, &dotfile)?;
            debug!("Renamed '{GITIGNORE_TEMPLATE}' to '.gitignore'");
        }
    } else {
        debug!("No base template at '{}'", base_dir.display());
    }

    copy_tree(variant_dir, dest_dir)
}

/// Builds the not-found error for a `<root>/variants/<name>` path.
pub(crate) fn template_not_found(variant_dir: &Path) -> Error {
    let template = variant_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let templates_dir = variant_dir
        .parent()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();
    Error::TemplateNotFoundError { template, templates_dir }
}
