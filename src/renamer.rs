//! Renames directories and files whose names contain tokens.
//!
//! Directories are renamed first, children before parents, so moving a parent
//! never invalidates a path that is still waiting to be visited. Files are
//! renamed afterwards against the final directory paths.

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects entries below `root` (children before their parent) that satisfy
/// `keep`. The whole list is read before anything is moved.
fn collect_entries<F>(root: &Path, keep: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&walkdir::DirEntry) -> bool,
{
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).contents_first(true).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if keep(&entry) {
            entries.push(entry.into_path());
        }
    }
    Ok(entries)
}

/// Moves `path` to its rendered name within the same parent, if the name changes.
///
/// Returns the new path when a rename happened.
///
/// # Errors
/// * `Error::RenameCollisionError` if an entry with the new name already exists
fn rename_entry(path: &Path, renderer: &dyn TemplateRenderer) -> Result<Option<PathBuf>> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        debug!("Skipping non UTF-8 name: {}", path.display());
        return Ok(None);
    };

    let new_name = renderer.render(name);
    if new_name == name {
        return Ok(None);
    }

    let new_path = path.with_file_name(&new_name);
    if fs::symlink_metadata(&new_path).is_ok() {
        return Err(Error::RenameCollisionError {
            from: path.display().to_string(),
            to: new_path.display().to_string(),
        });
    }

    fs::rename(path, &new_path)?;
    debug!("Renamed '{}' to '{}'", path.display(), new_path.display());
    Ok(Some(new_path))
}

/// Renames every directory below `root`, deepest first. `root` itself is kept.
pub fn rename_directories(root: &Path, renderer: &dyn TemplateRenderer) -> Result<usize> {
    let mut renamed = 0;
    for dir in collect_entries(root, |entry| entry.file_type().is_dir())? {
        if rename_entry(&dir, renderer)?.is_some() {
            renamed += 1;
        }
    }
    Ok(renamed)
}

/// Renames every non-directory entry below `root`.
pub fn rename_files(root: &Path, renderer: &dyn TemplateRenderer) -> Result<usize> {
    let mut renamed = 0;
    for file in collect_entries(root, |entry| !entry.file_type().is_dir())? {
        if rename_entry(&file, renderer)?.is_some() {
            renamed += 1;
        }
    }
    Ok(renamed)
}

/// Runs the directory pass to completion, then the file pass.
///
/// Returns the total number of renamed entries.
pub fn rename_tree(root: &Path, renderer: &dyn TemplateRenderer) -> Result<usize> {
    let dirs = rename_directories(root, renderer)?;
    let files = rename_files(root, renderer)?;
    debug!("Renamed {dirs} directories and {files} files");
    Ok(dirs + files)
}
