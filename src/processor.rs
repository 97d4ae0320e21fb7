//! Rewrites the content of text files in the generated tree.
//!
//! Only files with an allow-listed extension, or no extension at all, are
//! opened. Anything else (images, fonts, archives) is never read, and a text
//! file that turns out not to be valid UTF-8 is left untouched.

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Extensions (without the dot) of files whose content is processed.
pub const TEXT_EXTENSIONS: [&str; 16] = [
    "js",
    "ts",
    "jsx",
    "tsx",
    "json",
    "md",
    "html",
    "css",
    "scss",
    "yaml",
    "yml",
    "txt",
    "env",
    "gitignore",
    "npmrc",
    "editorconfig",
];

/// Outcome counts of a content pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Text files read and written back
    pub processed: usize,
    /// Allow-listed files left as-is because they could not be read as text
    pub skipped: usize,
}

/// Returns whether `path` is treated as a text file.
///
/// Dotfiles such as `.gitignore` or `.npmrc` have no extension and qualify.
pub fn is_text_file(path: &Path) -> bool {
    match path.extension() {
        None => true,
        Some(ext) => ext.to_str().is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext)),
    }
}

/// Substitutes tokens in one file, in place.
///
/// Returns `Ok(false)` when the file could not be read or decoded; that case
/// is logged and the file is not modified. Write failures are errors.
pub fn process_file(path: &Path, renderer: &dyn TemplateRenderer) -> Result<bool> {
    let content = match fs::read(path).map(String::from_utf8) {
        Ok(Ok(content)) => content,
        Ok(Err(e)) => {
            warn!("Skipping binary file '{}': {}", path.display(), e);
            return Ok(false);
        }
        Err(e) => {
            warn!("Skipping unreadable file '{}': {}", path.display(), e);
            return Ok(false);
        }
    };

    let rendered = renderer.render(&content);
    if rendered != content {
        fs::write(path, rendered)?;
        debug!("Processed file: {}", path.display());
    }
    Ok(true)
}

/// Visits every regular file below `root` and processes the text ones.
pub fn process_tree(root: &Path, renderer: &dyn TemplateRenderer) -> Result<ProcessSummary> {
    let mut summary = ProcessSummary::default();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_text_file(path) {
            debug!("Skipping non-text file: {}", path.display());
            continue;
        }

        if process_file(path, renderer)? {
            summary.processed += 1;
        } else {
            summary.skipped += 1;
        }
    }

    debug!(
        "Content pass complete: {} processed, {} skipped",
        summary.processed, summary.skipped
    );
    Ok(summary)
}
