//! Template kinds and the on-disk layout of the templates root.
//!
//! A templates root contains a `base/` directory shared by every project and
//! one `variants/<kind>/` directory per supported framework:
//!
//! ```text
//! templates/
//! ├── base/
//! └── variants/
//!     ├── angular/
//!     ├── react/
//!     ├── vue/
//!     ├── web-components/
//!     └── all/
//! ```

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the directory holding files common to every variant.
pub const BASE_DIR: &str = "base";

/// Name of the directory holding one subdirectory per variant.
pub const VARIANTS_DIR: &str = "variants";

/// UI framework flavour of the generated component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Angular,
    React,
    Vue,
    WebComponents,
    /// Includes all frameworks
    #[default]
    All,
}

impl TemplateKind {
    /// Every kind, in the order they are offered to the user.
    pub const ALL_KINDS: [TemplateKind; 5] = [
        TemplateKind::Angular,
        TemplateKind::React,
        TemplateKind::Vue,
        TemplateKind::WebComponents,
        TemplateKind::All,
    ];

    /// Directory name of this kind under `variants/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Angular => "angular",
            TemplateKind::React => "react",
            TemplateKind::Vue => "vue",
            TemplateKind::WebComponents => "web-components",
            TemplateKind::All => "all",
        }
    }

    /// Short description shown next to the kind in the selection prompt.
    pub fn hint(&self) -> &'static str {
        match self {
            TemplateKind::Angular => "Angular framework",
            TemplateKind::React => "React framework",
            TemplateKind::Vue => "Vue framework",
            TemplateKind::WebComponents => "Web components only",
            TemplateKind::All => "Includes all frameworks",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves template directories below a templates root.
#[derive(Debug, Clone)]
pub struct TemplateLayout {
    root: PathBuf,
}

impl TemplateLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_dir(&self) -> PathBuf {
        self.root.join(BASE_DIR)
    }

    pub fn variant_dir(&self, kind: TemplateKind) -> PathBuf {
        self.root.join(VARIANTS_DIR).join(kind.as_str())
    }
}

/// Returns the templates root used when none is given on the command line.
///
/// Prefers a `templates` directory next to the running executable (the
/// layout of a packaged release) and falls back to `./templates`.
pub fn default_templates_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("templates"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = TemplateLayout::new("/opt/templates");
        assert_eq!(layout.base_dir(), PathBuf::from("/opt/templates/base"));
        assert_eq!(
            layout.variant_dir(TemplateKind::WebComponents),
            PathBuf::from("/opt/templates/variants/web-components")
        );
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<&str> = TemplateKind::ALL_KINDS.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["angular", "react", "vue", "web-components", "all"]);
        assert_eq!(TemplateKind::default(), TemplateKind::All);
        assert_eq!(
            TemplateKind::from_str("web-components", false).unwrap(),
            TemplateKind::WebComponents
        );
    }
}
