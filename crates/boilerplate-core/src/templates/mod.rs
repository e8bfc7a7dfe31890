//! Template catalog, rendering, copying and project scaffolding
//!
//! This module provides:
//! - The static template catalog (frameworks and their language variants)
//! - Per-file rendering of `*.mustache` files and verbatim copying of the rest
//! - Recursive tree copying with the rename table
//! - Destination directory reconciliation
//! - `package.json` merging
//! - The `scaffold` orchestrator tying it all together

pub mod catalog;
pub mod copier;
pub mod destination;
pub mod manifest;
pub mod render;
pub mod scaffold;

use std::path::{Path, PathBuf};

pub use catalog::{Catalog, Framework, TemplateDescriptor, Variant};
pub use copier::{copy_template, ScaffoldReport, TreeCopier};
pub use destination::{reconcile, DestinationState};
pub use manifest::{merge_manifest, PackageManifest};
pub use render::Renderer;
pub use scaffold::scaffold;

/// Directory holding files shared by every template
pub const VARIABLE_DIR: &str = "variable";

/// Where template trees live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    root: PathBuf,
}

impl TemplateLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/template-<id>`
    pub fn template_dir(&self, id: &str) -> PathBuf {
        self.root.join(format!("template-{}", id))
    }

    /// `<root>/variable`
    pub fn variable_dir(&self) -> PathBuf {
        self.root.join(VARIABLE_DIR)
    }

    pub fn has_template(&self, id: &str) -> bool {
        self.template_dir(id).is_dir()
    }

    /// Catalog entries whose template tree exists under this root, in catalog order
    pub fn available(&self, catalog: &Catalog) -> Vec<TemplateDescriptor> {
        catalog.leaves().filter(|t| self.has_template(t.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = TemplateLayout::new("/opt/templates");
        assert_eq!(
            layout.template_dir("react-ts"),
            PathBuf::from("/opt/templates/template-react-ts")
        );
        assert_eq!(layout.variable_dir(), PathBuf::from("/opt/templates/variable"));
    }

    #[test]
    fn test_available_only_lists_present_trees() {
        let root = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("template-react")).unwrap();
        std::fs::create_dir_all(root.path().join("template-vanilla-ts")).unwrap();
        std::fs::write(root.path().join("template-vue-ts"), "not a tree").unwrap();
        std::fs::create_dir_all(root.path().join("variable")).unwrap();

        let layout = TemplateLayout::new(root.path());
        let ids: Vec<_> = layout
            .available(&Catalog::builtin())
            .into_iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(ids, vec!["vanilla-ts", "react"]);
        assert!(!layout.has_template("vue-ts"));
    }

    #[test]
    fn test_available_is_empty_for_missing_root() {
        let layout = TemplateLayout::new("/nonexistent/boilerplate/templates");
        assert!(layout.available(&Catalog::builtin()).is_empty());
    }
}
