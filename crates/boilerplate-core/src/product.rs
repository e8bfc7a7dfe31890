//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to configure the scaffolding behavior:
//! product identity, where template trees live, and what to print once the
//! project exists.

use crate::runtime::PackageManager;
use crate::templates::Catalog;
use std::path::{Path, PathBuf};

/// Directory name searched for template trees when nothing else is configured
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Configuration trait for scaffolding CLIs
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable name for overriding the templates root
    fn templates_dir_env(&self) -> &'static str;

    /// Templates root used when neither the flag nor the environment variable is set
    fn default_templates_dir(&self) -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_TEMPLATES_DIR)))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR))
    }

    /// Templates offered to the user
    fn catalog(&self) -> Catalog {
        Catalog::builtin()
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, package_manager: PackageManager) -> Vec<String>;
}

/// Pick the templates root: explicit flag, then environment, then the product default
pub fn resolve_templates_dir<C: ProductConfig>(config: &C, flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| {
        std::env::var_os(config.templates_dir_env())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| config.default_templates_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "test"
        }

        fn display_name(&self) -> &'static str {
            "Test"
        }

        fn cli_description(&self) -> &'static str {
            "test product"
        }

        fn templates_dir_env(&self) -> &'static str {
            "BOILERPLATE_CORE_TEST_TEMPLATES_UNSET"
        }

        fn default_templates_dir(&self) -> PathBuf {
            PathBuf::from("/default/templates")
        }

        fn next_steps(&self, _dir: &Path, _pm: PackageManager) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_flag_wins() {
        let dir = resolve_templates_dir(&TestProduct, Some(PathBuf::from("/flag")));
        assert_eq!(dir, PathBuf::from("/flag"));
    }

    #[test]
    fn test_falls_back_to_default() {
        let dir = resolve_templates_dir(&TestProduct, None);
        assert_eq!(dir, PathBuf::from("/default/templates"));
    }
}
