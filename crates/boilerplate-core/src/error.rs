//! Error types for the scaffolding engine

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid package name: '{name}'")]
    InvalidPackageName { name: String },

    #[error("Template '{id}' not found. Available templates: {}", available.join(", "))]
    UnknownTemplate { id: String, available: Vec<String> },

    #[error("Template directory not found: {}", path.display())]
    TemplateMissing { path: PathBuf },

    #[error("Target exists and is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {} is not a JSON object", path.display())]
    ManifestShape { path: PathBuf },

    #[error("Failed to render template {}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: handlebars::RenderError,
    },
}

impl ScaffoldError {
    /// Wrap an IO error with a description of what was being attempted
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// True when the user declined or aborted, as opposed to a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_lists_available() {
        let err = ScaffoldError::UnknownTemplate {
            id: "foo-bar".to_string(),
            available: vec!["react".to_string(), "react-ts".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Template 'foo-bar' not found. Available templates: react, react-ts"
        );
    }

    #[test]
    fn test_only_cancelled_is_cancelled() {
        assert!(ScaffoldError::Cancelled.is_cancelled());
        let io = ScaffoldError::io(
            "reading x",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(!io.is_cancelled());
    }
}
