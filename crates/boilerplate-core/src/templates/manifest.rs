//! Package manifest (`package.json`) loading and merging

use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Manifest file name inside a template tree and the generated project
pub const MANIFEST_FILE: &str = "package.json";

/// Written as the author when none was given
pub const AUTHOR_PLACEHOLDER: &str = "-";

/// A parsed manifest; only `name` and `author` are ever changed
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ScaffoldError::ManifestParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ScaffoldError::ManifestShape {
                path: path.to_path_buf(),
            }),
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ScaffoldError::io(format!("reading {}", path.display()), e))?;
        Self::parse(path, &content)
    }

    /// Overwrite `name` and `author`, keeping every other field and the key order
    pub fn set_identity(&mut self, name: &str, author: &str) {
        let author = if author.is_empty() {
            AUTHOR_PLACEHOLDER
        } else {
            author
        };
        self.fields
            .insert("name".to_string(), Value::String(name.to_string()));
        self.fields
            .insert("author".to_string(), Value::String(author.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.fields)
            .map_err(|e| ScaffoldError::io("serializing manifest", e.into()))?;
        out.push('\n');
        Ok(out)
    }

    /// Write the manifest into `dir`, returning the written path
    pub async fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        fs::write(&path, self.to_pretty_string()?)
            .await
            .map_err(|e| ScaffoldError::io(format!("writing {}", path.display()), e))?;
        Ok(path)
    }
}

/// Load the manifest at `path` and apply the project's name and author
pub async fn merge_manifest(path: &Path, name: &str, author: &str) -> Result<PackageManifest> {
    let mut manifest = PackageManifest::load(path).await?;
    manifest.set_identity(name, author);
    Ok(manifest)
}
