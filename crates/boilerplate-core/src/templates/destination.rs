//! Decides whether and how the target directory can receive a new project

use crate::error::{Result, ScaffoldError};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// A directory holding only this entry still counts as empty
pub const VCS_DIR: &str = ".git";

/// What is currently at the target path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    Missing,
    /// Exists with no entries, or only version-control metadata
    Empty,
    NonEmpty { entries: usize },
}

impl DestinationState {
    pub async fn inspect(path: &Path) -> Result<Self> {
        let metadata = match fs::metadata(path).await {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::Missing),
            Err(e) => {
                return Err(ScaffoldError::io(
                    format!("inspecting {}", path.display()),
                    e,
                ))
            }
        };

        if !metadata.is_dir() {
            return Err(ScaffoldError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let mut names = Vec::new();
        let mut entries = fs::read_dir(path)
            .await
            .map_err(|e| ScaffoldError::io(format!("reading {}", path.display()), e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ScaffoldError::io(format!("reading {}", path.display()), e))?
        {
            names.push(entry.file_name());
        }

        Ok(match names.as_slice() {
            [] => Self::Empty,
            [only] if only == VCS_DIR => Self::Empty,
            _ => Self::NonEmpty {
                entries: names.len(),
            },
        })
    }

    /// Only a non-empty directory needs the user to agree to overwrite it
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::NonEmpty { .. })
    }
}

/// Remove every entry inside `dir`, leaving `dir` itself in place
pub async fn empty_dir(dir: &Path) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| ScaffoldError::io(format!("reading {}", dir.display()), e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ScaffoldError::io(format!("reading {}", dir.display()), e))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| ScaffoldError::io(format!("inspecting {}", path.display()), e))?;

        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&path).await
        } else {
            fs::remove_file(&path).await
        };
        removed.map_err(|e| ScaffoldError::io(format!("removing {}", path.display()), e))?;
    }

    Ok(())
}

/// Prepare `dir` for materialization.
///
/// A missing directory is created, an empty one is used as-is, and a
/// non-empty one is emptied only when `overwrite` is true. Without it the
/// call fails with [`ScaffoldError::Cancelled`] and nothing is touched.
pub async fn reconcile(dir: &Path, overwrite: bool) -> Result<DestinationState> {
    let state = DestinationState::inspect(dir).await?;

    match state {
        DestinationState::Missing => {
            fs::create_dir_all(dir).await.map_err(|e| {
                ScaffoldError::io(format!("creating directory {}", dir.display()), e)
            })?;
        }
        DestinationState::Empty => {}
        DestinationState::NonEmpty { .. } if overwrite => empty_dir(dir).await?,
        DestinationState::NonEmpty { .. } => return Err(ScaffoldError::Cancelled),
    }

    Ok(state)
}
