//! Recursive template tree copying

use crate::config::TemplateVars;
use crate::error::{Result, ScaffoldError};
use crate::templates::render::{FileAction, Renderer};
use std::ffi::OsStr;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;

/// Source names that cannot ship under their real name inside a template package
pub const RENAMES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Name an entry gets at the destination
pub fn destination_name<'a>(renames: &[(&str, &'a str)], name: &'a OsStr) -> &'a OsStr {
    renames
        .iter()
        .find(|(from, _)| OsStr::new(*from) == name)
        .map_or(name, |(_, to)| OsStr::new(*to))
}

/// Files written during a scaffold, relative to the project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub rendered: Vec<PathBuf>,
    pub copied: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn len(&self) -> usize {
        self.rendered.len() + self.copied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type CopyFuture<'s> = Pin<Box<dyn Future<Output = Result<()>> + Send + 's>>;

/// Copies template trees into one project directory, one entry at a time
pub struct TreeCopier<'a> {
    renderer: Renderer,
    vars: &'a TemplateVars,
    dest_root: PathBuf,
    renames: &'static [(&'static str, &'static str)],
    exclude: Vec<PathBuf>,
    report: ScaffoldReport,
}

impl<'a> TreeCopier<'a> {
    pub fn new(dest_root: impl Into<PathBuf>, vars: &'a TemplateVars) -> Self {
        Self {
            renderer: Renderer::new(),
            vars,
            dest_root: dest_root.into(),
            renames: RENAMES,
            exclude: Vec::new(),
            report: ScaffoldReport::default(),
        }
    }

    /// Skip a source path (file or directory) on every subsequent copy
    pub fn exclude(&mut self, src: impl Into<PathBuf>) -> &mut Self {
        self.exclude.push(src.into());
        self
    }

    /// Copy the contents of `src` into `dest`, creating `dest` as needed
    pub fn copy_tree(&mut self, src: PathBuf, dest: PathBuf) -> CopyFuture<'_> {
        Box::pin(async move {
            fs::create_dir_all(&dest).await.map_err(|e| {
                ScaffoldError::io(format!("creating directory {}", dest.display()), e)
            })?;

            let mut entries = fs::read_dir(&src)
                .await
                .map_err(|e| ScaffoldError::io(format!("reading {}", src.display()), e))?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| ScaffoldError::io(format!("reading {}", src.display()), e))?
            {
                let src_path = entry.path();
                if self.exclude.contains(&src_path) {
                    continue;
                }

                let file_name = entry.file_name();
                let dest_path = dest.join(destination_name(self.renames, &file_name));

                self.copy_entry(src_path, dest_path).await?;
            }

            Ok(())
        })
    }

    /// Copy a single entry: directories recurse, files go through the renderer
    pub async fn copy_entry(&mut self, src: PathBuf, dest: PathBuf) -> Result<()> {
        let metadata = fs::metadata(&src)
            .await
            .map_err(|e| ScaffoldError::io(format!("reading {}", src.display()), e))?;

        if metadata.is_dir() {
            return self.copy_tree(src, dest).await;
        }

        let (written, action) = self.renderer.render_file(&src, &dest, self.vars).await?;
        let relative = written
            .strip_prefix(&self.dest_root)
            .map_or_else(|_| written.clone(), Path::to_path_buf);
        // A later tree may overwrite an earlier file
        self.report.rendered.retain(|p| *p != relative);
        self.report.copied.retain(|p| *p != relative);
        match action {
            FileAction::Rendered => self.report.rendered.push(relative),
            FileAction::Copied => self.report.copied.push(relative),
        }

        Ok(())
    }

    pub fn finish(self) -> ScaffoldReport {
        self.report
    }
}

/// Copy a whole template tree into `dest`
pub async fn copy_template(src: &Path, dest: &Path, vars: &TemplateVars) -> Result<ScaffoldReport> {
    let mut copier = TreeCopier::new(dest, vars);
    copier.copy_tree(src.to_path_buf(), dest.to_path_buf()).await?;
    Ok(copier.finish())
}
