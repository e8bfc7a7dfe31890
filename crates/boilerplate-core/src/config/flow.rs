//! Question ordering for interactive project setup.
//!
//! Answers accumulate in a [`PartialConfig`]; [`next_step`] looks only at
//! what is already known and names the next question to ask, so later
//! questions can depend on earlier answers without the prompt code
//! branching on its own.

use crate::config::{ResolvedConfig, TemplateVars};
use crate::error::{Result, ScaffoldError};
use crate::name::is_valid_package_name;
use crate::templates::{Catalog, DestinationState, TemplateDescriptor};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Suggested target directory when none was given
pub const DEFAULT_TARGET_DIR: &str = "boilerplate-project";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptStep {
    ProjectName,
    Overwrite,
    PackageName,
    Framework,
    Variant,
    Author,
}

/// Answers gathered so far
#[derive(Debug, Clone, PartialEq)]
pub struct PartialConfig {
    /// Working directory, used to name projects created in `.`
    pub cwd: PathBuf,
    pub target_dir: Option<String>,
    /// What was found at `target_dir` when it was chosen
    pub destination: Option<DestinationState>,
    pub overwrite: Option<bool>,
    pub package_name: Option<String>,
    pub framework: Option<&'static str>,
    pub template: Option<TemplateDescriptor>,
    pub author: Option<String>,
}

impl PartialConfig {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            target_dir: None,
            destination: None,
            overwrite: None,
            package_name: None,
            framework: None,
            template: None,
            author: None,
        }
    }

    /// Package name implied by the target directory's last component
    pub fn default_package_name(&self) -> String {
        let target = self.target_dir.as_deref().unwrap_or(DEFAULT_TARGET_DIR);
        Path::new(target)
            .file_name()
            .or_else(|| self.cwd.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string())
    }

    /// Record a template choice, keeping the framework in sync
    pub fn choose_template(&mut self, template: TemplateDescriptor) {
        self.framework = Some(template.framework);
        self.template = Some(template);
    }

    /// Freeze the answers into a [`ResolvedConfig`]
    pub fn finalize(self, catalog: &Catalog, today: NaiveDate) -> Result<ResolvedConfig> {
        let overwrite = self.overwrite.unwrap_or(false);
        if self.destination.is_some_and(|d| d.needs_confirmation()) && !overwrite {
            return Err(ScaffoldError::Cancelled);
        }

        let template = self.template.ok_or_else(|| ScaffoldError::UnknownTemplate {
            id: self.framework.unwrap_or_default().to_string(),
            available: catalog.leaf_ids().iter().map(|s| s.to_string()).collect(),
        })?;

        let package_name = match &self.package_name {
            Some(name) => name.clone(),
            None => self.default_package_name(),
        };
        if !is_valid_package_name(&package_name) {
            return Err(ScaffoldError::InvalidPackageName { name: package_name });
        }

        let author = self.author.unwrap_or_default();
        let target_dir = self
            .target_dir
            .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string());

        Ok(ResolvedConfig {
            target_dir: PathBuf::from(target_dir),
            vars: TemplateVars::new(&package_name, &author, today),
            package_name,
            author,
            template: template.id,
            overwrite,
        })
    }
}

/// The next question to ask, or `None` once everything is known
pub fn next_step(partial: &PartialConfig) -> Option<PromptStep> {
    if partial.target_dir.is_none() {
        return Some(PromptStep::ProjectName);
    }

    let needs_confirmation = partial
        .destination
        .is_some_and(|d| d.needs_confirmation());
    if needs_confirmation && partial.overwrite.is_none() {
        return Some(PromptStep::Overwrite);
    }

    if partial.package_name.is_none() && !is_valid_package_name(&partial.default_package_name())
    {
        return Some(PromptStep::PackageName);
    }

    if partial.template.is_none() {
        return Some(match partial.framework {
            None => PromptStep::Framework,
            Some(_) => PromptStep::Variant,
        });
    }

    if partial.author.is_none() {
        return Some(PromptStep::Author);
    }

    None
}
