//! Puts the pieces together: destination, template tree, variable files, manifest

use crate::config::ResolvedConfig;
use crate::error::{Result, ScaffoldError};
use crate::templates::copier::{ScaffoldReport, TreeCopier};
use crate::templates::destination;
use crate::templates::manifest::{PackageManifest, MANIFEST_FILE};
use crate::templates::TemplateLayout;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Materialize a new project for a fully resolved configuration.
///
/// Order: check the template and parse its manifest, reconcile the
/// destination, copy the template tree (minus the manifest), copy the
/// shared variable files, then write the merged manifest. A failure
/// part-way leaves whatever was already written in place.
pub async fn scaffold(config: &ResolvedConfig, layout: &TemplateLayout) -> Result<ScaffoldReport> {
    let template_dir = layout.template_dir(config.template);
    if !is_dir(&template_dir).await? {
        return Err(ScaffoldError::TemplateMissing { path: template_dir });
    }

    let manifest_path = template_dir.join(MANIFEST_FILE);
    let mut manifest = PackageManifest::load(&manifest_path).await?;
    manifest.set_identity(&config.package_name, &config.author);

    destination::reconcile(&config.target_dir, config.overwrite).await?;

    let mut copier = TreeCopier::new(&config.target_dir, &config.vars);
    copier.exclude(manifest_path);
    copier
        .copy_tree(template_dir, config.target_dir.clone())
        .await?;

    // Written second so shared files win on name collisions
    let variable_dir = layout.variable_dir();
    if is_dir(&variable_dir).await? {
        copier
            .copy_tree(variable_dir, config.target_dir.clone())
            .await?;
    }

    manifest.write_to(&config.target_dir).await?;

    let mut report = copier.finish();
    let manifest_file = PathBuf::from(MANIFEST_FILE);
    report.copied.retain(|p| *p != manifest_file);
    report.rendered.retain(|p| *p != manifest_file);
    report.rendered.push(manifest_file);
    Ok(report)
}

/// `Ok(false)` when nothing is there or it is not a directory; other IO errors are passed on
async fn is_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ScaffoldError::io(format!("reading {}", path.display()), e)),
    }
}
