//! Per-file rendering: `*.mustache` files are rendered, everything else is copied verbatim

use crate::config::TemplateVars;
use crate::error::{Result, ScaffoldError};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files ending with this suffix (any case) are rendered and written without it
pub const TEMPLATE_SUFFIX: &str = ".mustache";

/// Stands in for any helper that is not registered, so `{{foo bar}}` renders empty
fn render_nothing(
    _: &Helper<'_>,
    _: &Handlebars<'_>,
    _: &Context,
    _: &mut RenderContext<'_, '_>,
    _: &mut dyn Output,
) -> HelperResult {
    Ok(())
}

/// Return the file name without the template suffix, or `None` if it is not a template
pub fn strip_template_suffix(file_name: &str) -> Option<&str> {
    let split = file_name.len().checked_sub(TEMPLATE_SUFFIX.len())?;
    if split == 0 {
        return None;
    }
    let (stem, suffix) = (file_name.get(..split)?, file_name.get(split..)?);
    suffix.eq_ignore_ascii_case(TEMPLATE_SUFFIX).then_some(stem)
}

/// Which way a file reached the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Rendered,
    Copied,
}

/// Renders template text against [`TemplateVars`]
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Output is source code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("helperMissing", Box::new(render_nothing));

        Self { handlebars }
    }

    /// Substitute placeholders in `template`; unknown keys and helpers render as empty strings
    pub fn render_str(
        &self,
        template: &str,
        vars: &TemplateVars,
    ) -> std::result::Result<String, handlebars::RenderError> {
        self.handlebars.render_template(template, vars)
    }

    /// Write one source file to `dest`, rendering it when it carries the template suffix.
    ///
    /// Returns the path actually written (suffix stripped for rendered files).
    pub async fn render_file(
        &self,
        src: &Path,
        dest: &Path,
        vars: &TemplateVars,
    ) -> Result<(PathBuf, FileAction)> {
        let is_template = src
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(strip_template_suffix)
            .is_some();

        if !is_template {
            fs::copy(src, dest).await.map_err(|e| {
                ScaffoldError::io(
                    format!("copying {} to {}", src.display(), dest.display()),
                    e,
                )
            })?;
            return Ok((dest.to_path_buf(), FileAction::Copied));
        }

        let dest = match dest
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(strip_template_suffix)
        {
            Some(stem) => dest.with_file_name(stem),
            None => dest.to_path_buf(),
        };

        let content = fs::read_to_string(src)
            .await
            .map_err(|e| ScaffoldError::io(format!("reading {}", src.display()), e))?;
        let rendered = self
            .render_str(&content, vars)
            .map_err(|e| ScaffoldError::Render {
                path: src.to_path_buf(),
                source: e,
            })?;
        fs::write(&dest, rendered)
            .await
            .map_err(|e| ScaffoldError::io(format!("writing {}", dest.display()), e))?;

        Ok((dest, FileAction::Rendered))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn vars() -> TemplateVars {
        TemplateVars::new(
            "my-app",
            "Jane <jane@example.com>",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    #[test]
    fn test_strip_template_suffix() {
        assert_eq!(strip_template_suffix("README.md.mustache"), Some("README.md"));
        assert_eq!(strip_template_suffix("LICENSE.MUSTACHE"), Some("LICENSE"));
        assert_eq!(strip_template_suffix("index.html"), None);
        assert_eq!(strip_template_suffix(".mustache"), None);
        assert_eq!(strip_template_suffix("mustache"), None);
    }

    #[test]
    fn test_render_substitutes_and_skips_escaping() {
        let renderer = Renderer::new();
        let out = renderer
            .render_str("{{name}} by {{author}} ({{now}}, {{nowYear}})", &vars())
            .unwrap();
        assert_eq!(out, "my-app by Jane <jane@example.com> (2024.05.01, 2024)");
    }

    #[test]
    fn test_missing_key_renders_empty() {
        let renderer = Renderer::new();
        let out = renderer.render_str("[{{license}}]", &vars()).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_unknown_helper_renders_empty() {
        let renderer = Renderer::new();
        let out = renderer
            .render_str("[{{shout name}}] {{name}}", &vars())
            .unwrap();
        assert_eq!(out, "[] my-app");
    }

    #[tokio::test]
    async fn test_render_file_strips_suffix() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("name.txt.mustache");
        std::fs::write(&src, "{{name}}").unwrap();
        let dest = tmp.path().join("out.txt.mustache");

        let (written, action) = Renderer::new()
            .render_file(&src, &dest, &vars())
            .await
            .unwrap();

        assert_eq!(action, FileAction::Rendered);
        assert_eq!(written, tmp.path().join("out.txt"));
        assert_eq!(std::fs::read_to_string(&written).unwrap(), "my-app");
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_render_file_copies_binary_verbatim() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("logo.png");
        let bytes = vec![0x89, b'P', b'N', b'G', 0x00, 0xff, b'{', b'{', b'}', b'}'];
        std::fs::write(&src, &bytes).unwrap();
        let dest = tmp.path().join("copy.png");

        let (written, action) = Renderer::new()
            .render_file(&src, &dest, &vars())
            .await
            .unwrap();

        assert_eq!(action, FileAction::Copied);
        assert_eq!(written, dest);
        assert_eq!(std::fs::read(&dest).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_render_file_missing_source_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = Renderer::new()
            .render_file(
                &tmp.path().join("gone.mustache"),
                &tmp.path().join("gone"),
                &vars(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
