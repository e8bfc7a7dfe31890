//! Charm-style CLI prompts using cliclack

use crate::config::flow::{next_step, PartialConfig, PromptStep, DEFAULT_TARGET_DIR};
use crate::config::ResolvedConfig;
use crate::error::ScaffoldError;
use crate::name::{format_target_dir, is_valid_package_name, to_valid_package_name};
use crate::product::{resolve_templates_dir, ProductConfig};
use crate::runtime::{detect_author, PackageManager};
use crate::templates::{scaffold, Catalog, DestinationState, TemplateDescriptor, TemplateLayout};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create
    pub directory: Option<String>,

    /// Template id to use (e.g. `react-ts`)
    pub template: Option<String>,

    /// Package name, when it should differ from the directory name
    pub name: Option<String>,

    /// Author written into the manifest and templates
    pub author: Option<String>,

    /// Empty a non-empty target directory without asking
    pub overwrite: bool,

    /// Templates root instead of the product default
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Locate templates
    let layout = TemplateLayout::new(resolve_templates_dir(config, args.template_dir.clone()));
    if args.template_dir.is_some() {
        cliclack::log::info(format!(
            "Using templates from {}",
            layout.root().display()
        ))?;
    }

    // Step 2: Offer only templates whose tree is on disk
    let catalog = config.catalog();
    let offered = layout.available(&catalog);
    if offered.is_empty() {
        return Err(ScaffoldError::TemplateMissing {
            path: layout.root().to_path_buf(),
        }
        .into());
    }

    // Step 3: Apply flags, then ask whatever is still missing
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let mut partial = apply_args(&catalog, &offered, &args, cwd).await?;

    while let Some(step) = next_step(&partial) {
        ask(step, &mut partial, &catalog, &offered).await?;
    }

    // Step 4: Freeze the configuration
    let today = chrono::Local::now().date_naive();
    let resolved = partial.finalize(&catalog, today)?;

    // Step 5: Create project
    create_project(&resolved, &layout).await?;

    // Step 6: Show next steps
    print_next_steps(config, &resolved.target_dir)?;

    Ok(())
}

/// Map an interrupted prompt (Esc / Ctrl+C) to a cancellation
fn answer<T>(result: std::io::Result<T>) -> Result<T> {
    result.map_err(|e| {
        if e.kind() == ErrorKind::Interrupted {
            ScaffoldError::Cancelled.into()
        } else {
            e.into()
        }
    })
}

/// Seed the answers from command-line flags
async fn apply_args(
    catalog: &Catalog,
    offered: &[TemplateDescriptor],
    args: &CreateArgs,
    cwd: PathBuf,
) -> Result<PartialConfig> {
    let mut partial = PartialConfig::new(cwd);

    let directory = args
        .directory
        .as_deref()
        .map(format_target_dir)
        .filter(|d| !d.is_empty())
        .or_else(|| args.yes.then(|| DEFAULT_TARGET_DIR.to_string()));
    if let Some(dir) = directory {
        set_target(&mut partial, dir).await?;
    }

    if args.overwrite {
        partial.overwrite = Some(true);
    } else if args.yes && partial.destination.is_some_and(|d| d.needs_confirmation()) {
        cliclack::log::warning("Target directory is not empty; pass --overwrite to replace it")?;
        return Err(ScaffoldError::Cancelled.into());
    }

    if let Some(template) = &args.template {
        match catalog.resolve(template).filter(|d| offered.contains(d)) {
            Some(descriptor) => partial.choose_template(descriptor),
            None if args.yes => {
                return Err(ScaffoldError::UnknownTemplate {
                    id: template.clone(),
                    available: offered.iter().map(|t| t.id.to_string()).collect(),
                }
                .into())
            }
            None => cliclack::log::warning(format!(
                "\"{}\" isn't a valid template. Please choose from below:",
                template
            ))?,
        }
    } else if args.yes {
        anyhow::bail!("--template is required in non-interactive mode");
    }

    if let Some(name) = &args.name {
        if is_valid_package_name(name) {
            partial.package_name = Some(name.clone());
        } else if args.yes {
            return Err(ScaffoldError::InvalidPackageName { name: name.clone() }.into());
        } else {
            cliclack::log::warning(format!("\"{}\" is not a valid package name", name))?;
            partial.package_name = Some(prompt_package_name(name)?);
        }
    } else if args.yes && !is_valid_package_name(&partial.default_package_name()) {
        let normalized = to_valid_package_name(&partial.default_package_name());
        if !is_valid_package_name(&normalized) {
            return Err(ScaffoldError::InvalidPackageName { name: normalized }.into());
        }
        partial.package_name = Some(normalized);
    }

    if let Some(author) = &args.author {
        partial.author = Some(author.trim().to_string());
    } else if args.yes {
        partial.author = Some(detect_author().unwrap_or_default());
    }

    Ok(partial)
}

async fn set_target(partial: &mut PartialConfig, dir: String) -> Result<()> {
    let state = DestinationState::inspect(Path::new(&dir)).await?;
    partial.target_dir = Some(dir);
    partial.destination = Some(state);
    Ok(())
}

async fn ask(
    step: PromptStep,
    partial: &mut PartialConfig,
    catalog: &Catalog,
    offered: &[TemplateDescriptor],
) -> Result<()> {
    match step {
        PromptStep::ProjectName => {
            let input: String = answer(
                cliclack::input("Project name")
                    .placeholder(DEFAULT_TARGET_DIR)
                    .default_input(DEFAULT_TARGET_DIR)
                    .interact(),
            )?;
            let dir = format_target_dir(&input);
            let dir = if dir.is_empty() {
                DEFAULT_TARGET_DIR.to_string()
            } else {
                dir
            };
            set_target(partial, dir).await?;
        }
        PromptStep::Overwrite => {
            let target = partial.target_dir.as_deref().unwrap_or(DEFAULT_TARGET_DIR);
            let label = if target == "." {
                "Current directory".to_string()
            } else {
                format!("Target directory \"{}\"", target)
            };
            let confirm: bool = answer(
                cliclack::confirm(format!(
                    "{} is not empty. Remove existing files and continue?",
                    label
                ))
                .initial_value(false)
                .interact(),
            )?;
            if !confirm {
                return Err(ScaffoldError::Cancelled.into());
            }
            partial.overwrite = Some(true);
        }
        PromptStep::PackageName => {
            partial.package_name = Some(prompt_package_name(&partial.default_package_name())?);
        }
        PromptStep::Framework => {
            let mut select = cliclack::select("Select a framework");
            for framework in catalog
                .frameworks()
                .iter()
                .filter(|f| offered.iter().any(|t| t.framework == f.id))
            {
                select = select.item(
                    framework.id,
                    framework.display.color(framework.color).to_string(),
                    "",
                );
            }
            let id: &'static str = answer(select.interact())?;
            match catalog.framework(id) {
                Some(framework) if framework.variants.is_empty() => {
                    if let Some(descriptor) = catalog.resolve(id) {
                        partial.choose_template(descriptor);
                    }
                }
                _ => partial.framework = Some(id),
            }
        }
        PromptStep::Variant => {
            let framework = partial
                .framework
                .and_then(|id| catalog.framework(id))
                .context("Selected framework is not in the catalog")?;
            let mut select = cliclack::select("Select a variant");
            for variant in framework
                .variants
                .iter()
                .filter(|v| offered.iter().any(|t| t.id == v.id))
            {
                select = select.item(
                    variant.id,
                    variant.display.color(variant.color).to_string(),
                    "",
                );
            }
            let id: &'static str = answer(select.interact())?;
            let descriptor = catalog
                .resolve(id)
                .with_context(|| format!("Variant '{}' is not in the catalog", id))?;
            partial.choose_template(descriptor);
        }
        PromptStep::Author => {
            let mut input = cliclack::input("Author").required(false);
            if let Some(detected) = detect_author() {
                input = input.default_input(&detected);
            }
            let author: String = answer(input.interact())?;
            partial.author = Some(author.trim().to_string());
        }
    }

    Ok(())
}

fn prompt_package_name(suggestion: &str) -> Result<String> {
    let default = to_valid_package_name(suggestion);
    let name: String = answer(
        cliclack::input("Package name")
            .default_input(&default)
            .validate(|input: &String| {
                if is_valid_package_name(input) {
                    Ok(())
                } else {
                    Err("Invalid package.json name")
                }
            })
            .interact(),
    )?;
    Ok(name)
}

async fn create_project(resolved: &ResolvedConfig, layout: &TemplateLayout) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Scaffolding project in {}...",
        resolved.target_dir.display()
    ));

    match scaffold(resolved, layout).await {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files from {} ({} rendered)",
                report.len(),
                resolved.template,
                report.rendered.len()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Scaffolding failed");
            Err(e.into())
        }
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<()> {
    let steps = config.next_steps(project_dir, PackageManager::detect());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.bold());
    }

    cliclack::outro("Done. Happy coding!")?;

    Ok(())
}
