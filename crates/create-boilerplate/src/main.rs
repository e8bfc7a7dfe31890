//! create-boilerplate - scaffold a new project from a boilerplate template

use anyhow::Result;
use boilerplate_core::tui::CreateArgs;
use boilerplate_core::product::resolve_templates_dir;
use boilerplate_core::{
    Catalog, PackageManager, ProductConfig, ScaffoldError, TemplateDescriptor, TemplateLayout,
};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Product configuration for create-boilerplate
#[derive(Clone)]
pub struct BoilerplateConfig;

impl ProductConfig for BoilerplateConfig {
    fn name(&self) -> &'static str {
        "create-boilerplate"
    }

    fn display_name(&self) -> &'static str {
        "create-boilerplate"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold a new project from a boilerplate template"
    }

    fn templates_dir_env(&self) -> &'static str {
        "CREATE_BOILERPLATE_TEMPLATES"
    }

    fn next_steps(&self, dir: &Path, package_manager: PackageManager) -> Vec<String> {
        let current = std::env::current_dir().ok();
        next_steps_from(current.as_deref(), dir, package_manager)
    }
}

fn next_steps_from(current: Option<&Path>, dir: &Path, pm: PackageManager) -> Vec<String> {
    let mut steps = Vec::new();

    // Step 1: cd to directory if not current
    if dir != Path::new(".") && current != Some(dir) {
        let shown = dir.display().to_string();
        if shown.contains(' ') {
            steps.push(format!("cd \"{}\"", shown));
        } else {
            steps.push(format!("cd {}", shown));
        }
    }

    // Step 2: Install dependencies
    steps.push(pm.install_command());

    // Step 3: Start dev server
    steps.push(pm.dev_command());

    steps
}

#[derive(Parser, Debug)]
#[command(name = "create-boilerplate")]
#[command(about = "Scaffold a new project from a boilerplate template")]
#[command(version)]
pub struct Args {
    /// Project directory to create
    pub directory: Option<String>,

    /// Template to use (e.g. react-ts); see --list
    #[arg(short, long)]
    pub template: Option<String>,

    /// Package name, when it should differ from the directory name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Author written into package.json and templates
    #[arg(short, long)]
    pub author: Option<String>,

    /// Remove existing files in a non-empty target directory
    #[arg(long)]
    pub overwrite: bool,

    /// Local directory containing template trees (overrides CREATE_BOILERPLATE_TEMPLATES)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// List available templates and exit
    #[arg(long)]
    pub list: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            directory: args.directory,
            template: args.template,
            name: args.name,
            author: args.author,
            overwrite: args.overwrite,
            template_dir: args.template_dir,
            yes: args.yes,
        }
    }
}

/// Templates from `catalog` that have a tree under `layout`, grouped by framework
fn listed_templates(
    catalog: &Catalog,
    layout: &TemplateLayout,
) -> Vec<(&'static str, Vec<TemplateDescriptor>)> {
    let offered = layout.available(catalog);
    catalog
        .frameworks()
        .iter()
        .map(|framework| {
            let leaves: Vec<_> = offered
                .iter()
                .filter(|t| t.framework == framework.id)
                .copied()
                .collect();
            (framework.id, leaves)
        })
        .filter(|(_, leaves)| !leaves.is_empty())
        .collect()
}

fn print_catalog(catalog: &Catalog, layout: &TemplateLayout) {
    let listed = listed_templates(catalog, layout);
    if listed.is_empty() {
        println!("No templates found in {}", layout.root().display());
        return;
    }

    for (framework_id, leaves) in listed {
        if let Some(framework) = catalog.framework(framework_id) {
            println!("{}", framework.display.color(framework.color).bold());
        }
        for leaf in leaves {
            println!("  {:<12} {}", leaf.id, leaf.display.color(leaf.color));
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = BoilerplateConfig;

    if args.list {
        let layout = TemplateLayout::new(resolve_templates_dir(&config, args.template_dir.clone()));
        print_catalog(&config.catalog(), &layout);
        return Ok(());
    }

    let result = boilerplate_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Err(e)
            if e
                .downcast_ref::<ScaffoldError>()
                .is_some_and(ScaffoldError::is_cancelled) =>
        {
            let _ = cliclack::outro_cancel("Operation cancelled");
            std::process::exit(1);
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_steps_for_subdirectory() {
        let steps = next_steps_from(
            Some(Path::new("/work")),
            Path::new("my-app"),
            PackageManager::Pnpm,
        );
        assert_eq!(steps, vec!["cd my-app", "pnpm install", "pnpm run dev"]);
    }

    #[test]
    fn test_next_steps_quotes_spaces() {
        let steps = next_steps_from(None, Path::new("my app"), PackageManager::Yarn);
        assert_eq!(steps, vec!["cd \"my app\"", "yarn", "yarn dev"]);
    }

    #[test]
    fn test_next_steps_in_current_directory() {
        let steps = next_steps_from(Some(Path::new("/work")), Path::new("."), PackageManager::Npm);
        assert_eq!(steps, vec!["npm install", "npm run dev"]);
    }

    #[test]
    fn test_every_listed_template_ships_a_tree() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");
        let layout = TemplateLayout::new(&root);
        let catalog = BoilerplateConfig.catalog();

        let listed = listed_templates(&catalog, &layout);
        let ids: Vec<_> = listed
            .iter()
            .flat_map(|(_, leaves)| leaves.iter().map(|t| t.id))
            .collect();
        assert_eq!(ids, vec!["vanilla-ts", "vanilla"]);

        for id in ids {
            assert!(
                layout.template_dir(id).join("package.json").is_file(),
                "template-{id} has no package.json"
            );
        }
        assert!(!layout.available(&catalog).iter().any(|t| t.id == "react-ts"));
    }

    #[test]
    fn test_nothing_listed_for_empty_root() {
        let root = tempfile::TempDir::new().unwrap();
        let layout = TemplateLayout::new(root.path());
        assert!(listed_templates(&BoilerplateConfig.catalog(), &layout).is_empty());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "create-boilerplate",
            "my-app",
            "-t",
            "react-ts",
            "--overwrite",
            "-y",
        ]);
        let create: CreateArgs = args.into();
        assert_eq!(create.directory.as_deref(), Some("my-app"));
        assert_eq!(create.template.as_deref(), Some("react-ts"));
        assert!(create.overwrite);
        assert!(create.yes);
    }
}
