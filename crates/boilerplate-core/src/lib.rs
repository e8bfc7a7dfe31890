//! Boilerplate Core - scaffolding engine for `create-boilerplate`
//!
//! Given a target directory and a template id (framework + language
//! variant), this library materializes a new project from on-disk
//! boilerplate trees, rendering `*.mustache` files with the project's
//! name, author and date.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - name validation, the template catalog,
//!   rendering, tree copying, destination reconciliation, manifest merging
//! - **Layer 2: Workflow Orchestration** - `ProductConfig`, the prompt
//!   state machine in `config::flow`, and `templates::scaffold`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use boilerplate_core::config::flow::PartialConfig;
//! use boilerplate_core::templates::{scaffold, Catalog, TemplateLayout};
//!
//! let catalog = Catalog::builtin();
//! let mut partial = PartialConfig::new(std::env::current_dir()?);
//! partial.target_dir = Some("my-app".into());
//! partial.choose_template(catalog.resolve("react-ts").unwrap());
//! partial.author = Some("Jane".into());
//! let resolved = partial.finalize(&catalog, chrono::Local::now().date_naive())?;
//! scaffold(&resolved, &TemplateLayout::new("templates")).await?;
//! ```
//!
//! # Known limitations
//!
//! A failure part-way through scaffolding leaves the destination partially
//! written. Nothing is rolled back.

pub mod config;
pub mod error;
pub mod name;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{ResolvedConfig, TemplateVars};
pub use error::{Result, ScaffoldError};
pub use name::{format_target_dir, is_valid_package_name, to_valid_package_name};
pub use product::ProductConfig;
pub use runtime::PackageManager;
pub use templates::{scaffold, Catalog, ScaffoldReport, TemplateDescriptor, TemplateLayout};

#[cfg(feature = "tui")]
pub use tui::run;
