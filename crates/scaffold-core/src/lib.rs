//! Scaffold Core - Library behind the `scaffold` CLI
//!
//! Generates Go project folder structures from built-in templates, custom
//! templates under `~/.scaffold/templates/`, and adds reusable components to
//! existing projects.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Definitions** - `Registry` of templates and components, placeholder rendering
//! - **Layer 2: Generation** - `Plan` and `generator::generate`, `ProjectConfig` composition,
//!   the pure `wizard` state machine
//! - **Layer 3: CLI/TUI Interface** - `commands` output and optional cliclack prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack prompts and the console-backed wizard
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{generate, Options, ProjectConfig, Registry, UserConfig};
//!
//! let registry = Registry::builtin();
//! let user = UserConfig::load();
//! let project = ProjectConfig::new("billing", "go-api", &user);
//! let plan = project.plan(&registry, &user)?;
//! let report = generate(&project.root(&cwd), &plan, Options::default()).await?;
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod project;
pub mod runtime;
pub mod templates;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::UserConfig;
pub use error::{Result, ScaffoldError};
pub use generator::{generate, Action, Options, Plan, Report};
pub use project::{validate_project_name, InitArgs, ProjectConfig};
pub use templates::{Blueprint, Category, Component, License, Registry, Template, TemplateFile};

#[cfg(feature = "tui")]
pub use tui::run_init;
