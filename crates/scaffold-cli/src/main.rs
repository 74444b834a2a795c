//! scaffold - Generate Go project folder structures from templates

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use scaffold_core::config::{config_file, custom_templates_dir};
use scaffold_core::{commands, InitArgs, License, Options, Registry, UserConfig};

#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(about = "Generate Go project folder structures from templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project (interactive wizard when no template is given)
    Init(CliInitArgs),
    /// List available templates
    List {
        /// List components for `scaffold add` instead
        #[arg(long)]
        components: bool,
    },
    /// Show template details
    Info {
        /// Template name
        template: String,
    },
    /// Show or edit configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Add a component to the project in the current directory
    Add {
        /// Component name
        component: String,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,

        /// Preview files without creating them
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Set one configuration value
    Set {
        /// One of: author, default_license, module_prefix, auto_git, auto_install
        key: String,
        value: String,
    },
    /// Restore the default configuration
    Reset,
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Template name (see `scaffold list`)
    pub template: Option<String>,

    /// Project name (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// License for the LICENSE file (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub license: Option<License>,

    /// Include a Dockerfile
    #[arg(long)]
    pub docker: bool,

    /// Skip git repository initialization
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Preview files without creating them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            template: args.template,
            name: args.name,
            license: args.license,
            docker: args.docker,
            no_git: args.no_git,
            dry_run: args.dry_run,
            force: args.force,
        }
    }
}

fn load_registry() -> Registry {
    let Some(dir) = custom_templates_dir() else {
        return Registry::builtin();
    };

    let (registry, warnings) = Registry::with_custom_dir(&dir);
    for warning in warnings {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }
    registry
}

#[tokio::main(flavor = "current_thread")]
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
    let mut user = UserConfig::load();

    match args.command {
        Command::Init(init_args) => {
            let registry = load_registry();
            let result = scaffold_core::run_init(&registry, &user, init_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Command::List { components } => {
            let registry = load_registry();
            if components {
                commands::list_components(&registry);
            } else {
                commands::list(&registry);
            }
            Ok(())
        }
        Command::Info { template } => commands::info(&load_registry(), &template),
        Command::Config { action: None } => {
            commands::show_config(&user);
            Ok(())
        }
        Command::Config {
            action: Some(action),
        } => {
            let path = config_file().context("Could not determine the home directory")?;
            match action {
                ConfigAction::Set { key, value } => {
                    commands::config_set(&mut user, &key, &value, &path)
                }
                ConfigAction::Reset => commands::config_reset(&path).map(|_| ()),
            }
        }
        Command::Add {
            component,
            force,
            dry_run,
        } => {
            let dir = std::env::current_dir().context("Failed to read current directory")?;
            let options = Options { dry_run, force };
            commands::add(&load_registry(), &user, &component, &dir, options)
                .await
                .map(|_| ())
        }
    }
}
