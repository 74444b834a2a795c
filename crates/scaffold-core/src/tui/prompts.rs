//! Charm-style prompts for `scaffold init`

use super::wizard::TermKeys;
use crate::config::UserConfig;
use crate::error::ScaffoldError;
use crate::generator::{self, Options, Report};
use crate::project::{InitArgs, ProjectConfig, DEFAULT_PROJECT_NAME};
use crate::runtime;
use crate::templates::Registry;
use crate::wizard::{run_wizard, Choices};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;

/// Run `init`: collect answers, generate, init git, show next steps
pub async fn run_init(registry: &Registry, user: &UserConfig, args: InitArgs) -> Result<()> {
    cliclack::intro("scaffold")?;

    let project = match resolve_project(registry, user, &args) {
        Ok(project) => project,
        Err(e) if is_cancelled(&e) => {
            cliclack::outro_cancel("Cancelled")?;
            return Err(ScaffoldError::Cancelled.into());
        }
        Err(e) => return Err(e),
    };

    let template = registry.template(&project.template_name)?;
    let plan = project.plan(registry, user)?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let root = project.root(&cwd);
    let options = Options {
        dry_run: args.dry_run,
        force: args.force,
    };

    let spinner = cliclack::spinner();
    spinner.start(format!("Creating {} from {}...", project.project_name, template.name));

    let report = match generator::generate(&root, &plan, options).await {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Generation failed");
            return Err(e.into());
        }
    };

    if report.dry_run {
        spinner.stop(format!(
            "Dry run: {} files would be created in {}",
            report.files_written(),
            root.display()
        ));
        cliclack::log::info(describe(&report))?;
        cliclack::outro("No files were written")?;
        return Ok(());
    }

    spinner.stop(format!(
        "Created {} files in {}",
        report.files_written(),
        root.display()
    ));

    let git_initialized = project.init_git && init_git(&root).await?;

    print_next_steps(&project.next_steps(template, git_initialized))?;
    Ok(())
}

fn resolve_project(registry: &Registry, user: &UserConfig, args: &InitArgs) -> Result<ProjectConfig> {
    let Some(template_name) = &args.template else {
        let choices = Choices::new(registry, user);
        let mut keys = TermKeys::new();
        let project = run_wizard(&mut keys, &choices)?.with_overrides(args);
        cliclack::log::success(format!(
            "{} ({}, {})",
            project.project_name, project.template_name, project.license
        ))?;
        return Ok(project);
    };

    let template = registry.template(template_name).map_err(|e| {
        anyhow::anyhow!("{}. Use 'scaffold list' to see available templates", e)
    })?;
    cliclack::log::info(format!("Template: {} - {}", template.name, template.description))?;

    let name = match &args.name {
        Some(name) => name.clone(),
        None => {
            let input: String = cliclack::input("Project name")
                .placeholder(DEFAULT_PROJECT_NAME)
                .default_input(DEFAULT_PROJECT_NAME)
                .interact()?;
            input
        }
    };
    Ok(ProjectConfig::from_args(&name, template_name.as_str(), args, user)?)
}

/// Ctrl+C inside a cliclack prompt surfaces as an interrupted read
fn is_cancelled(e: &anyhow::Error) -> bool {
    if let Some(e) = e.downcast_ref::<ScaffoldError>() {
        return e.is_cancelled();
    }
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::Interrupted)
}

/// Returns whether the repository was created; failures are only warnings
async fn init_git(root: &Path) -> Result<bool> {
    let git = runtime::check_git();
    if !git.available {
        cliclack::log::warning("git not found on PATH, skipping git init")?;
        return Ok(false);
    }

    match runtime::init_repository(root).await {
        Ok(()) => {
            let version = git.version.unwrap_or_default();
            cliclack::log::success(format!("Initialized git repository ({})", version))?;
            Ok(true)
        }
        Err(e) => {
            cliclack::log::warning(format!("Skipping git init: {:#}", e))?;
            Ok(false)
        }
    }
}

fn describe(report: &Report) -> String {
    report
        .relative_paths()
        .map(|(verb, path)| format!("{:<9} {}", verb, path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_next_steps(steps: &[String]) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
