//! Non-interactive subcommands: list, info, config and add

use crate::config::{self, UserConfig};
use crate::generator::{Options, Report};
use crate::project;
use crate::templates::{Category, Registry, Template};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Templates bucketed by category in display order, empty buckets omitted
pub fn group_by_category<'a>(templates: &[&'a Template]) -> Vec<(Category, Vec<&'a Template>)> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let mut members: Vec<&Template> = templates
                .iter()
                .copied()
                .filter(|t| t.category == category)
                .collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by(|a, b| a.name.cmp(&b.name));
            Some((category, members))
        })
        .collect()
}

/// `scaffold list`
pub fn list(registry: &Registry) {
    println!("{}", "Available Templates".magenta().bold());
    println!();

    for (category, templates) in group_by_category(&registry.templates()) {
        println!("{}", format!("{}:", category).cyan().bold());
        for template in templates {
            println!("  {:<22} {}", template.name, template.description.dimmed());
        }
        println!();
    }

    println!("{}", "Usage: scaffold init <template>".dimmed());
    println!("{}", "       scaffold info <template>  # Show details".dimmed());
}

/// `scaffold list --components`
pub fn list_components(registry: &Registry) {
    println!("{}", "Available Components".magenta().bold());
    println!();

    for component in registry.components() {
        println!(
            "  {:<16} {}",
            component.name,
            component.description.dimmed()
        );
    }

    println!();
    println!("{}", "Usage: scaffold add <component>".dimmed());
}

/// `scaffold info <template>`
pub fn info(registry: &Registry, name: &str) -> Result<()> {
    let template = registry.template(name).map_err(|e| {
        anyhow::anyhow!("{}. Use 'scaffold list' to see available templates", e)
    })?;

    println!("{}", format!("Template: {}", template.name).magenta().bold());
    println!();
    println!("{}", template.description);
    println!("{} {}", "Category:".dimmed(), template.category);
    println!();

    if !template.directories.is_empty() {
        println!("{}", "Directories:".cyan().bold());
        for dir in &template.directories {
            println!("  {}/", dir);
        }
        println!();
    }

    println!("{}", "Files:".cyan().bold());
    for file in &template.files {
        println!("  {}", file.path);
    }
    println!();

    println!("{}", "Usage:".cyan().bold());
    println!("  scaffold init {}", template.name);
    println!("  scaffold init {} --dry-run  {}", template.name, "# Preview first".dimmed());

    Ok(())
}

/// `scaffold config`
pub fn show_config(user: &UserConfig) {
    let author = if user.author.is_empty() {
        "(not set)".dimmed().to_string()
    } else {
        user.author.clone()
    };

    println!("{}", "Configuration".magenta().bold());
    println!();
    println!("  {:<16} {}", "Author:", author);
    println!("  {:<16} {}", "Default License:", user.default_license);
    println!("  {:<16} {}", "Module Prefix:", user.module_prefix);
    println!("  {:<16} {}", "Auto Git:", user.auto_git);
    println!("  {:<16} {}", "Auto Install:", user.auto_install);
    println!();

    let file = config::config_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(home directory not found)".to_string());
    let templates = config::custom_templates_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(home directory not found)".to_string());
    println!("{}", format!("Config file: {}", file).dimmed());
    println!("{}", format!("Custom templates: {}", templates).dimmed());
    println!(
        "{}",
        format!("Change a value: scaffold config set <key> <value> ({})", UserConfig::KEYS.join(", "))
            .dimmed()
    );
}

/// `scaffold config set <key> <value>`
pub fn config_set(user: &mut UserConfig, key: &str, value: &str, path: &Path) -> Result<()> {
    user.set(key, value)?;
    user.save_to(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    println!("{} {} = {}", "✓".green(), key, value.trim());
    Ok(())
}

/// `scaffold config reset`
pub fn config_reset(path: &Path) -> Result<UserConfig> {
    let defaults = UserConfig::default();
    defaults
        .save_to(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    println!("{} Configuration reset to defaults", "✓".green());
    Ok(defaults)
}

/// `scaffold add <component>` into `dir`
pub async fn add(
    registry: &Registry,
    user: &UserConfig,
    name: &str,
    dir: &Path,
    options: Options,
) -> Result<Report> {
    let component = match registry.component(name) {
        Ok(component) => component,
        Err(e) => {
            eprintln!("{} Unknown component '{}'", "Error:".red().bold(), name);
            eprintln!();
            eprintln!("Available components:");
            for c in registry.components() {
                eprintln!("  {:<16} {}", c.name, c.description.dimmed());
            }
            return Err(e.into());
        }
    };

    println!("Adding component: {}", component.name.to_string().magenta().bold());
    println!("Description: {}", component.description);
    println!();

    let report = project::add_component(registry, user, name, dir, options).await?;

    let heading = if report.dry_run {
        "Would create files:"
    } else {
        "Created files:"
    };
    println!("{}", heading.cyan().bold());
    for (verb, path) in report.relative_paths() {
        let marker = if verb == "overwrite" { "↻" } else { "✓" };
        println!("  {} {}", marker.green(), path.display());
    }
    println!();
    println!(
        "{}",
        "Tip: Review TODO comments in generated files for customization".dimmed()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::manifest::MANIFEST_FILE;
    use std::fs;

    #[test]
    fn test_group_by_category_order() {
        let registry = Registry::builtin();
        let groups = group_by_category(&registry.templates());

        let categories: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                Category::Project,
                Category::Fullstack,
                Category::Learning,
                Category::Skill
            ]
        );

        let project: Vec<&str> = groups[0].1.iter().map(|t| &*t.name).collect();
        assert_eq!(
            project,
            vec![
                "go-api",
                "go-auth",
                "go-clean-arch",
                "go-cli",
                "go-cron",
                "go-graphql",
                "go-grpc",
                "go-kafka",
                "go-lambda",
                "go-lib",
                "go-microservice",
                "go-monorepo",
                "go-redis",
                "go-tui",
                "go-websocket",
                "go-worker"
            ]
        );
        assert_eq!(groups[1].1.len(), 1);
        assert_eq!(groups[2].1.len(), 9);
        assert_eq!(groups[3].1.len(), 4);
    }

    #[test]
    fn test_group_by_category_includes_custom_last() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("zeta");
        fs::create_dir_all(&custom).unwrap();
        fs::write(custom.join(MANIFEST_FILE), "description: Z\n").unwrap();
        fs::write(custom.join("main.go"), "package main\n").unwrap();

        let (registry, _) = Registry::with_custom_dir(dir.path());
        let groups = group_by_category(&registry.templates());
        let (category, templates) = groups.last().unwrap();
        assert_eq!(*category, Category::Custom);
        assert_eq!(templates[0].name, "zeta");
    }

    #[test]
    fn test_info_unknown_template() {
        let registry = Registry::builtin();
        let err = info(&registry, "nope").unwrap_err();
        assert!(err.to_string().contains("scaffold list"));
        assert!(info(&registry, "go-api").is_ok());
    }

    #[test]
    fn test_config_set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut user = UserConfig::default();

        config_set(&mut user, "author", "Ada", &path).unwrap();
        assert_eq!(UserConfig::load_from(&path).author, "Ada");

        assert!(config_set(&mut user, "bogus", "x", &path).is_err());
    }

    #[test]
    fn test_config_reset_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"author": "Ada", "auto_git": false}"#).unwrap();

        let reset = config_reset(&path).unwrap();
        assert_eq!(reset, UserConfig::default());
        assert_eq!(UserConfig::load_from(&path), UserConfig::default());
    }

    #[tokio::test]
    async fn test_add_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::builtin();
        let options = Options {
            dry_run: true,
            force: false,
        };

        let report = add(&registry, &UserConfig::default(), "github-actions", dir.path(), options)
            .await
            .unwrap();
        assert_eq!(report.files_written(), 1);
        assert!(!dir.path().join(".github").exists());
    }

    #[tokio::test]
    async fn test_add_unknown_component_fails() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::builtin();
        let err = add(
            &registry,
            &UserConfig::default(),
            "kubernetes",
            dir.path(),
            Options::default(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("kubernetes"));
    }
}
