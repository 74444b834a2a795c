//! Composition of a new project from the user's answers

use crate::config::UserConfig;
use crate::error::{Result, ScaffoldError};
use crate::generator::{self, Options, Plan, Report};
use crate::templates::{Category, License, Registry, Template, Variables};
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECT_NAME: &str = "my-project";
pub const MAX_PROJECT_NAME_LEN: usize = 64;

/// Component merged into the plan when Docker support is requested
const DOCKER_COMPONENT: &str = "dockerfile";

/// Check a project name and return it trimmed
///
/// The name becomes a directory under the current one, so it must be a single
/// non-empty path segment.
pub fn validate_project_name(name: &str) -> Result<String> {
    let name = name.trim();
    let reason = if name.is_empty() {
        Some("must not be empty".to_string())
    } else if name == "." || name == ".." {
        Some(format!("'{}' is not a valid directory name", name))
    } else if name.contains('/') || name.contains('\\') {
        Some(format!("'{}' must not contain path separators", name))
    } else if name.chars().count() > MAX_PROJECT_NAME_LEN {
        Some(format!("must be at most {} characters", MAX_PROJECT_NAME_LEN))
    } else if name.chars().any(char::is_control) {
        Some("must not contain control characters".to_string())
    } else if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        Some(format!("'{}' needs at least one ASCII letter or digit", name))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScaffoldError::InvalidProjectName(reason)),
        None => Ok(name.to_string()),
    }
}

/// Flags of `scaffold init`
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Template to use; the wizard runs when absent
    pub template: Option<String>,

    /// Project name; prompted for when absent
    pub name: Option<String>,

    /// License override (template mode only)
    pub license: Option<License>,

    /// Add the Dockerfile component (template mode only)
    pub docker: bool,

    /// Skip `git init`
    pub no_git: bool,

    /// Preview files without creating them
    pub dry_run: bool,

    /// Overwrite existing files
    pub force: bool,
}

/// Everything needed to generate one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub project_name: String,
    pub template_name: String,
    pub license: License,
    pub include_docker: bool,
    pub init_git: bool,
}

impl ProjectConfig {
    /// Non-interactive defaults: configured license, no Docker, git per `auto_git`
    pub fn new(project_name: impl Into<String>, template_name: impl Into<String>, user: &UserConfig) -> Self {
        Self {
            project_name: project_name.into(),
            template_name: template_name.into(),
            license: user.license(),
            include_docker: false,
            init_git: user.auto_git,
        }
    }

    /// Template mode: `name` as typed (blank means the default), flags applied
    pub fn from_args(
        name: &str,
        template_name: impl Into<String>,
        args: &InitArgs,
        user: &UserConfig,
    ) -> Result<Self> {
        let name = if name.trim().is_empty() {
            DEFAULT_PROJECT_NAME.to_string()
        } else {
            validate_project_name(name)?
        };

        let mut project = Self::new(name, template_name, user);
        if let Some(license) = args.license {
            project.license = license;
        }
        project.include_docker = args.docker;
        project.init_git = user.auto_git && !args.no_git;
        Ok(project)
    }

    /// Wizard mode: only `--no-git` overrides an answer
    pub fn with_overrides(mut self, args: &InitArgs) -> Self {
        if args.no_git {
            self.init_git = false;
        }
        self
    }

    pub fn variables(&self, user: &UserConfig) -> Variables {
        Variables::new(&self.project_name)
            .module_prefix(&user.module_prefix)
            .license(self.license.display_name())
            .author(&user.author)
    }

    /// Template files, plus the Dockerfile and LICENSE when selected
    ///
    /// Paths the template already provides win over the add-ons.
    pub fn plan(&self, registry: &Registry, user: &UserConfig) -> Result<Plan> {
        let template = registry.template(&self.template_name)?;
        let variables = self.variables(user);
        let mut plan = Plan::from_blueprint(template, &variables);

        if self.include_docker {
            let docker = registry.component(DOCKER_COMPONENT)?;
            plan.merge(Plan::from_blueprint(docker, &variables));
        }

        if let Some(text) = self.license.text() {
            plan.push_file("LICENSE", variables.render(text));
        }

        Ok(plan)
    }

    /// `<base>/<project_name>`
    pub fn root(&self, base: &Path) -> PathBuf {
        base.join(&self.project_name)
    }

    /// Commands to run after generation
    pub fn next_steps(&self, template: &Template, git_initialized: bool) -> Vec<String> {
        let mut steps = vec![format!("cd {}", self.project_name)];

        match template.category {
            Category::Fullstack => {
                steps.push("make install".to_string());
                steps.push("make dev".to_string());
            }
            Category::Learning | Category::Skill => {
                steps.push("go mod tidy".to_string());
                steps.push("go test ./...".to_string());
            }
            Category::Project | Category::Custom => {
                if has_file(template, "go.mod") {
                    steps.push("go mod tidy".to_string());
                }
                match main_package(template) {
                    Some(dir) if dir.is_empty() => steps.push("go run .".to_string()),
                    Some(dir) => steps.push(format!("go run ./{}", dir)),
                    None if has_file(template, "go.mod") => {
                        steps.push("go test ./...".to_string())
                    }
                    None => {}
                }
            }
        }

        if !git_initialized {
            steps.push("git init".to_string());
        }

        steps
    }
}

fn has_file(template: &Template, path: &str) -> bool {
    template.files.iter().any(|f| f.path == path)
}

/// Directory of the first `main.go` outside `examples/`, "" for the root
fn main_package(template: &Template) -> Option<String> {
    template
        .files
        .iter()
        .map(|f| &*f.path)
        .filter(|path| !path.starts_with("examples/"))
        .find_map(|path| {
            if path == "main.go" {
                Some(String::new())
            } else {
                path.strip_suffix("/main.go").map(str::to_string)
            }
        })
}

/// Plan for adding a component to the project in `dir`
///
/// The directory name stands in for the project name.
pub fn component_plan(
    registry: &Registry,
    user: &UserConfig,
    component_name: &str,
    dir: &Path,
) -> Result<Plan> {
    let component = registry.component(component_name)?;
    let project_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

    let variables = Variables::new(project_name)
        .module_prefix(&user.module_prefix)
        .license(user.license().display_name())
        .author(&user.author);
    Ok(Plan::from_blueprint(component, &variables))
}

/// Write a component's files into `dir`
pub async fn add_component(
    registry: &Registry,
    user: &UserConfig,
    component_name: &str,
    dir: &Path,
    options: Options,
) -> Result<Report> {
    let plan = component_plan(registry, user, component_name, dir)?;
    generator::generate(dir, &plan, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config(template: &str) -> ProjectConfig {
        ProjectConfig {
            project_name: "demo".to_string(),
            template_name: template.to_string(),
            license: License::Mit,
            include_docker: false,
            init_git: true,
        }
    }

    #[test]
    fn test_validate_project_name() {
        assert_eq!(validate_project_name("  svc ").unwrap(), "svc");
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("   ").is_err());
        assert!(validate_project_name(".").is_err());
        assert!(validate_project_name("..").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
        assert!(validate_project_name(&"x".repeat(MAX_PROJECT_NAME_LEN)).is_ok());
        assert!(validate_project_name(&"x".repeat(MAX_PROJECT_NAME_LEN + 1)).is_err());
        assert!(validate_project_name("---").is_err());
        assert!(validate_project_name("日本").is_err());
        assert_eq!(validate_project_name("日本-api").unwrap(), "日本-api");
    }

    fn wizard_answer() -> ProjectConfig {
        ProjectConfig {
            project_name: "svc".to_string(),
            template_name: "go-cli".to_string(),
            license: License::Apache2,
            include_docker: true,
            init_git: true,
        }
    }

    #[test]
    fn test_from_args_defaults() {
        let user = UserConfig::default();
        let project = ProjectConfig::from_args("svc", "go-api", &InitArgs::default(), &user).unwrap();
        assert_eq!(
            project,
            ProjectConfig {
                project_name: "svc".to_string(),
                template_name: "go-api".to_string(),
                license: License::Mit,
                include_docker: false,
                init_git: true,
            }
        );

        let project = ProjectConfig::from_args("  ", "go-api", &InitArgs::default(), &user).unwrap();
        assert_eq!(project.project_name, DEFAULT_PROJECT_NAME);

        let err = ProjectConfig::from_args("a/b", "go-api", &InitArgs::default(), &user).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidProjectName(_)));
    }

    #[test]
    fn test_from_args_license_and_docker() {
        let user = UserConfig::default();
        let args = InitArgs {
            license: Some(License::Gpl3),
            docker: true,
            ..Default::default()
        };
        let project = ProjectConfig::from_args("svc", "go-api", &args, &user).unwrap();
        assert_eq!(project.license, License::Gpl3);
        assert!(project.include_docker);

        let args = InitArgs {
            license: Some(License::None),
            ..Default::default()
        };
        let project = ProjectConfig::from_args("svc", "go-api", &args, &user).unwrap();
        assert_eq!(project.license, License::None);
        assert!(!project.include_docker);
    }

    #[test]
    fn test_from_args_git_rule() {
        for (auto_git, no_git, expected) in [
            (true, false, true),
            (true, true, false),
            (false, false, false),
            (false, true, false),
        ] {
            let user = UserConfig {
                auto_git,
                ..Default::default()
            };
            let args = InitArgs {
                no_git,
                ..Default::default()
            };
            let project = ProjectConfig::from_args("svc", "go-api", &args, &user).unwrap();
            assert_eq!(project.init_git, expected, "auto_git={} no_git={}", auto_git, no_git);
        }
    }

    #[test]
    fn test_with_overrides_only_applies_no_git() {
        let args = InitArgs {
            license: Some(License::Mit),
            docker: false,
            no_git: true,
            ..Default::default()
        };
        let project = wizard_answer().with_overrides(&args);
        assert!(!project.init_git);
        assert_eq!(project.license, License::Apache2);
        assert!(project.include_docker);

        let project = wizard_answer().with_overrides(&InitArgs::default());
        assert_eq!(project, wizard_answer());

        let declined = ProjectConfig {
            init_git: false,
            ..wizard_answer()
        };
        assert_eq!(declined.clone().with_overrides(&InitArgs::default()), declined);
    }

    #[test]
    fn test_new_uses_user_defaults() {
        let user = UserConfig {
            default_license: "GPL 3.0".to_string(),
            auto_git: false,
            ..Default::default()
        };
        let project = ProjectConfig::new("svc", "go-api", &user);
        assert_eq!(project.license, License::Gpl3);
        assert!(!project.include_docker);
        assert!(!project.init_git);
    }

    #[test]
    fn test_plan_adds_license_file() {
        let registry = Registry::builtin();
        let user = UserConfig {
            author: "Ada".to_string(),
            ..Default::default()
        };
        let plan = config("go-cli").plan(&registry, &user).unwrap();

        let license = plan.files.iter().find(|f| f.path == "LICENSE").unwrap();
        assert!(license.content.contains("MIT License"));
        assert!(license.content.contains("Ada"));
        assert!(!license.content.contains("{{"));
    }

    #[test]
    fn test_plan_without_license() {
        let registry = Registry::builtin();
        let mut project = config("go-cli");
        project.license = License::None;
        let plan = project.plan(&registry, &UserConfig::default()).unwrap();
        assert!(!plan.contains_file("LICENSE"));
    }

    #[test]
    fn test_plan_docker_addon() {
        let registry = Registry::builtin();
        let mut project = config("go-api");
        assert!(!project
            .plan(&registry, &UserConfig::default())
            .unwrap()
            .contains_file("Dockerfile"));

        project.include_docker = true;
        let plan = project.plan(&registry, &UserConfig::default()).unwrap();
        assert!(plan.contains_file("Dockerfile"));
    }

    #[test]
    fn test_plan_docker_keeps_template_dockerfile() {
        let registry = Registry::builtin();
        let mut project = config("go-microservice");
        project.include_docker = true;
        let plan = project.plan(&registry, &UserConfig::default()).unwrap();

        let dockerfiles: Vec<_> = plan.files.iter().filter(|f| f.path == "Dockerfile").collect();
        assert_eq!(dockerfiles.len(), 1);
        let template = registry.template("go-microservice").unwrap();
        let own = template.files.iter().find(|f| f.path == "Dockerfile").unwrap();
        assert_eq!(dockerfiles[0].content, project.variables(&UserConfig::default()).render(&own.content));
    }

    #[test]
    fn test_plan_uses_module_prefix() {
        let registry = Registry::builtin();
        let user = UserConfig {
            module_prefix: "gitlab.com/team".to_string(),
            ..Default::default()
        };
        let plan = config("go-api").plan(&registry, &user).unwrap();
        let go_mod = plan.files.iter().find(|f| f.path == "go.mod").unwrap();
        assert!(go_mod.content.starts_with("module gitlab.com/team/demo"));
    }

    #[test]
    fn test_plan_unknown_template() {
        let registry = Registry::builtin();
        let err = config("nope").plan(&registry, &UserConfig::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_next_steps() {
        let registry = Registry::builtin();
        let project = config("go-api");

        let steps = project.next_steps(registry.template("go-api").unwrap(), true);
        assert_eq!(steps, vec!["cd demo", "go mod tidy", "go run ./cmd/api"]);

        let steps = project.next_steps(registry.template("go-cli").unwrap(), false);
        assert_eq!(steps, vec!["cd demo", "go mod tidy", "go run .", "git init"]);

        let steps = project.next_steps(registry.template("go-lib").unwrap(), true);
        assert_eq!(steps, vec!["cd demo", "go mod tidy", "go test ./..."]);

        let steps = project.next_steps(registry.template("fullstack").unwrap(), true);
        assert_eq!(steps, vec!["cd demo", "make install", "make dev"]);

        let steps = project.next_steps(registry.template("learn-testing").unwrap(), true);
        assert_eq!(steps, vec!["cd demo", "go mod tidy", "go test ./..."]);
    }

    #[test]
    fn test_component_plan_uses_directory_name() {
        let registry = Registry::builtin();
        let plan = component_plan(
            &registry,
            &UserConfig::default(),
            "readme",
            Path::new("/work/billing-api"),
        )
        .unwrap();
        let readme = &plan.files[0];
        assert!(readme.content.contains("billing-api"));
        assert!(plan.directories.is_empty());
    }

    #[tokio::test]
    async fn test_add_component_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::builtin();
        let report = add_component(
            &registry,
            &UserConfig::default(),
            "middleware",
            dir.path(),
            Options::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.files_written(), 4);
        assert!(dir.path().join("internal/middleware/cors.go").is_file());
    }

    #[tokio::test]
    async fn test_add_component_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Makefile"), "all:\n").unwrap();
        let registry = Registry::builtin();

        let err = add_component(
            &registry,
            &UserConfig::default(),
            "makefile",
            dir.path(),
            Options::default(),
        )
        .await
        .unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(fs::read_to_string(dir.path().join("Makefile")).unwrap(), "all:\n");

        let err = add_component(
            &registry,
            &UserConfig::default(),
            "nope",
            dir.path(),
            Options::default(),
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
