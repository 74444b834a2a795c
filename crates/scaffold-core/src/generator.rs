//! Rendering blueprints into plans and writing them to disk

use crate::error::{Result, ScaffoldError};
use crate::templates::{Blueprint, Variables};
use std::path::{Path, PathBuf};
use tokio::fs;

/// One file of a plan, with placeholders already substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: String,
    pub content: String,
}

/// Directories and files to create under a target root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub directories: Vec<String>,
    pub files: Vec<PlannedFile>,
}

impl Plan {
    /// Substitute `variables` into every path and content of `blueprint`
    pub fn from_blueprint(blueprint: &impl Blueprint, variables: &Variables) -> Self {
        let variables = variables.clone().description(blueprint.description());

        Self {
            directories: blueprint
                .directories()
                .iter()
                .map(|dir| variables.render(dir))
                .collect(),
            files: blueprint
                .files()
                .iter()
                .map(|file| PlannedFile {
                    path: variables.render(&file.path),
                    content: variables.render(&file.content),
                })
                .collect(),
        }
    }

    /// Append what `other` adds; paths already planned here are kept as they are
    pub fn merge(&mut self, other: Plan) {
        for dir in other.directories {
            if !self.directories.contains(&dir) {
                self.directories.push(dir);
            }
        }
        for file in other.files {
            if !self.contains_file(&file.path) {
                self.files.push(file);
            }
        }
    }

    /// Add a file unless one with the same path is already planned
    pub fn push_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        if !self.contains_file(&path) {
            self.files.push(PlannedFile {
                path,
                content: content.into(),
            });
        }
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }
}

/// Generation switches from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub dry_run: bool,
    pub force: bool,
}

/// Something the generator did, or would do in a dry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateDir(PathBuf),
    Write(PathBuf),
    Overwrite(PathBuf),
}

impl Action {
    pub fn path(&self) -> &Path {
        match self {
            Action::CreateDir(path) | Action::Write(path) | Action::Overwrite(path) => path,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Action::CreateDir(_) => "create",
            Action::Write(_) => "write",
            Action::Overwrite(_) => "overwrite",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub root: PathBuf,
    pub dry_run: bool,
    pub actions: Vec<Action>,
}

impl Report {
    pub fn files_written(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::Write(_) | Action::Overwrite(_)))
            .count()
    }

    /// Action paths relative to the root, for display
    pub fn relative_paths(&self) -> impl Iterator<Item = (&'static str, &Path)> + '_ {
        self.actions.iter().map(|action| {
            let path = action.path();
            (action.verb(), path.strip_prefix(&self.root).unwrap_or(path))
        })
    }
}

/// Write `plan` under `root`
///
/// Files are checked and written one at a time in plan order. An existing file
/// without `force` stops the run with `AlreadyExists`; files written before it
/// are left in place. A dry run touches nothing, not even to check existence.
pub async fn generate(root: &Path, plan: &Plan, options: Options) -> Result<Report> {
    let mut report = Report {
        root: root.to_path_buf(),
        dry_run: options.dry_run,
        actions: Vec::new(),
    };

    if options.dry_run {
        for dir in &plan.directories {
            report.actions.push(Action::CreateDir(root.join(dir)));
        }
        for file in &plan.files {
            report.actions.push(Action::Write(root.join(&file.path)));
        }
        return Ok(report);
    }

    fs::create_dir_all(root)
        .await
        .map_err(|e| ScaffoldError::io("create directory", root, e))?;

    for dir in &plan.directories {
        let path = root.join(dir);
        let existed = fs::metadata(&path).await.is_ok();
        fs::create_dir_all(&path)
            .await
            .map_err(|e| ScaffoldError::io("create directory", &path, e))?;
        if !existed {
            report.actions.push(Action::CreateDir(path));
        }
    }

    for file in &plan.files {
        let target = root.join(&file.path);
        let exists = fs::metadata(&target).await.is_ok();
        if exists && !options.force {
            return Err(ScaffoldError::AlreadyExists(target));
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::io("create directory", parent, e))?;
        }
        fs::write(&target, &file.content)
            .await
            .map_err(|e| ScaffoldError::io("write", &target, e))?;

        report.actions.push(if exists {
            Action::Overwrite(target)
        } else {
            Action::Write(target)
        });
    }

    Ok(report)
}
