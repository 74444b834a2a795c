//! Custom template manifest types and loading
//!
//! A custom template is a directory under `~/.scaffold/templates/` holding a
//! `template.yaml` manifest next to the files it ships.

use super::{Category, Template, TemplateFile};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Component as PathComponent, Path};
use walkdir::WalkDir;

/// Manifest file expected in every custom template directory
pub const MANIFEST_FILE: &str = "template.yaml";

/// Per-template manifest (`<templates dir>/<name>/template.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name; defaults to the directory name
    #[serde(default)]
    pub name: Option<String>,

    /// Description of what the template provides
    pub description: String,

    /// Directories to create even when no file lives in them
    #[serde(default)]
    pub directories: Vec<String>,

    /// Explicit list of files to copy. Empty means every file in the directory.
    #[serde(default)]
    pub files: Vec<String>,
}

impl TemplateManifest {
    pub fn parse(yaml: &str) -> Result<Self> {
        let manifest: TemplateManifest =
            serde_yaml::from_str(yaml).context("Failed to parse template manifest")?;
        if manifest.description.trim().is_empty() {
            bail!("description must not be empty");
        }
        Ok(manifest)
    }
}

/// Load every custom template under `dir`
///
/// Returns the templates that loaded plus one warning per directory that was
/// skipped. A missing `dir` yields neither.
pub fn load_custom_templates(dir: &Path) -> (Vec<Template>, Vec<String>) {
    let mut templates = Vec::new();
    let mut warnings = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return (templates, warnings),
    };

    let mut template_dirs: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    template_dirs.sort();

    for template_dir in template_dirs {
        if !template_dir.join(MANIFEST_FILE).is_file() {
            continue;
        }
        match load_template(&template_dir) {
            Ok(template) => templates.push(template),
            Err(e) => warnings.push(format!(
                "Skipping custom template {}: {:#}",
                template_dir.display(),
                e
            )),
        }
    }

    (templates, warnings)
}

/// Load a single custom template directory
pub fn load_template(template_dir: &Path) -> Result<Template> {
    let manifest_path = template_dir.join(MANIFEST_FILE);
    let yaml = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let manifest = TemplateManifest::parse(&yaml)?;

    let name = match manifest.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => template_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .context("Template directory has no name")?,
    };

    let paths = if manifest.files.is_empty() {
        discover_files(template_dir)?
    } else {
        manifest.files.clone()
    };
    if paths.is_empty() {
        bail!("template has no files");
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        check_relative(&path)?;
        let source = template_dir.join(&path);
        let content = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read {}", source.display()))?;
        if content.is_empty() {
            bail!("{} is empty", path);
        }
        files.push(TemplateFile::owned(path, content));
    }

    let directories = if manifest.directories.is_empty() {
        parent_directories(&files)
    } else {
        for dir in &manifest.directories {
            check_relative(dir)?;
        }
        manifest.directories
    };

    Ok(Template {
        name: Cow::Owned(name),
        description: Cow::Owned(manifest.description),
        category: Category::Custom,
        directories: directories.into_iter().map(Cow::Owned).collect(),
        files,
    })
}

/// Every file under the template directory except the manifest itself
fn discover_files(template_dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(template_dir).sort_by_file_name() {
        let entry = entry.context("Failed to walk template directory")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .context("Walked outside the template directory")?;
        if relative == Path::new(MANIFEST_FILE) {
            continue;
        }

        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        files.push(parts.join("/"));
    }

    Ok(files)
}

/// Reject paths that would land outside the generated project
fn check_relative(path: &str) -> Result<()> {
    let p = Path::new(path);
    if path.is_empty() || p.is_absolute() || path.contains('\\') {
        bail!("'{}' must be a relative forward-slash path", path);
    }
    if p.components().any(|c| matches!(c, PathComponent::ParentDir)) {
        bail!("'{}' must not contain '..'", path);
    }
    Ok(())
}

fn parent_directories(files: &[TemplateFile]) -> Vec<String> {
    let mut dirs: Vec<String> = files
        .iter()
        .filter_map(|f| f.path.rsplit_once('/').map(|(dir, _)| dir.to_string()))
        .collect();
    dirs.sort();
    dirs.dedup();
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, path: &str, content: &str) {
        let full = dir.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    #[test]
    fn test_parse_manifest_defaults() {
        let manifest = TemplateManifest::parse("description: Minimal\n").unwrap();
        assert!(manifest.name.is_none());
        assert_eq!(manifest.description, "Minimal");
        assert!(manifest.directories.is_empty());
        assert!(manifest.files.is_empty());
    }

    #[test]
    fn test_parse_manifest_requires_description() {
        assert!(TemplateManifest::parse("name: x\n").is_err());
        assert!(TemplateManifest::parse("description: ''\n").is_err());
        assert!(TemplateManifest::parse("description: [unclosed").is_err());
    }

    #[test]
    fn test_load_template_discovers_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("svc");
        write(&root, MANIFEST_FILE, "description: Service\n");
        write(&root, "cmd/main.go", "package main\n");
        write(&root, "go.mod", "module {{module_name}}\n");

        let template = load_template(&root).unwrap();
        assert_eq!(template.name, "svc");
        assert_eq!(template.category, Category::Custom);

        let paths: Vec<&str> = template.files.iter().map(|f| &*f.path).collect();
        assert_eq!(paths, vec!["cmd/main.go", "go.mod"]);
        assert_eq!(template.directories, vec![Cow::Borrowed("cmd")]);
    }

    #[test]
    fn test_load_template_uses_explicit_files_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("folder");
        write(
            &root,
            MANIFEST_FILE,
            "name: renamed\ndescription: D\ndirectories: [pkg, cmd]\nfiles: [main.go]\n",
        );
        write(&root, "main.go", "package main\n");
        write(&root, "ignored.txt", "not listed\n");

        let template = load_template(&root).unwrap();
        assert_eq!(template.name, "renamed");
        assert_eq!(template.files.len(), 1);
        assert_eq!(template.directories.len(), 2);
    }

    #[test]
    fn test_load_template_rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("bad");
        write(&root, MANIFEST_FILE, "description: D\nfiles: [../secret]\n");
        assert!(load_template(&root).is_err());
    }

    #[test]
    fn test_load_custom_templates_skips_bad_entries() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("good"), MANIFEST_FILE, "description: Good\n");
        write(&dir.path().join("good"), "main.go", "package main\n");
        write(&dir.path().join("broken"), MANIFEST_FILE, ": not yaml : [");
        write(&dir.path().join("plain"), "README.md", "no manifest here\n");
        write(&dir.path().join("missing"), MANIFEST_FILE, "description: D\nfiles: [gone.go]\n");

        let (templates, warnings) = load_custom_templates(dir.path());
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "good");
        assert_eq!(warnings.len(), 2, "{:?}", warnings);
    }

    #[test]
    fn test_load_custom_templates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let (templates, warnings) = load_custom_templates(&dir.path().join("absent"));
        assert!(templates.is_empty());
        assert!(warnings.is_empty());
    }
}
