//! Template and component definitions
//!
//! This module provides:
//! - Definition types (Template, Component, TemplateFile) and the `Blueprint` trait
//! - The read-only name lookup table (`Registry`)
//! - Built-in templates and components embedded at compile time
//! - Custom templates loaded from `template.yaml` manifests
//! - Placeholder substitution and license texts

pub mod builtin;
pub mod components;
pub mod license;
pub mod manifest;
pub mod placeholders;
pub mod registry;

use std::borrow::Cow;
use std::fmt;

pub use license::License;
pub use manifest::{load_custom_templates, TemplateManifest};
pub use placeholders::{Placeholder, Variables};
pub use registry::Registry;

/// A single file to be generated, relative to the project root
///
/// Both the path and the content may contain placeholder tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: Cow<'static, str>,
    pub content: Cow<'static, str>,
}

impl TemplateFile {
    /// File whose path and content are compiled into the binary
    pub const fn embedded(path: &'static str, content: &'static str) -> Self {
        Self {
            path: Cow::Borrowed(path),
            content: Cow::Borrowed(content),
        }
    }

    /// File read at runtime (custom templates)
    pub fn owned(path: String, content: String) -> Self {
        Self {
            path: Cow::Owned(path),
            content: Cow::Owned(content),
        }
    }
}

/// Grouping used by `scaffold list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Project,
    Fullstack,
    Learning,
    Skill,
    Custom,
}

impl Category {
    /// Display order for listings
    pub const ALL: [Category; 5] = [
        Category::Project,
        Category::Fullstack,
        Category::Learning,
        Category::Skill,
        Category::Custom,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Project => "Project",
            Category::Fullstack => "Fullstack",
            Category::Learning => "Learning",
            Category::Skill => "Skill",
            Category::Custom => "Custom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Named bundle of directories and files used to scaffold a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub category: Category,
    pub directories: Vec<Cow<'static, str>>,
    pub files: Vec<TemplateFile>,
}

/// Named bundle of files added into an already existing project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub files: Vec<TemplateFile>,
}

/// Anything the generator can render into a plan
pub trait Blueprint {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Directories to pre-create, relative to the target root
    fn directories(&self) -> &[Cow<'static, str>];

    fn files(&self) -> &[TemplateFile];
}

impl Blueprint for Template {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn directories(&self) -> &[Cow<'static, str>] {
        &self.directories
    }

    fn files(&self) -> &[TemplateFile] {
        &self.files
    }
}

impl Blueprint for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn directories(&self) -> &[Cow<'static, str>] {
        &[]
    }

    fn files(&self) -> &[TemplateFile] {
        &self.files
    }
}
