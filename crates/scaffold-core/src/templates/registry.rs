//! Name lookup for templates and components

use super::{builtin, components, manifest, Component, Template};
use crate::error::{Result, ScaffoldError};
use std::collections::HashMap;
use std::path::Path;

/// Immutable table of every known template and component
///
/// Built once in `main` and passed by reference to the commands.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    templates: HashMap<String, Template>,
    components: HashMap<String, Component>,
}

impl Registry {
    /// Registry holding only the definitions compiled into the binary
    pub fn builtin() -> Self {
        let templates = builtin::templates()
            .into_iter()
            .map(|t| (t.name.to_string(), t))
            .collect();
        let components = components::components()
            .into_iter()
            .map(|c| (c.name.to_string(), c))
            .collect();

        Self {
            templates,
            components,
        }
    }

    /// Built-in registry extended with custom templates from `dir`
    ///
    /// Returns the registry together with any warnings produced while loading.
    pub fn with_custom_dir(dir: &Path) -> (Self, Vec<String>) {
        let mut registry = Self::builtin();
        let warnings = registry.load_custom(dir);
        (registry, warnings)
    }

    /// Add custom templates found under `dir`. Built-in names win on collision.
    pub fn load_custom(&mut self, dir: &Path) -> Vec<String> {
        let (loaded, mut warnings) = manifest::load_custom_templates(dir);

        for template in loaded {
            if self.templates.contains_key(template.name.as_ref()) {
                warnings.push(format!(
                    "Custom template '{}' skipped: a built-in template has the same name",
                    template.name
                ));
                continue;
            }
            self.templates.insert(template.name.to_string(), template);
        }

        warnings
    }

    pub fn template(&self, name: &str) -> Result<&Template> {
        self.templates
            .get(name)
            .ok_or_else(|| ScaffoldError::template_not_found(name))
    }

    /// All templates sorted by name
    pub fn templates(&self) -> Vec<&Template> {
        let mut all: Vec<&Template> = self.templates.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn component(&self, name: &str) -> Result<&Component> {
        self.components
            .get(name)
            .ok_or_else(|| ScaffoldError::component_not_found(name))
    }

    /// All components sorted by name
    pub fn components(&self) -> Vec<&Component> {
        let mut all: Vec<&Component> = self.components.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}
