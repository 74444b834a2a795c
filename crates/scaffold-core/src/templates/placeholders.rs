//! `{{token}}` substitution for template paths and contents

use chrono::Datelike;

/// Default `module_prefix` when the user has not configured one
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/user";

/// Every token a template may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ProjectName,
    PackageName,
    ModuleName,
    Description,
    License,
    Author,
    Year,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::ProjectName,
        Placeholder::PackageName,
        Placeholder::ModuleName,
        Placeholder::Description,
        Placeholder::License,
        Placeholder::Author,
        Placeholder::Year,
    ];

    /// Name between the braces
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::ProjectName => "project_name",
            Placeholder::PackageName => "package_name",
            Placeholder::ModuleName => "module_name",
            Placeholder::Description => "description",
            Placeholder::License => "license",
            Placeholder::Author => "author",
            Placeholder::Year => "year",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }
}

/// Concrete values for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variables {
    pub project_name: String,
    pub module_prefix: String,
    pub description: String,
    pub license: String,
    pub author: String,
    pub year: i32,
}

impl Variables {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            module_prefix: DEFAULT_MODULE_PREFIX.to_string(),
            description: String::new(),
            license: String::new(),
            author: String::new(),
            year: chrono::Local::now().year(),
        }
    }

    pub fn module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.module_prefix = prefix.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn package_name(&self) -> String {
        package_name(&self.project_name)
    }

    pub fn module_name(&self) -> String {
        let prefix = self.module_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            self.project_name.clone()
        } else {
            format!("{}/{}", prefix, self.project_name)
        }
    }

    pub fn value(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::ProjectName => self.project_name.clone(),
            Placeholder::PackageName => self.package_name(),
            Placeholder::ModuleName => self.module_name(),
            Placeholder::Description => self.description.clone(),
            Placeholder::License => self.license.clone(),
            Placeholder::Author => self.author.clone(),
            Placeholder::Year => self.year.to_string(),
        }
    }

    /// Substitute every known token in one left-to-right pass
    ///
    /// Unknown tokens and an unterminated `{{` are copied through unchanged.
    /// Substituted text is never scanned again.
    pub fn render(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let token = &after_open[..end];
            if token.contains("{{") {
                // Stray opener; the real token starts later
                out.push_str("{{");
                rest = after_open;
                continue;
            }
            match Placeholder::from_token(token.trim()) {
                Some(placeholder) => out.push_str(&self.value(placeholder)),
                None => {
                    out.push_str("{{");
                    out.push_str(token);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// Used when a project name has no ASCII letters or digits
pub const FALLBACK_PACKAGE_NAME: &str = "app";

/// Lower-cased project name with everything but ASCII letters and digits removed
pub fn package_name(project_name: &str) -> String {
    let name: String = project_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if name.is_empty() {
        FALLBACK_PACKAGE_NAME.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> Variables {
        Variables::new("My-App")
            .module_prefix("github.com/acme")
            .description("Demo")
            .license("MIT")
            .author("Ada")
            .year(2024)
    }

    #[test]
    fn test_render_all_tokens() {
        let rendered = vars().render(
            "{{project_name}} {{package_name}} {{module_name}} {{description}} {{license}} {{author}} {{year}}",
        );
        assert_eq!(
            rendered,
            "My-App myapp github.com/acme/My-App Demo MIT Ada 2024"
        );
    }

    #[test]
    fn test_render_tolerates_inner_whitespace() {
        assert_eq!(vars().render("{{ project_name }}"), "My-App");
    }

    #[test]
    fn test_unknown_tokens_kept() {
        assert_eq!(vars().render("a {{unknown}} b"), "a {{unknown}} b");
        assert_eq!(vars().render("{{.ProjectName}}"), "{{.ProjectName}}");
        assert_eq!(vars().render("{{}}"), "{{}}");
    }

    #[test]
    fn test_unterminated_token_kept() {
        assert_eq!(vars().render("x {{project_name"), "x {{project_name");
        assert_eq!(
            vars().render("{{year}} then {{"),
            "2024 then {{"
        );
    }

    #[test]
    fn test_stray_opener_before_token() {
        assert_eq!(vars().render("a {{ b {{project_name}}"), "a {{ b My-App");
        assert_eq!(vars().render("{{{{year}}"), "{{2024");
        assert_eq!(
            vars().render("{{ {{unknown}} {{author}}"),
            "{{ {{unknown}} Ada"
        );
    }

    #[test]
    fn test_substituted_values_not_rescanned() {
        let vars = Variables::new("{{author}}").author("Ada");
        assert_eq!(vars.render("{{project_name}}"), "{{author}}");
    }

    #[test]
    fn test_render_paths() {
        assert_eq!(vars().render("{{project_name}}_test.go"), "My-App_test.go");
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("my-project"), "myproject");
        assert_eq!(package_name("Hello_World 2"), "helloworld2");
        assert_eq!(package_name("---"), "app");
        assert_eq!(package_name("日本"), "app");
    }

    #[test]
    fn test_module_name_defaults() {
        let vars = Variables::new("svc");
        assert_eq!(vars.module_name(), "github.com/user/svc");
        assert_eq!(vars.clone().module_prefix("").module_name(), "svc");
        assert_eq!(
            vars.module_prefix("example.com/org/").module_name(),
            "example.com/org/svc"
        );
    }

    #[test]
    fn test_token_round_trip() {
        for placeholder in Placeholder::ALL {
            assert_eq!(Placeholder::from_token(placeholder.token()), Some(placeholder));
        }
        assert_eq!(Placeholder::from_token("name"), None);
    }
}
