//! Built-in components for `scaffold add`

use super::{Component, TemplateFile};
use std::borrow::Cow;

macro_rules! asset {
    ($path:literal) => {
        include_str!(concat!("../../assets/", $path))
    };
}

fn component(name: &'static str, description: &'static str, files: Vec<TemplateFile>) -> Component {
    Component {
        name: Cow::Borrowed(name),
        description: Cow::Borrowed(description),
        files,
    }
}

/// Every built-in component, in no particular order
pub fn components() -> Vec<Component> {
    vec![
        component(
            "dockerfile",
            "Multi-stage Dockerfile for Go applications",
            vec![TemplateFile::embedded(
                "Dockerfile",
                asset!("components/Dockerfile.tmpl"),
            )],
        ),
        component(
            "makefile",
            "Common Makefile targets (build, test, lint, run)",
            vec![TemplateFile::embedded(
                "Makefile",
                asset!("components/Makefile.tmpl"),
            )],
        ),
        component(
            "github-actions",
            "GitHub Actions CI workflow (test, lint, build)",
            vec![TemplateFile::embedded(
                ".github/workflows/ci.yml",
                asset!("components/ci.yml.tmpl"),
            )],
        ),
        component(
            "middleware",
            "HTTP middleware collection (logging, CORS, recovery, rate-limit)",
            vec![
                TemplateFile::embedded(
                    "internal/middleware/logging.go",
                    asset!("components/middleware/logging.go.tmpl"),
                ),
                TemplateFile::embedded(
                    "internal/middleware/cors.go",
                    asset!("components/middleware/cors.go.tmpl"),
                ),
                TemplateFile::embedded(
                    "internal/middleware/recovery.go",
                    asset!("components/middleware/recovery.go.tmpl"),
                ),
                TemplateFile::embedded(
                    "internal/middleware/ratelimit.go",
                    asset!("components/middleware/ratelimit.go.tmpl"),
                ),
            ],
        ),
        component(
            "config",
            "Environment-based configuration with defaults",
            vec![TemplateFile::embedded(
                "internal/config/config.go",
                asset!("components/config.go.tmpl"),
            )],
        ),
        component(
            "docker-compose",
            "Docker Compose with PostgreSQL, Redis, and app service",
            vec![TemplateFile::embedded(
                "docker-compose.yml",
                asset!("components/docker-compose.yml.tmpl"),
            )],
        ),
        component(
            "gitignore",
            "Go-specific .gitignore file",
            vec![TemplateFile::embedded(
                ".gitignore",
                asset!("shared/gitignore-go.tmpl"),
            )],
        ),
        component(
            "readme",
            "Project README template with badges and sections",
            vec![TemplateFile::embedded(
                "README.md",
                asset!("components/README.md.tmpl"),
            )],
        ),
    ]
}
