//! Built-in project templates
//!
//! File contents live under `assets/` and are embedded with `include_str!`,
//! so the registry needs no filesystem access at runtime.

use super::{Category, Template, TemplateFile};
use std::borrow::Cow;

macro_rules! asset {
    ($path:literal) => {
        include_str!(concat!("../../assets/", $path))
    };
}

const README: &str = asset!("shared/README.md.tmpl");
const GITIGNORE_GO: &str = asset!("shared/gitignore-go.tmpl");
const GO_MOD: &str = asset!("shared/go.mod.tmpl");

fn template(
    name: &'static str,
    description: &'static str,
    category: Category,
    directories: &[&'static str],
    files: Vec<TemplateFile>,
) -> Template {
    Template {
        name: Cow::Borrowed(name),
        description: Cow::Borrowed(description),
        category,
        directories: directories.iter().map(|d| Cow::Borrowed(*d)).collect(),
        files,
    }
}

const fn file(path: &'static str, content: &'static str) -> TemplateFile {
    TemplateFile::embedded(path, content)
}

/// Every built-in template, in no particular order
pub fn templates() -> Vec<Template> {
    vec![
        go_api(),
        go_cli(),
        go_lib(),
        go_grpc(),
        go_worker(),
        go_microservice(),
        go_tui(),
        go_websocket(),
        go_graphql(),
        go_lambda(),
        go_cron(),
        go_auth(),
        go_kafka(),
        go_redis(),
        go_clean_arch(),
        go_monorepo(),
        fullstack(),
        learn_concurrency(),
        learn_testing(),
        learn_generics(),
        learn_dsa(),
        learn_context(),
        learn_http(),
        learn_error_handling(),
        learn_interfaces(),
        learn_design_patterns(),
        challenge_thirty_days(),
        mini_project(),
        refactoring_exercise(),
        code_review_exercise(),
    ]
}

fn go_api() -> Template {
    template(
        "go-api",
        "Go REST API with clean architecture",
        Category::Project,
        &[
            "cmd/api",
            "internal/handler",
            "internal/service",
            "internal/repository",
            "internal/model",
            "pkg/config",
        ],
        vec![
            file("cmd/api/main.go", asset!("templates/go-api/cmd/api/main.go.tmpl")),
            file(
                "internal/handler/handler.go",
                asset!("templates/go-api/internal/handler/handler.go.tmpl"),
            ),
            file(
                "internal/service/service.go",
                asset!("templates/go-api/internal/service/service.go.tmpl"),
            ),
            file(
                "internal/repository/repository.go",
                asset!("templates/go-api/internal/repository/repository.go.tmpl"),
            ),
            file(
                "internal/model/model.go",
                asset!("templates/go-api/internal/model/model.go.tmpl"),
            ),
            file(
                "pkg/config/config.go",
                asset!("templates/go-api/pkg/config/config.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_cli() -> Template {
    template(
        "go-cli",
        "Go CLI application with Cobra",
        Category::Project,
        &["cmd", "internal", "pkg"],
        vec![
            file("main.go", asset!("templates/go-cli/main.go.tmpl")),
            file("cmd/root.go", asset!("templates/go-cli/cmd/root.go.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_lib() -> Template {
    template(
        "go-lib",
        "Go library/package",
        Category::Project,
        &["internal", "examples"],
        vec![
            file("{{project_name}}.go", asset!("templates/go-lib/lib.go.tmpl")),
            file(
                "{{project_name}}_test.go",
                asset!("templates/go-lib/lib_test.go.tmpl"),
            ),
            file(
                "examples/main.go",
                asset!("templates/go-lib/examples/main.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_grpc() -> Template {
    template(
        "go-grpc",
        "Go gRPC service template",
        Category::Project,
        &["cmd/server", "cmd/client", "internal/service", "proto"],
        vec![
            file(
                "cmd/server/main.go",
                asset!("templates/go-grpc/cmd/server/main.go.tmpl"),
            ),
            file(
                "cmd/client/main.go",
                asset!("templates/go-grpc/cmd/client/main.go.tmpl"),
            ),
            file(
                "proto/service.proto",
                asset!("templates/go-grpc/proto/service.proto.tmpl"),
            ),
            file("Makefile", asset!("templates/go-grpc/Makefile.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_worker() -> Template {
    template(
        "go-worker",
        "Background worker with job queue",
        Category::Project,
        &["cmd/worker", "internal/job", "internal/queue"],
        vec![
            file(
                "cmd/worker/main.go",
                asset!("templates/go-worker/cmd/worker/main.go.tmpl"),
            ),
            file(
                "internal/job/job.go",
                asset!("templates/go-worker/internal/job/job.go.tmpl"),
            ),
            file(
                "internal/queue/queue.go",
                asset!("templates/go-worker/internal/queue/queue.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_microservice() -> Template {
    template(
        "go-microservice",
        "Microservice with health check, metrics & graceful shutdown",
        Category::Project,
        &[
            "cmd/server",
            "internal/handler",
            "internal/middleware",
            "internal/health",
        ],
        vec![
            file(
                "cmd/server/main.go",
                asset!("templates/go-microservice/cmd/server/main.go.tmpl"),
            ),
            file(
                "internal/handler/handler.go",
                asset!("templates/go-microservice/internal/handler/handler.go.tmpl"),
            ),
            file(
                "internal/middleware/logging.go",
                asset!("templates/go-microservice/internal/middleware/logging.go.tmpl"),
            ),
            file(
                "internal/health/health.go",
                asset!("templates/go-microservice/internal/health/health.go.tmpl"),
            ),
            file("Dockerfile", asset!("templates/go-microservice/Dockerfile.tmpl")),
            file("Makefile", asset!("templates/go-microservice/Makefile.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn fullstack() -> Template {
    template(
        "fullstack",
        "Go backend + React/Vite/Bun/Tailwind frontend",
        Category::Fullstack,
        &[
            "backend/cmd/api",
            "backend/internal/handler",
            "backend/internal/middleware",
            "frontend/src/components",
            "frontend/src/hooks",
            "frontend/src/lib",
        ],
        vec![
            // Backend
            file(
                "backend/cmd/api/main.go",
                asset!("templates/fullstack/backend/cmd/api/main.go.tmpl"),
            ),
            file(
                "backend/internal/handler/handler.go",
                asset!("templates/fullstack/backend/internal/handler/handler.go.tmpl"),
            ),
            file(
                "backend/internal/middleware/cors.go",
                asset!("templates/fullstack/backend/internal/middleware/cors.go.tmpl"),
            ),
            file("backend/go.mod", asset!("templates/fullstack/backend/go.mod.tmpl")),
            // Frontend
            file(
                "frontend/package.json",
                asset!("templates/fullstack/frontend/package.json.tmpl"),
            ),
            file(
                "frontend/tsconfig.json",
                asset!("templates/fullstack/frontend/tsconfig.json.tmpl"),
            ),
            file(
                "frontend/tsconfig.node.json",
                asset!("templates/fullstack/frontend/tsconfig.node.json.tmpl"),
            ),
            file(
                "frontend/vite.config.ts",
                asset!("templates/fullstack/frontend/vite.config.ts.tmpl"),
            ),
            file(
                "frontend/tailwind.config.js",
                asset!("templates/fullstack/frontend/tailwind.config.js.tmpl"),
            ),
            file(
                "frontend/postcss.config.js",
                asset!("templates/fullstack/frontend/postcss.config.js.tmpl"),
            ),
            file(
                "frontend/index.html",
                asset!("templates/fullstack/frontend/index.html.tmpl"),
            ),
            file(
                "frontend/src/main.tsx",
                asset!("templates/fullstack/frontend/src/main.tsx.tmpl"),
            ),
            file(
                "frontend/src/App.tsx",
                asset!("templates/fullstack/frontend/src/App.tsx.tmpl"),
            ),
            file(
                "frontend/src/index.css",
                asset!("templates/fullstack/frontend/src/index.css.tmpl"),
            ),
            file(
                "frontend/src/lib/api.ts",
                asset!("templates/fullstack/frontend/src/lib/api.ts.tmpl"),
            ),
            file(
                "frontend/src/components/Header.tsx",
                asset!("templates/fullstack/frontend/src/components/Header.tsx.tmpl"),
            ),
            // Root
            file("README.md", asset!("templates/fullstack/README.md.tmpl")),
            file("Makefile", asset!("templates/fullstack/Makefile.tmpl")),
            file(".gitignore", asset!("templates/fullstack/gitignore.tmpl")),
        ],
    )
}

fn learn_concurrency() -> Template {
    template(
        "learn-concurrency",
        "Learn Go concurrency patterns",
        Category::Learning,
        &[
            "01-goroutines",
            "02-channels",
            "03-select",
            "04-sync",
            "05-patterns",
        ],
        vec![
            file("README.md", asset!("templates/learn-concurrency/README.md.tmpl")),
            file(
                "01-goroutines/main.go",
                asset!("templates/learn-concurrency/01-goroutines/main.go.tmpl"),
            ),
            file(
                "02-channels/main.go",
                asset!("templates/learn-concurrency/02-channels/main.go.tmpl"),
            ),
            file(
                "03-select/main.go",
                asset!("templates/learn-concurrency/03-select/main.go.tmpl"),
            ),
            file(
                "04-sync/main.go",
                asset!("templates/learn-concurrency/04-sync/main.go.tmpl"),
            ),
            file(
                "05-patterns/main.go",
                asset!("templates/learn-concurrency/05-patterns/main.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn learn_testing() -> Template {
    template(
        "learn-testing",
        "Learn Go testing techniques",
        Category::Learning,
        &["unit", "table", "mock", "benchmark"],
        vec![
            file("README.md", asset!("templates/learn-testing/README.md.tmpl")),
            file(
                "unit/calculator.go",
                asset!("templates/learn-testing/unit/calculator.go.tmpl"),
            ),
            file(
                "unit/calculator_test.go",
                asset!("templates/learn-testing/unit/calculator_test.go.tmpl"),
            ),
            file(
                "table/validator.go",
                asset!("templates/learn-testing/table/validator.go.tmpl"),
            ),
            file(
                "table/validator_test.go",
                asset!("templates/learn-testing/table/validator_test.go.tmpl"),
            ),
            file(
                "benchmark/string_builder.go",
                asset!("templates/learn-testing/benchmark/string_builder.go.tmpl"),
            ),
            file(
                "benchmark/string_builder_test.go",
                asset!("templates/learn-testing/benchmark/string_builder_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn learn_generics() -> Template {
    template(
        "learn-generics",
        "Learn Go generics (type parameters & constraints)",
        Category::Learning,
        &["basics", "constraints", "practical"],
        vec![
            file("README.md", asset!("templates/learn-generics/README.md.tmpl")),
            file(
                "basics/main.go",
                asset!("templates/learn-generics/basics/main.go.tmpl"),
            ),
            file(
                "basics/main_test.go",
                asset!("templates/learn-generics/basics/main_test.go.tmpl"),
            ),
            file(
                "constraints/main.go",
                asset!("templates/learn-generics/constraints/main.go.tmpl"),
            ),
            file(
                "constraints/main_test.go",
                asset!("templates/learn-generics/constraints/main_test.go.tmpl"),
            ),
            file(
                "practical/main.go",
                asset!("templates/learn-generics/practical/main.go.tmpl"),
            ),
            file(
                "practical/main_test.go",
                asset!("templates/learn-generics/practical/main_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn code_review_exercise() -> Template {
    template(
        "code-review-exercise",
        "Find bugs in code (code review practice)",
        Category::Skill,
        &[
            "bugs/01_off_by_one",
            "bugs/02_nil_pointer",
            "bugs/03_race_condition",
        ],
        vec![
            file(
                "README.md",
                asset!("templates/code-review-exercise/README.md.tmpl"),
            ),
            file(
                "bugs/01_off_by_one/buggy.go",
                asset!("templates/code-review-exercise/bugs/01_off_by_one/buggy.go.tmpl"),
            ),
            file(
                "bugs/01_off_by_one/buggy_test.go",
                asset!("templates/code-review-exercise/bugs/01_off_by_one/buggy_test.go.tmpl"),
            ),
            file(
                "bugs/02_nil_pointer/buggy.go",
                asset!("templates/code-review-exercise/bugs/02_nil_pointer/buggy.go.tmpl"),
            ),
            file(
                "bugs/02_nil_pointer/buggy_test.go",
                asset!("templates/code-review-exercise/bugs/02_nil_pointer/buggy_test.go.tmpl"),
            ),
            file(
                "bugs/03_race_condition/buggy.go",
                asset!("templates/code-review-exercise/bugs/03_race_condition/buggy.go.tmpl"),
            ),
            file(
                "bugs/03_race_condition/buggy_test.go",
                asset!("templates/code-review-exercise/bugs/03_race_condition/buggy_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_tui() -> Template {
    template(
        "go-tui",
        "Terminal UI app with Bubbletea",
        Category::Project,
        &["internal/ui"],
        vec![
            file("main.go", asset!("templates/go-tui/main.go.tmpl")),
            file("internal/ui/model.go", asset!("templates/go-tui/internal/ui/model.go.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_websocket() -> Template {
    template(
        "go-websocket",
        "Real-time WebSocket application",
        Category::Project,
        &["cmd/server", "internal/hub", "internal/client", "web"],
        vec![
            file("cmd/server/main.go", asset!("templates/go-websocket/cmd/server/main.go.tmpl")),
            file("internal/hub/hub.go", asset!("templates/go-websocket/internal/hub/hub.go.tmpl")),
            file(
                "internal/client/client.go",
                asset!("templates/go-websocket/internal/client/client.go.tmpl"),
            ),
            file("web/index.html", asset!("templates/go-websocket/web/index.html.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_graphql() -> Template {
    template(
        "go-graphql",
        "GraphQL API with gqlgen",
        Category::Project,
        &["cmd/server", "graph"],
        vec![
            file("cmd/server/main.go", asset!("templates/go-graphql/cmd/server/main.go.tmpl")),
            file(
                "graph/schema.graphqls",
                asset!("templates/go-graphql/graph/schema.graphqls.tmpl"),
            ),
            file("graph/resolver.go", asset!("templates/go-graphql/graph/resolver.go.tmpl")),
            file("gqlgen.yml", asset!("templates/go-graphql/gqlgen.yml.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_lambda() -> Template {
    template(
        "go-lambda",
        "AWS Lambda function with SAM",
        Category::Project,
        &["cmd/lambda", "internal/handler"],
        vec![
            file("cmd/lambda/main.go", asset!("templates/go-lambda/cmd/lambda/main.go.tmpl")),
            file(
                "internal/handler/handler.go",
                asset!("templates/go-lambda/internal/handler/handler.go.tmpl"),
            ),
            file("template.yaml", asset!("templates/go-lambda/template.yaml.tmpl")),
            file("Makefile", asset!("templates/go-lambda/Makefile.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_cron() -> Template {
    template(
        "go-cron",
        "Scheduled jobs with cron",
        Category::Project,
        &["cmd/scheduler", "internal/jobs", "internal/scheduler"],
        vec![
            file("cmd/scheduler/main.go", asset!("templates/go-cron/cmd/scheduler/main.go.tmpl")),
            file("internal/jobs/jobs.go", asset!("templates/go-cron/internal/jobs/jobs.go.tmpl")),
            file(
                "internal/scheduler/scheduler.go",
                asset!("templates/go-cron/internal/scheduler/scheduler.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_auth() -> Template {
    template(
        "go-auth",
        "JWT authentication with middleware",
        Category::Project,
        &["cmd/server", "internal/auth", "internal/handler", "internal/model"],
        vec![
            file("cmd/server/main.go", asset!("templates/go-auth/cmd/server/main.go.tmpl")),
            file("internal/auth/jwt.go", asset!("templates/go-auth/internal/auth/jwt.go.tmpl")),
            file(
                "internal/auth/middleware.go",
                asset!("templates/go-auth/internal/auth/middleware.go.tmpl"),
            ),
            file(
                "internal/handler/auth.go",
                asset!("templates/go-auth/internal/handler/auth.go.tmpl"),
            ),
            file("internal/model/user.go", asset!("templates/go-auth/internal/model/user.go.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_kafka() -> Template {
    template(
        "go-kafka",
        "Kafka consumer & producer",
        Category::Project,
        &["cmd/producer", "cmd/consumer", "internal/kafka"],
        vec![
            file("cmd/producer/main.go", asset!("templates/go-kafka/cmd/producer/main.go.tmpl")),
            file("cmd/consumer/main.go", asset!("templates/go-kafka/cmd/consumer/main.go.tmpl")),
            file(
                "internal/kafka/producer.go",
                asset!("templates/go-kafka/internal/kafka/producer.go.tmpl"),
            ),
            file(
                "internal/kafka/consumer.go",
                asset!("templates/go-kafka/internal/kafka/consumer.go.tmpl"),
            ),
            file("docker-compose.yml", asset!("templates/go-kafka/docker-compose.yml.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_redis() -> Template {
    template(
        "go-redis",
        "Redis caching & pub/sub patterns",
        Category::Project,
        &["cmd/server", "internal/cache", "internal/pubsub"],
        vec![
            file("cmd/server/main.go", asset!("templates/go-redis/cmd/server/main.go.tmpl")),
            file(
                "internal/cache/redis.go",
                asset!("templates/go-redis/internal/cache/redis.go.tmpl"),
            ),
            file(
                "internal/pubsub/pubsub.go",
                asset!("templates/go-redis/internal/pubsub/pubsub.go.tmpl"),
            ),
            file("docker-compose.yml", asset!("templates/go-redis/docker-compose.yml.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_clean_arch() -> Template {
    template(
        "go-clean-arch",
        "Clean Architecture pattern",
        Category::Project,
        &[
            "cmd/api",
            "internal/entity",
            "internal/usecase",
            "internal/repository",
            "internal/delivery/http",
            "pkg/errors",
        ],
        vec![
            file("cmd/api/main.go", asset!("templates/go-clean-arch/cmd/api/main.go.tmpl")),
            file(
                "internal/entity/user.go",
                asset!("templates/go-clean-arch/internal/entity/user.go.tmpl"),
            ),
            file(
                "internal/usecase/user.go",
                asset!("templates/go-clean-arch/internal/usecase/user.go.tmpl"),
            ),
            file(
                "internal/repository/user.go",
                asset!("templates/go-clean-arch/internal/repository/user.go.tmpl"),
            ),
            file(
                "internal/delivery/http/handler.go",
                asset!("templates/go-clean-arch/internal/delivery/http/handler.go.tmpl"),
            ),
            file(
                "pkg/errors/errors.go",
                asset!("templates/go-clean-arch/pkg/errors/errors.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn go_monorepo() -> Template {
    template(
        "go-monorepo",
        "Multi-service monorepo with shared packages",
        Category::Project,
        &["services/api", "services/worker", "pkg/shared"],
        vec![
            file("services/api/main.go", asset!("templates/go-monorepo/services/api/main.go.tmpl")),
            file(
                "services/worker/main.go",
                asset!("templates/go-monorepo/services/worker/main.go.tmpl"),
            ),
            file("pkg/shared/config.go", asset!("templates/go-monorepo/pkg/shared/config.go.tmpl")),
            file("pkg/shared/logger.go", asset!("templates/go-monorepo/pkg/shared/logger.go.tmpl")),
            file("Makefile", asset!("templates/go-monorepo/Makefile.tmpl")),
            file("go.mod", GO_MOD),
            file("README.md", README),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn learn_dsa() -> Template {
    template(
        "learn-dsa",
        "Practice Data Structures & Algorithms",
        Category::Learning,
        &[
            "datastructures/stack",
            "datastructures/queue",
            "datastructures/linkedlist",
            "datastructures/tree",
            "algorithms/sorting",
            "algorithms/searching",
            "algorithms/recursion",
        ],
        vec![
            file("README.md", asset!("templates/learn-dsa/README.md.tmpl")),
            file(
                "datastructures/stack/stack.go",
                asset!("templates/learn-dsa/datastructures/stack/stack.go.tmpl"),
            ),
            file(
                "datastructures/stack/stack_test.go",
                asset!("templates/learn-dsa/datastructures/stack/stack_test.go.tmpl"),
            ),
            file(
                "datastructures/queue/queue.go",
                asset!("templates/learn-dsa/datastructures/queue/queue.go.tmpl"),
            ),
            file(
                "datastructures/queue/queue_test.go",
                asset!("templates/learn-dsa/datastructures/queue/queue_test.go.tmpl"),
            ),
            file(
                "datastructures/linkedlist/linkedlist.go",
                asset!("templates/learn-dsa/datastructures/linkedlist/linkedlist.go.tmpl"),
            ),
            file(
                "datastructures/linkedlist/linkedlist_test.go",
                asset!("templates/learn-dsa/datastructures/linkedlist/linkedlist_test.go.tmpl"),
            ),
            file(
                "algorithms/sorting/sorting.go",
                asset!("templates/learn-dsa/algorithms/sorting/sorting.go.tmpl"),
            ),
            file(
                "algorithms/sorting/sorting_test.go",
                asset!("templates/learn-dsa/algorithms/sorting/sorting_test.go.tmpl"),
            ),
            file(
                "algorithms/searching/searching.go",
                asset!("templates/learn-dsa/algorithms/searching/searching.go.tmpl"),
            ),
            file(
                "algorithms/searching/searching_test.go",
                asset!("templates/learn-dsa/algorithms/searching/searching_test.go.tmpl"),
            ),
            file(
                "algorithms/recursion/recursion.go",
                asset!("templates/learn-dsa/algorithms/recursion/recursion.go.tmpl"),
            ),
            file(
                "algorithms/recursion/recursion_test.go",
                asset!("templates/learn-dsa/algorithms/recursion/recursion_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn learn_context() -> Template {
    template(
        "learn-context",
        "Learn context.Context (cancellation & timeout)",
        Category::Learning,
        &["cancellation", "timeout", "values"],
        vec![
            file("README.md", asset!("templates/learn-context/README.md.tmpl")),
            file(
                "cancellation/main.go",
                asset!("templates/learn-context/cancellation/main.go.tmpl"),
            ),
            file(
                "cancellation/main_test.go",
                asset!("templates/learn-context/cancellation/main_test.go.tmpl"),
            ),
            file("timeout/main.go", asset!("templates/learn-context/timeout/main.go.tmpl")),
            file(
                "timeout/main_test.go",
                asset!("templates/learn-context/timeout/main_test.go.tmpl"),
            ),
            file("values/main.go", asset!("templates/learn-context/values/main.go.tmpl")),
            file("values/main_test.go", asset!("templates/learn-context/values/main_test.go.tmpl")),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn learn_http() -> Template {
    template(
        "learn-http",
        "Learn HTTP client, server & middleware",
        Category::Learning,
        &["client", "server", "middleware"],
        vec![
            file("README.md", asset!("templates/learn-http/README.md.tmpl")),
            file("client/main.go", asset!("templates/learn-http/client/main.go.tmpl")),
            file("client/main_test.go", asset!("templates/learn-http/client/main_test.go.tmpl")),
            file("server/main.go", asset!("templates/learn-http/server/main.go.tmpl")),
            file("server/main_test.go", asset!("templates/learn-http/server/main_test.go.tmpl")),
            file("middleware/main.go", asset!("templates/learn-http/middleware/main.go.tmpl")),
            file(
                "middleware/main_test.go",
                asset!("templates/learn-http/middleware/main_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn learn_error_handling() -> Template {
    template(
        "learn-error-handling",
        "Learn error handling patterns in Go",
        Category::Learning,
        &["basics", "wrapping", "custom"],
        vec![
            file("README.md", asset!("templates/learn-error-handling/README.md.tmpl")),
            file("basics/main.go", asset!("templates/learn-error-handling/basics/main.go.tmpl")),
            file(
                "basics/main_test.go",
                asset!("templates/learn-error-handling/basics/main_test.go.tmpl"),
            ),
            file(
                "wrapping/main.go",
                asset!("templates/learn-error-handling/wrapping/main.go.tmpl"),
            ),
            file(
                "wrapping/main_test.go",
                asset!("templates/learn-error-handling/wrapping/main_test.go.tmpl"),
            ),
            file("custom/main.go", asset!("templates/learn-error-handling/custom/main.go.tmpl")),
            file(
                "custom/main_test.go",
                asset!("templates/learn-error-handling/custom/main_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn learn_interfaces() -> Template {
    template(
        "learn-interfaces",
        "Learn interfaces & polymorphism in Go",
        Category::Learning,
        &["basics", "composition", "patterns"],
        vec![
            file("README.md", asset!("templates/learn-interfaces/README.md.tmpl")),
            file("basics/main.go", asset!("templates/learn-interfaces/basics/main.go.tmpl")),
            file(
                "basics/main_test.go",
                asset!("templates/learn-interfaces/basics/main_test.go.tmpl"),
            ),
            file(
                "composition/main.go",
                asset!("templates/learn-interfaces/composition/main.go.tmpl"),
            ),
            file(
                "composition/main_test.go",
                asset!("templates/learn-interfaces/composition/main_test.go.tmpl"),
            ),
            file("patterns/main.go", asset!("templates/learn-interfaces/patterns/main.go.tmpl")),
            file(
                "patterns/main_test.go",
                asset!("templates/learn-interfaces/patterns/main_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn learn_design_patterns() -> Template {
    template(
        "learn-design-patterns",
        "Learn common design patterns in Go",
        Category::Learning,
        &["creational", "behavioral", "structural"],
        vec![
            file("README.md", asset!("templates/learn-design-patterns/README.md.tmpl")),
            file(
                "creational/factory.go",
                asset!("templates/learn-design-patterns/creational/factory.go.tmpl"),
            ),
            file(
                "creational/factory_test.go",
                asset!("templates/learn-design-patterns/creational/factory_test.go.tmpl"),
            ),
            file(
                "creational/singleton.go",
                asset!("templates/learn-design-patterns/creational/singleton.go.tmpl"),
            ),
            file(
                "creational/singleton_test.go",
                asset!("templates/learn-design-patterns/creational/singleton_test.go.tmpl"),
            ),
            file(
                "behavioral/observer.go",
                asset!("templates/learn-design-patterns/behavioral/observer.go.tmpl"),
            ),
            file(
                "behavioral/observer_test.go",
                asset!("templates/learn-design-patterns/behavioral/observer_test.go.tmpl"),
            ),
            file(
                "behavioral/strategy.go",
                asset!("templates/learn-design-patterns/behavioral/strategy.go.tmpl"),
            ),
            file(
                "behavioral/strategy_test.go",
                asset!("templates/learn-design-patterns/behavioral/strategy_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn challenge_thirty_days() -> Template {
    template(
        "challenge-30days",
        "30-day Go coding challenge",
        Category::Skill,
        &[
            "week1/day01_hello",
            "week1/day02_variables",
            "week1/day03_conditionals",
            "week2/day08_recursion",
            "week2/day09_slices",
            "week3/day15_http",
            "week3/day16_json",
            "week4/day22_concurrency",
            "week4/day23_channels",
        ],
        vec![
            file("README.md", asset!("templates/challenge-30days/README.md.tmpl")),
            file(
                "week1/day01_hello/main.go",
                asset!("templates/challenge-30days/week1/day01_hello/main.go.tmpl"),
            ),
            file(
                "week1/day01_hello/main_test.go",
                asset!("templates/challenge-30days/week1/day01_hello/main_test.go.tmpl"),
            ),
            file(
                "week1/day02_variables/main.go",
                asset!("templates/challenge-30days/week1/day02_variables/main.go.tmpl"),
            ),
            file(
                "week1/day02_variables/main_test.go",
                asset!("templates/challenge-30days/week1/day02_variables/main_test.go.tmpl"),
            ),
            file(
                "week2/day08_recursion/main.go",
                asset!("templates/challenge-30days/week2/day08_recursion/main.go.tmpl"),
            ),
            file(
                "week2/day08_recursion/main_test.go",
                asset!("templates/challenge-30days/week2/day08_recursion/main_test.go.tmpl"),
            ),
            file(
                "week3/day15_http/main.go",
                asset!("templates/challenge-30days/week3/day15_http/main.go.tmpl"),
            ),
            file(
                "week3/day15_http/main_test.go",
                asset!("templates/challenge-30days/week3/day15_http/main_test.go.tmpl"),
            ),
            file(
                "week4/day22_concurrency/main.go",
                asset!("templates/challenge-30days/week4/day22_concurrency/main.go.tmpl"),
            ),
            file(
                "week4/day22_concurrency/main_test.go",
                asset!("templates/challenge-30days/week4/day22_concurrency/main_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn mini_project() -> Template {
    template(
        "mini-project",
        "Mini projects to build (todo-cli, url-shortener)",
        Category::Skill,
        &["todo-cli", "url-shortener"],
        vec![
            file("README.md", asset!("templates/mini-project/README.md.tmpl")),
            file("todo-cli/README.md", asset!("templates/mini-project/todo-cli/README.md.tmpl")),
            file("todo-cli/main.go", asset!("templates/mini-project/todo-cli/main.go.tmpl")),
            file(
                "todo-cli/main_test.go",
                asset!("templates/mini-project/todo-cli/main_test.go.tmpl"),
            ),
            file(
                "url-shortener/README.md",
                asset!("templates/mini-project/url-shortener/README.md.tmpl"),
            ),
            file(
                "url-shortener/main.go",
                asset!("templates/mini-project/url-shortener/main.go.tmpl"),
            ),
            file(
                "url-shortener/main_test.go",
                asset!("templates/mini-project/url-shortener/main_test.go.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}

fn refactoring_exercise() -> Template {
    template(
        "refactoring-exercise",
        "Practice refactoring bad code",
        Category::Skill,
        &["exercises/01_long_function", "exercises/02_magic_numbers", "exercises/03_poor_naming"],
        vec![
            file("README.md", asset!("templates/refactoring-exercise/README.md.tmpl")),
            file(
                "exercises/01_long_function/before.go",
                asset!("templates/refactoring-exercise/exercises/01_long_function/before.go.tmpl"),
            ),
            file(
                "exercises/01_long_function/hints.md",
                asset!("templates/refactoring-exercise/exercises/01_long_function/hints.md.tmpl"),
            ),
            file(
                "exercises/02_magic_numbers/before.go",
                asset!("templates/refactoring-exercise/exercises/02_magic_numbers/before.go.tmpl"),
            ),
            file(
                "exercises/02_magic_numbers/hints.md",
                asset!("templates/refactoring-exercise/exercises/02_magic_numbers/hints.md.tmpl"),
            ),
            file(
                "exercises/03_poor_naming/before.go",
                asset!("templates/refactoring-exercise/exercises/03_poor_naming/before.go.tmpl"),
            ),
            file(
                "exercises/03_poor_naming/hints.md",
                asset!("templates/refactoring-exercise/exercises/03_poor_naming/hints.md.tmpl"),
            ),
            file("go.mod", GO_MOD),
            file(".gitignore", GITIGNORE_GO),
        ],
    )
}
