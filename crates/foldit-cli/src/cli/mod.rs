//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use foldit_core::domain::{AuthProvider, DbProvider, ServiceType, SessionStrategy, StructureType};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "foldit",
    bin_name = "foldit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "FoldIt CLI - keep your Next.js folder structure clean",
    long_about = "FoldIt scaffolds pages, API routes, services, folder layouts, \
                  container manifests and tooling integrations for Next.js \
                  App Router projects.",
    after_help = "EXAMPLES:\n\
        \x20 foldit generate-page blog --dynamic slug --with-test\n\
        \x20 foldit generate-api admin/users --methods GET,POST,DELETE --auth\n\
        \x20 foldit integrate prisma --db postgresql --with-seed\n\
        \x20 foldit completions bash > /usr/share/bash-completion/completions/foldit",
    disable_version_flag = true,
)]
pub struct Cli {
    /// Print version. `-v` instead of clap's `-V`.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    pub version: Option<bool>,

    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Help is printed when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new page scaffold.
    #[command(
        about = "Generate a new Next.js page scaffold",
        after_help = "EXAMPLES:\n\
            \x20 foldit generate-page about\n\
            \x20 foldit generate-page dashboard/settings --with-component\n\
            \x20 foldit generate-page docs --dynamic slug --catch-all --with-test"
    )]
    GeneratePage(PageArgs),

    /// Generate an API route handler.
    #[command(
        about = "Generate a new API route",
        after_help = "EXAMPLES:\n\
            \x20 foldit generate-api posts\n\
            \x20 foldit generate-api posts --methods GET,POST,PUT,DELETE --auth --prisma\n\
            \x20 foldit generate-api users --dynamic id"
    )]
    GenerateApi(ApiArgs),

    /// Generate an axios-backed service class.
    #[command(
        about = "Generate a new API service",
        after_help = "EXAMPLES:\n\
            \x20 foldit generate-service user --with-types\n\
            \x20 foldit generate-service product --with-retry --max-retries 5 --with-cache"
    )]
    GenerateService(ServiceArgs),

    /// Create a preset folder layout.
    #[command(
        about = "Generate a project folder structure",
        after_help = "EXAMPLES:\n\
            \x20 foldit generate-structure\n\
            \x20 foldit generate-structure --type medium"
    )]
    GenerateStructure(StructureArgs),

    /// Integrate a tool into the current project.
    #[command(about = "Integrate tooling into the project", subcommand)]
    Integrate(IntegrateCommands),

    /// Write Docker files.
    #[command(
        about = "Add Docker configuration",
        after_help = "EXAMPLES:\n\
            \x20 foldit dockerize\n\
            \x20 foldit dockerize --with-compose --production --port 8080"
    )]
    Dockerize(DockerArgs),

    /// Write Kubernetes manifests.
    #[command(
        about = "Add Kubernetes manifests",
        after_help = "EXAMPLES:\n\
            \x20 foldit add-kube\n\
            \x20 foldit add-kube --namespace web --replicas 3 --with-ingress --with-config-map"
    )]
    AddKube(KubeArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 foldit completions bash > ~/.local/share/bash-completion/completions/foldit\n\
            \x20 foldit completions zsh  > ~/.zfunc/_foldit\n\
            \x20 foldit completions fish > ~/.config/fish/completions/foldit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate-page ─────────────────────────────────────────────────────────────

/// Arguments for `foldit generate-page`.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Route name; `/` nests directories.
    #[arg(value_name = "NAME", help = "Page name, e.g. about or dashboard/settings")]
    pub name: String,

    #[arg(long = "with-component", help = "Create a components folder for the page")]
    pub with_component: bool,

    #[arg(long = "with-test", help = "Create a __tests__ folder with a page test")]
    pub with_test: bool,

    #[command(flatten)]
    pub dynamic: DynamicArgs,
}

/// The `--dynamic` / `--catch-all` pair shared by pages and API routes.
#[derive(Debug, Args)]
pub struct DynamicArgs {
    #[arg(
        long = "dynamic",
        value_name = "PARAM",
        help = "Add a dynamic segment [PARAM]"
    )]
    pub dynamic: Option<String>,

    #[arg(long = "catch-all", help = "Make the dynamic segment catch-all [...PARAM]")]
    pub catch_all: bool,
}

// ── generate-api ──────────────────────────────────────────────────────────────

/// Arguments for `foldit generate-api`.
#[derive(Debug, Args)]
pub struct ApiArgs {
    #[arg(value_name = "NAME", help = "Route name, e.g. posts or admin/users")]
    pub name: String,

    /// Comma separated; defaults to the configured list (GET,POST).
    #[arg(
        long = "methods",
        value_name = "METHODS",
        help = "HTTP methods to export, e.g. GET,POST,PUT,DELETE"
    )]
    pub methods: Option<String>,

    #[arg(long = "auth", help = "Guard every handler with authMiddleware")]
    pub auth: bool,

    #[arg(long = "prisma", help = "Import the Prisma client")]
    pub prisma: bool,

    #[command(flatten)]
    pub dynamic: DynamicArgs,
}

// ── generate-service ──────────────────────────────────────────────────────────

/// Arguments for `foldit generate-service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    #[arg(value_name = "NAME", help = "Service name, e.g. user")]
    pub name: String,

    /// Literal base URL; `NEXT_PUBLIC_API_URL` is read at runtime when omitted.
    #[arg(long = "base-url", value_name = "URL", help = "Base URL for requests")]
    pub base_url: Option<String>,

    #[arg(long = "with-types", help = "Generate a types file")]
    pub with_types: bool,

    #[arg(long = "with-interceptors", help = "Add request/response interceptors")]
    pub with_interceptors: bool,

    #[arg(long = "with-error-handling", help = "Add detailed error handling")]
    pub with_error_handling: bool,

    #[arg(long = "with-auth", help = "Add an auth header helper")]
    pub with_auth: bool,

    #[arg(long = "with-retry", help = "Retry failed requests")]
    pub with_retry: bool,

    #[arg(long = "with-cache", help = "Cache GET responses in memory")]
    pub with_cache: bool,

    #[arg(
        long = "max-retries",
        value_name = "N",
        default_value_t = 3,
        help = "Retry attempts"
    )]
    pub max_retries: u32,

    #[arg(
        long = "retry-delay",
        value_name = "MS",
        default_value_t = 1000,
        help = "Delay between retries in milliseconds"
    )]
    pub retry_delay: u64,
}

// ── generate-structure ────────────────────────────────────────────────────────

/// Arguments for `foldit generate-structure`.
#[derive(Debug, Args)]
pub struct StructureArgs {
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        default_value = "basic",
        help = "Structure preset"
    )]
    pub structure: StructureArg,
}

// ── dockerize / add-kube ──────────────────────────────────────────────────────

/// Arguments for `foldit dockerize`. Unset values come from configuration.
#[derive(Debug, Args)]
pub struct DockerArgs {
    #[arg(long = "node-version", value_name = "TAG", help = "Node image tag [default: 18-alpine]")]
    pub node_version: Option<String>,

    #[arg(long = "port", value_name = "PORT", help = "Exposed port [default: 3000]")]
    pub port: Option<u16>,

    #[arg(long = "with-compose", help = "Also write docker-compose.yml")]
    pub with_compose: bool,

    #[arg(long = "no-ignore", help = "Do not write .dockerignore")]
    pub no_ignore: bool,

    #[arg(long = "production", help = "Multi-stage production build")]
    pub production: bool,
}

/// Arguments for `foldit add-kube`. Unset values come from configuration.
#[derive(Debug, Args)]
pub struct KubeArgs {
    #[arg(long = "namespace", value_name = "NS", help = "Namespace [default: default]")]
    pub namespace: Option<String>,

    #[arg(long = "replicas", value_name = "N", help = "Replica count [default: 2]")]
    pub replicas: Option<u32>,

    #[arg(long = "port", value_name = "PORT", help = "Container port [default: 3000]")]
    pub port: Option<u16>,

    #[arg(long = "with-ingress", help = "Also write ingress.yaml")]
    pub with_ingress: bool,

    #[arg(long = "with-config-map", help = "Also write configmap.yaml")]
    pub with_config_map: bool,

    #[arg(long = "image-name", value_name = "NAME", help = "Image name [default: nextjs-app]")]
    pub image_name: Option<String>,

    #[arg(long = "image-tag", value_name = "TAG", help = "Image tag [default: latest]")]
    pub image_tag: Option<String>,

    #[arg(long = "service-type", value_enum, help = "Service type [default: ClusterIP]")]
    pub service_type: Option<ServiceTypeArg>,
}

// ── integrate ─────────────────────────────────────────────────────────────────

/// Subcommands for `foldit integrate`.
#[derive(Debug, Subcommand)]
pub enum IntegrateCommands {
    /// ESLint and Prettier configuration.
    #[command(about = "Add ESLint and Prettier")]
    EslintPrettier(LintArgs),

    /// Prisma schema, client and scripts.
    #[command(
        about = "Add Prisma ORM",
        after_help = "EXAMPLES:\n\
            \x20 foldit integrate prisma\n\
            \x20 foldit integrate prisma --db postgresql --with-seed --generate"
    )]
    Prisma(PrismaArgs),

    /// NextAuth.js configuration.
    #[command(about = "Add NextAuth.js")]
    NextAuth(AuthArgs),

    /// BetterAuth configuration.
    #[command(about = "Add BetterAuth")]
    BetterAuth(AuthArgs),

    /// shadcn/ui configuration and components.
    #[command(
        about = "Add shadcn/ui",
        after_help = "EXAMPLES:\n\
            \x20 foldit integrate shadcn-ui --components button,card --tailwind"
    )]
    ShadcnUi(ShadcnArgs),
}

/// Arguments for `foldit integrate eslint-prettier`.
#[derive(Debug, Args)]
pub struct LintArgs {
    #[arg(long = "strict", help = "Stricter rule set")]
    pub strict: bool,

    #[arg(long = "airbnb", help = "Extend the Airbnb style guide")]
    pub airbnb: bool,

    #[arg(long = "typescript", help = "Add TypeScript parser and rules")]
    pub typescript: bool,

    #[arg(long = "with-scripts", help = "Add lint and format scripts to package.json")]
    pub with_scripts: bool,

    #[arg(
        long = "ignore",
        value_name = "PATTERNS",
        value_delimiter = ',',
        help = "Extra ignore patterns, comma separated"
    )]
    pub ignore: Vec<String>,
}

/// Arguments for `foldit integrate prisma`.
#[derive(Debug, Args)]
pub struct PrismaArgs {
    #[arg(long = "db", value_enum, help = "Database provider [default: sqlite]")]
    pub db: Option<DbArg>,

    #[arg(long = "push", help = "Run `npx prisma db push` afterwards")]
    pub push: bool,

    #[arg(long = "generate", help = "Run `npx prisma generate` afterwards")]
    pub generate: bool,

    #[arg(long = "with-seed", help = "Create prisma/seed.ts")]
    pub with_seed: bool,

    #[arg(
        long = "schema",
        value_name = "PATH",
        default_value = "prisma/schema.prisma",
        help = "Schema location"
    )]
    pub schema: String,
}

/// Arguments shared by `integrate next-auth` and `integrate better-auth`.
#[derive(Debug, Args)]
pub struct AuthArgs {
    #[arg(long = "provider", value_enum, help = "Sign-in provider")]
    pub provider: Option<AuthProviderArg>,

    #[arg(long = "prisma", help = "Use the Prisma adapter")]
    pub prisma: bool,

    #[arg(
        long = "session",
        value_enum,
        default_value = "jwt",
        help = "Session strategy"
    )]
    pub session: SessionArg,

    #[arg(long = "env", help = "Append variables to .env.local")]
    pub env: bool,

    #[arg(long = "route", help = "Create the auth route handler")]
    pub route: bool,
}

/// Arguments for `foldit integrate shadcn-ui`.
#[derive(Debug, Args)]
pub struct ShadcnArgs {
    #[arg(
        long = "components",
        value_name = "NAMES",
        value_delimiter = ',',
        help = "Components to create, comma separated"
    )]
    pub components: Vec<String>,

    #[arg(long = "theme", default_value = "zinc", help = "Base colour")]
    pub theme: String,

    #[arg(
        long = "dir",
        value_name = "DIR",
        default_value = "src/components/ui",
        help = "Components directory"
    )]
    pub dir: String,

    #[arg(long = "tailwind", help = "Run `npx tailwindcss init -p` afterwards")]
    pub tailwind: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `foldit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StructureArg {
    Basic,
    Medium,
}

impl From<StructureArg> for StructureType {
    fn from(arg: StructureArg) -> Self {
        match arg {
            StructureArg::Basic => Self::Basic,
            StructureArg::Medium => Self::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DbArg {
    Sqlite,
    /// Also accepted as `postgres`.
    #[value(alias = "postgres")]
    Postgresql,
    Mysql,
    Sqlserver,
    Mongodb,
}

impl From<DbArg> for DbProvider {
    fn from(arg: DbArg) -> Self {
        match arg {
            DbArg::Sqlite => Self::Sqlite,
            DbArg::Postgresql => Self::Postgresql,
            DbArg::Mysql => Self::Mysql,
            DbArg::Sqlserver => Self::Sqlserver,
            DbArg::Mongodb => Self::Mongodb,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AuthProviderArg {
    Github,
    Google,
    Discord,
    Credentials,
}

impl From<AuthProviderArg> for AuthProvider {
    fn from(arg: AuthProviderArg) -> Self {
        match arg {
            AuthProviderArg::Github => Self::Github,
            AuthProviderArg::Google => Self::Google,
            AuthProviderArg::Discord => Self::Discord,
            AuthProviderArg::Credentials => Self::Credentials,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SessionArg {
    Jwt,
    Database,
}

impl From<SessionArg> for SessionStrategy {
    fn from(arg: SessionArg) -> Self {
        match arg {
            SessionArg::Jwt => Self::Jwt,
            SessionArg::Database => Self::Database,
        }
    }
}

/// Kubernetes service types, spelled the way manifests spell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceTypeArg {
    #[value(name = "ClusterIP", alias = "clusterip")]
    ClusterIp,
    #[value(name = "NodePort", alias = "nodeport")]
    NodePort,
    #[value(name = "LoadBalancer", alias = "loadbalancer")]
    LoadBalancer,
}

impl From<ServiceTypeArg> for ServiceType {
    fn from(arg: ServiceTypeArg) -> Self {
        match arg {
            ServiceTypeArg::ClusterIp => Self::ClusterIp,
            ServiceTypeArg::NodePort => Self::NodePort,
            ServiceTypeArg::LoadBalancer => Self::LoadBalancer,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["foldit"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_page_command() {
        let cli = Cli::parse_from([
            "foldit",
            "generate-page",
            "blog",
            "--dynamic",
            "slug",
            "--catch-all",
            "--with-test",
        ]);
        let Some(Commands::GeneratePage(args)) = cli.command else {
            panic!("expected GeneratePage");
        };
        assert_eq!(args.name, "blog");
        assert_eq!(args.dynamic.dynamic.as_deref(), Some("slug"));
        assert!(args.dynamic.catch_all);
        assert!(args.with_test);
        assert!(!args.with_component);
    }

    #[test]
    fn page_name_is_required() {
        assert!(Cli::try_parse_from(["foldit", "generate-page"]).is_err());
    }

    #[test]
    fn short_v_is_version() {
        let err = Cli::try_parse_from(["foldit", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn verbose_is_counted_and_global() {
        let cli = Cli::parse_from(["foldit", "dockerize", "--verbose", "--verbose"]);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["foldit", "--quiet", "--verbose", "dockerize"]);
        assert!(result.is_err());
    }

    #[test]
    fn lists_split_on_commas() {
        let cli = Cli::parse_from([
            "foldit",
            "integrate",
            "shadcn-ui",
            "--components",
            "button,card",
        ]);
        let Some(Commands::Integrate(IntegrateCommands::ShadcnUi(args))) = cli.command else {
            panic!("expected shadcn-ui");
        };
        assert_eq!(args.components, ["button", "card"]);
        assert_eq!(args.theme, "zinc");
    }

    #[test]
    fn service_type_uses_manifest_spelling() {
        let cli = Cli::parse_from(["foldit", "add-kube", "--service-type", "LoadBalancer"]);
        let Some(Commands::AddKube(args)) = cli.command else {
            panic!("expected add-kube");
        };
        assert_eq!(args.service_type, Some(ServiceTypeArg::LoadBalancer));
        assert_eq!(
            ServiceType::from(ServiceTypeArg::LoadBalancer),
            ServiceType::LoadBalancer
        );
    }

    #[test]
    fn postgres_alias() {
        let cli = Cli::parse_from(["foldit", "integrate", "prisma", "--db", "postgres"]);
        let Some(Commands::Integrate(IntegrateCommands::Prisma(args))) = cli.command else {
            panic!("expected prisma");
        };
        assert_eq!(args.db, Some(DbArg::Postgresql));
        assert_eq!(args.schema, "prisma/schema.prisma");
    }
}
