//! Scaffold plans.
//!
//! [`ScaffoldPlan::for_request`] is the pure half of every command: it
//! resolves paths, picks templates and write modes, and lists the manifest
//! patches, installs and tool invocations that follow. Executing a plan is
//! the application layer's job.

use std::fmt;

use crate::domain::{
    ApiRouteOptions, ArtifactKind, AuthFlavor, AuthOptions, DockerOptions, DomainError,
    IntegrationOptions, KubeOptions, LintOptions, PackageManager, PageOptions, PrismaOptions,
    RelativePath, RoutePath, ScaffoldOptions, ScaffoldRequest, ServiceOptions, ShadcnOptions,
    StructureOptions, Template, WriteMode,
};

/// Whether a failed or skipped write fails the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactRole {
    Primary,
    Secondary,
}

/// One file the plan will render and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedArtifact {
    pub template: Template,
    pub path: RelativePath,
    pub write_mode: WriteMode,
    pub role: ArtifactRole,
    /// Noun used in the creation report, e.g. `page` in `Created page: ...`.
    pub label: &'static str,
    /// Report the containing directory instead of the file.
    pub announce_dir: bool,
}

impl PlannedArtifact {
    fn new(template: Template, path: RelativePath, label: &'static str) -> Self {
        Self {
            template,
            path,
            write_mode: WriteMode::ExclusiveCreate,
            role: ArtifactRole::Secondary,
            label,
            announce_dir: false,
        }
    }

    fn primary(mut self) -> Self {
        self.role = ArtifactRole::Primary;
        self
    }

    fn mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    fn announce_dir(mut self) -> Self {
        self.announce_dir = true;
        self
    }
}

/// A directory created up front, independent of any file in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDirectory {
    pub path: RelativePath,
    pub label: &'static str,
}

/// Keys merged into `package.json`. Existing keys are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestPatch {
    /// What the patch adds, for reporting (`Prisma scripts`).
    pub label: &'static str,
    pub scripts: Vec<(String, String)>,
    pub dependencies: Vec<(String, String)>,
    pub dev_dependencies: Vec<(String, String)>,
}

impl ManifestPatch {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    fn script(mut self, name: &str, command: impl Into<String>) -> Self {
        self.scripts.push((name.to_owned(), command.into()));
        self
    }

    fn dependency(mut self, name: &str, version: &str) -> Self {
        self.dependencies.push((name.to_owned(), version.to_owned()));
        self
    }

    fn dev_dependency(mut self, name: &str, version: &str) -> Self {
        self.dev_dependencies
            .push((name.to_owned(), version.to_owned()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

/// Packages installed with the detected package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    pub packages: Vec<String>,
    pub dev: bool,
}

impl InstallStep {
    fn new(packages: &[&str], dev: bool) -> Self {
        Self {
            packages: packages.iter().map(|p| (*p).to_owned()).collect(),
            dev,
        }
    }

    /// The concrete command for `manager`.
    pub fn command(&self, manager: PackageManager) -> ToolCommand {
        let mut args: Vec<String> = manager
            .install_args(self.dev)
            .iter()
            .map(|a| (*a).to_owned())
            .collect();
        args.extend(self.packages.iter().cloned());
        ToolCommand {
            program: manager.as_str().to_owned(),
            args,
            description: "install dependencies",
        }
    }
}

/// An external program run after the files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub description: &'static str,
}

impl ToolCommand {
    fn npx(args: &[&str], description: &'static str) -> Self {
        Self {
            program: "npx".into(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
            description,
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Everything a command will do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    /// Gerund phrase for failure reports: `Error <action>: <message>`.
    pub action: &'static str,
    /// Primary target that must not exist yet.
    pub guard: Option<RelativePath>,
    /// File that must exist before anything is written.
    pub required: Option<RelativePath>,
    /// Path whose presence only earns a warning.
    pub warn_if_exists: Option<RelativePath>,
    pub directories: Vec<PlannedDirectory>,
    pub artifacts: Vec<PlannedArtifact>,
    pub manifest: Option<ManifestPatch>,
    pub installs: Vec<InstallStep>,
    pub commands: Vec<ToolCommand>,
}

impl ScaffoldPlan {
    fn empty() -> Self {
        Self {
            action: "",
            guard: None,
            required: None,
            warn_if_exists: None,
            directories: Vec::new(),
            artifacts: Vec::new(),
            manifest: None,
            installs: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Plan a request.
    pub fn for_request(request: &ScaffoldRequest) -> Result<Self, DomainError> {
        let mut plan = match request.options() {
            ScaffoldOptions::Page(opts) => plan_page(request.name(), opts),
            ScaffoldOptions::ApiRoute(opts) => plan_api_route(request.name(), opts),
            ScaffoldOptions::Service(opts) => plan_service(request.name(), opts),
            ScaffoldOptions::Structure(opts) => plan_structure(opts),
            ScaffoldOptions::Docker(opts) => plan_docker(opts),
            ScaffoldOptions::Kube(opts) => plan_kube(opts),
            ScaffoldOptions::Integration(IntegrationOptions::EslintPrettier(opts)) => {
                plan_lint(opts)
            }
            ScaffoldOptions::Integration(IntegrationOptions::Prisma(opts)) => plan_prisma(opts),
            ScaffoldOptions::Integration(IntegrationOptions::Auth(opts)) => plan_auth(opts),
            ScaffoldOptions::Integration(IntegrationOptions::ShadcnUi(opts)) => plan_shadcn(opts),
        }?;
        plan.action = request.action();
        Ok(plan)
    }

    /// Primary artifact paths, in plan order.
    pub fn primary_paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.artifacts
            .iter()
            .filter(|a| a.role == ArtifactRole::Primary)
            .map(|a| &a.path)
    }
}

fn rel(path: &str) -> Result<RelativePath, DomainError> {
    RelativePath::try_new(path)
}

fn package_json() -> Result<RelativePath, DomainError> {
    rel("package.json")
}

// ── routed artifacts ──────────────────────────────────────────────────────────

fn plan_page(name: &str, opts: &PageOptions) -> Result<ScaffoldPlan, DomainError> {
    let route = RoutePath::resolve(ArtifactKind::Page, name, opts.dynamic.as_ref())?;
    let dir = route.directory()?;
    let entity = route.entity_name().to_owned();

    let mut plan = ScaffoldPlan::empty();
    plan.guard = Some(dir.clone());
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::Page {
                entity: entity.clone(),
                dynamic: opts.dynamic.clone(),
            },
            dir.join("page.tsx")?,
            "page",
        )
        .primary(),
    );

    if opts.with_component {
        plan.artifacts.push(
            PlannedArtifact::new(
                Template::ComponentIndex {
                    entity: entity.clone(),
                },
                dir.join("components/index.ts")?,
                "components folder",
            )
            .announce_dir(),
        );
    }

    if opts.with_test {
        plan.artifacts.push(
            PlannedArtifact::new(
                Template::PageTest {
                    entity,
                    dynamic: opts.dynamic.clone(),
                },
                dir.join("__tests__/page.test.tsx")?,
                "test folder",
            )
            .announce_dir(),
        );
    }

    Ok(plan)
}

fn plan_api_route(name: &str, opts: &ApiRouteOptions) -> Result<ScaffoldPlan, DomainError> {
    if opts.methods.is_empty() {
        return Err(DomainError::NoHttpMethods);
    }
    let route = RoutePath::resolve(ArtifactKind::ApiRoute, name, opts.dynamic.as_ref())?;
    let dir = route.directory()?;

    let mut plan = ScaffoldPlan::empty();
    plan.guard = Some(dir.clone());
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::ApiRoute {
                entity: route.entity_name().to_owned(),
                options: opts.clone(),
            },
            dir.join("route.ts")?,
            "API route",
        )
        .primary(),
    );
    Ok(plan)
}

fn plan_service(name: &str, opts: &ServiceOptions) -> Result<ScaffoldPlan, DomainError> {
    let route = RoutePath::resolve(ArtifactKind::Service, name, None)?;
    let dir = route.namespace_dir()?;
    let entity = route.entity_name().to_owned();

    let mut plan = ScaffoldPlan::empty();
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::Service {
                entity: entity.clone(),
                options: opts.clone(),
            },
            dir.join(format!("{entity}Service.ts"))?,
            "service",
        )
        .primary(),
    );

    if opts.with_types {
        plan.artifacts.push(PlannedArtifact::new(
            Template::ServiceTypes {
                entity: entity.clone(),
            },
            dir.join(format!("{entity}Types.ts"))?,
            "service types",
        ));
    }

    plan.artifacts.push(
        PlannedArtifact::new(
            Template::AxiosConfig {
                options: opts.clone(),
            },
            dir.join("axiosConfig.ts")?,
            "axios config",
        )
        .mode(WriteMode::OverwriteIfAbsent),
    );

    plan.installs.push(InstallStep::new(&["axios"], false));
    if opts.with_types {
        plan.installs.push(InstallStep::new(&["@types/axios"], true));
    }
    Ok(plan)
}

// ── structure ─────────────────────────────────────────────────────────────────

fn plan_structure(opts: &StructureOptions) -> Result<ScaffoldPlan, DomainError> {
    let mut plan = ScaffoldPlan::empty();
    plan.warn_if_exists = Some(rel(ArtifactKind::Structure.root_dir())?);
    for dir in opts.structure.directories() {
        plan.artifacts.push(
            PlannedArtifact::new(Template::Gitkeep, rel(dir)?.join(".gitkeep")?, "directory")
                .mode(WriteMode::OverwriteIfAbsent)
                .announce_dir(),
        );
    }
    Ok(plan)
}

// ── containers ────────────────────────────────────────────────────────────────

fn plan_docker(opts: &DockerOptions) -> Result<ScaffoldPlan, DomainError> {
    if opts.node_version.trim().is_empty() {
        return Err(DomainError::InvalidOption {
            option: "--node-version",
            reason: "cannot be empty".into(),
        });
    }

    let mut plan = ScaffoldPlan::empty();
    plan.required = Some(package_json()?);
    plan.artifacts.push(
        PlannedArtifact::new(Template::Dockerfile(opts.clone()), rel("Dockerfile")?, "Dockerfile")
            .primary(),
    );
    if opts.with_ignore {
        plan.artifacts.push(PlannedArtifact::new(
            Template::DockerIgnore,
            rel(".dockerignore")?,
            ".dockerignore",
        ));
    }
    if opts.with_compose {
        plan.artifacts.push(PlannedArtifact::new(
            Template::DockerCompose(opts.clone()),
            rel("docker-compose.yml")?,
            "docker-compose.yml",
        ));
    }
    Ok(plan)
}

fn plan_kube(opts: &KubeOptions) -> Result<ScaffoldPlan, DomainError> {
    if opts.replicas == 0 {
        return Err(DomainError::InvalidOption {
            option: "--replicas",
            reason: "must be at least 1".into(),
        });
    }
    let root = rel(ArtifactKind::KubeConfig.root_dir())?;

    let mut plan = ScaffoldPlan::empty();
    plan.required = Some(package_json()?);
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::KubeDeployment(opts.clone()),
            root.join("deployment.yaml")?,
            "deployment",
        )
        .primary(),
    );
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::KubeService(opts.clone()),
            root.join("service.yaml")?,
            "service",
        )
        .primary(),
    );
    if opts.with_ingress {
        plan.artifacts.push(PlannedArtifact::new(
            Template::KubeIngress(opts.clone()),
            root.join("ingress.yaml")?,
            "ingress",
        ));
    }
    if opts.with_config_map {
        plan.artifacts.push(PlannedArtifact::new(
            Template::KubeConfigMap(opts.clone()),
            root.join("configmap.yaml")?,
            "configmap",
        ));
    }
    Ok(plan)
}

// ── integrations ──────────────────────────────────────────────────────────────

fn plan_lint(opts: &LintOptions) -> Result<ScaffoldPlan, DomainError> {
    let mut plan = ScaffoldPlan::empty();
    plan.artifacts.push(
        PlannedArtifact::new(Template::EslintConfig(opts.clone()), rel(".eslintrc.js")?, "ESLint config")
            .primary(),
    );
    plan.artifacts.push(
        PlannedArtifact::new(Template::PrettierConfig, rel(".prettierrc")?, "Prettier config")
            .primary(),
    );
    plan.artifacts.push(PlannedArtifact::new(
        Template::EslintIgnore(opts.clone()),
        rel(".eslintignore")?,
        "ESLint ignore file",
    ));
    plan.artifacts.push(PlannedArtifact::new(
        Template::PrettierIgnore(opts.clone()),
        rel(".prettierignore")?,
        "Prettier ignore file",
    ));

    if opts.with_scripts {
        plan.manifest = Some(
            ManifestPatch::new("lint and format scripts")
                .script("lint", "eslint . --ext .js,.jsx,.ts,.tsx")
                .script("lint:fix", "eslint . --ext .js,.jsx,.ts,.tsx --fix")
                .script("format", "prettier --write .")
                .script("format:check", "prettier --check ."),
        );
    }

    let mut packages = vec!["eslint", "prettier"];
    if opts.typescript {
        packages.extend(["@typescript-eslint/parser", "@typescript-eslint/eslint-plugin"]);
    }
    if opts.airbnb {
        packages.extend([
            "eslint-config-airbnb",
            "eslint-config-airbnb-typescript",
            "eslint-plugin-import",
            "eslint-plugin-jsx-a11y",
            "eslint-plugin-react",
            "eslint-plugin-react-hooks",
        ]);
    }
    plan.installs.push(InstallStep::new(&packages, true));
    Ok(plan)
}

fn plan_prisma(opts: &PrismaOptions) -> Result<ScaffoldPlan, DomainError> {
    let schema = rel(&opts.schema_path)?;
    let prisma_dir = schema.parent();
    let seed = prisma_dir.join("seed.ts")?;

    let mut plan = ScaffoldPlan::empty();
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::PrismaSchema {
                provider: opts.provider,
            },
            schema,
            "Prisma schema",
        )
        .primary(),
    );
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::DatabaseEnv {
                provider: opts.provider,
            },
            rel(".env")?,
            ".env with DATABASE_URL",
        )
        .mode(WriteMode::append("DATABASE_URL")),
    );
    plan.artifacts.push(PlannedArtifact::new(
        Template::PrismaClient,
        rel("src/lib/prisma.ts")?,
        "Prisma client",
    ));
    if opts.with_seed {
        plan.artifacts
            .push(PlannedArtifact::new(Template::PrismaSeed, seed.clone(), "seed script"));
    }

    plan.manifest = Some(
        ManifestPatch::new("Prisma scripts")
            .script("db:generate", "prisma generate")
            .script("db:push", "prisma db push")
            .script("db:migrate", "prisma migrate dev")
            .script("db:studio", "prisma studio")
            .script("db:seed", format!("tsx {seed}")),
    );

    plan.installs
        .push(InstallStep::new(&["prisma", "@prisma/client"], false));
    if opts.with_seed {
        plan.installs.push(InstallStep::new(&["tsx"], true));
    }
    if opts.push {
        plan.commands
            .push(ToolCommand::npx(&["prisma", "db", "push"], "push the database schema"));
    }
    if opts.generate {
        plan.commands
            .push(ToolCommand::npx(&["prisma", "generate"], "generate the Prisma client"));
    }
    Ok(plan)
}

fn plan_auth(opts: &AuthOptions) -> Result<ScaffoldPlan, DomainError> {
    let flavor = opts.flavor;
    let mut plan = ScaffoldPlan::empty();

    plan.artifacts.push(
        PlannedArtifact::new(Template::AuthConfig(opts.clone()), rel("src/lib/auth.ts")?, "auth config")
            .primary(),
    );
    if opts.route {
        plan.artifacts.push(PlannedArtifact::new(
            Template::AuthRoute { flavor },
            rel(flavor.route_path())?,
            "auth route",
        ));
    }
    if opts.prisma {
        plan.artifacts.push(PlannedArtifact::new(
            Template::AuthPrismaAdapter { flavor },
            rel("src/lib/prisma-adapter.ts")?,
            "Prisma adapter",
        ));
        plan.artifacts.push(
            PlannedArtifact::new(
                Template::AuthPrismaModels { flavor },
                rel("prisma/schema.prisma")?,
                "auth models",
            )
            .mode(WriteMode::append_existing("model Account")),
        );
    }
    if opts.env {
        plan.artifacts.push(
            PlannedArtifact::new(Template::AuthEnv(opts.clone()), rel(".env.local")?, ".env.local")
                .mode(WriteMode::append(flavor.secret_key())),
        );
    }

    let mut packages = Vec::new();
    plan.manifest = Some(match flavor {
        AuthFlavor::NextAuth => {
            packages.push("next-auth");
            ManifestPatch::new("NextAuth.js dependency").dependency("next-auth", "^4.24.5")
        }
        AuthFlavor::BetterAuth => {
            packages.push("@auth/core");
            ManifestPatch::new("BetterAuth dependencies")
                .dependency("@auth/core", "^0.18.0")
                .dependency("@auth/prisma-adapter", "^1.0.0")
        }
    });
    if opts.prisma {
        packages.push("@auth/prisma-adapter");
    }
    plan.installs.push(InstallStep::new(&packages, false));
    Ok(plan)
}

fn plan_shadcn(opts: &ShadcnOptions) -> Result<ScaffoldPlan, DomainError> {
    let components_dir = rel(&opts.dir)?;

    let mut plan = ScaffoldPlan::empty();
    plan.directories.push(PlannedDirectory {
        path: components_dir.clone(),
        label: "components directory",
    });
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::ShadcnComponentsJson(opts.clone()),
            rel("components.json")?,
            "components.json",
        )
        .primary(),
    );
    plan.artifacts.push(
        PlannedArtifact::new(
            Template::GlobalsCss {
                theme: opts.theme.clone(),
            },
            rel("src/app/globals.css")?,
            "globals.css",
        )
        .mode(WriteMode::prepend("@tailwind base")),
    );
    plan.artifacts.push(PlannedArtifact::new(
        Template::TailwindConfig,
        rel("tailwind.config.js")?,
        "Tailwind config",
    ));
    plan.artifacts.push(PlannedArtifact::new(
        Template::PostcssConfig,
        rel("postcss.config.js")?,
        "PostCSS config",
    ));
    plan.artifacts.push(PlannedArtifact::new(
        Template::CnUtils,
        rel("src/lib/utils.ts")?,
        "utils",
    ));
    for component in opts.components.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
        plan.artifacts.push(PlannedArtifact::new(
            Template::ShadcnComponent {
                name: component.to_owned(),
            },
            components_dir.join(format!("{component}.tsx"))?,
            "component",
        ));
    }

    let mut manifest = ManifestPatch::new("shadcn/ui dependencies")
        .dependency("class-variance-authority", "^0.7.0")
        .dependency("clsx", "^2.0.0")
        .dependency("tailwind-merge", "^2.0.0")
        .dependency("lucide-react", "^0.294.0");
    if opts.tailwind {
        manifest = manifest
            .dev_dependency("tailwindcss", "^3.3.0")
            .dev_dependency("postcss", "^8.4.0")
            .dev_dependency("autoprefixer", "^10.4.0");
    }
    plan.manifest = Some(manifest.dev_dependency("tailwindcss-animate", "^1.0.7"));

    if opts.tailwind {
        plan.installs.push(InstallStep::new(
            &["tailwindcss", "postcss", "autoprefixer"],
            true,
        ));
    }
    plan.installs.push(InstallStep::new(
        &[
            "tailwindcss-animate",
            "class-variance-authority",
            "clsx",
            "tailwind-merge",
            "lucide-react",
        ],
        false,
    ));
    if opts.tailwind {
        plan.commands.push(ToolCommand::npx(
            &["tailwindcss", "init", "-p"],
            "initialise Tailwind CSS",
        ));
    }
    Ok(plan)
}
