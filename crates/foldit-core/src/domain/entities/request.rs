//! Scaffold requests.
//!
//! A [`ScaffoldRequest`] is built once from parsed arguments and never
//! mutated. Its options are a tagged union with one variant per artifact
//! kind, so a flag that makes no sense for a command cannot be expressed.

use crate::domain::{
    ArtifactKind, AuthFlavor, AuthProvider, DbProvider, DynamicSegment, HttpMethod,
    ServiceType, SessionStrategy, StructureType,
};

/// A single scaffold invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    name: String,
    options: ScaffoldOptions,
}

impl ScaffoldRequest {
    /// Request for a named artifact (page, API route, service).
    pub fn named(name: impl Into<String>, options: ScaffoldOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Request for an artifact that is not addressed by name.
    pub fn unnamed(options: ScaffoldOptions) -> Self {
        Self {
            name: String::new(),
            options,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.options.kind()
    }

    /// Gerund phrase naming what the request does, for failure reports.
    pub fn action(&self) -> &'static str {
        self.options.action()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ScaffoldOptions {
        &self.options
    }
}

/// Per-kind options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOptions {
    Page(PageOptions),
    ApiRoute(ApiRouteOptions),
    Service(ServiceOptions),
    Structure(StructureOptions),
    Docker(DockerOptions),
    Kube(KubeOptions),
    Integration(IntegrationOptions),
}

impl ScaffoldOptions {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Page(_) => ArtifactKind::Page,
            Self::ApiRoute(_) => ArtifactKind::ApiRoute,
            Self::Service(_) => ArtifactKind::Service,
            Self::Structure(_) => ArtifactKind::Structure,
            Self::Docker(_) => ArtifactKind::DockerConfig,
            Self::Kube(_) => ArtifactKind::KubeConfig,
            Self::Integration(_) => ArtifactKind::Integration,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Self::Page(_) => "generating page scaffold",
            Self::ApiRoute(_) => "generating API route",
            Self::Service(_) => "generating service",
            Self::Structure(_) => "generating project structure",
            Self::Docker(_) => "creating Docker files",
            Self::Kube(_) => "creating Kubernetes files",
            Self::Integration(IntegrationOptions::EslintPrettier(_)) => {
                "integrating ESLint and Prettier"
            }
            Self::Integration(IntegrationOptions::Prisma(_)) => "integrating Prisma",
            Self::Integration(IntegrationOptions::Auth(auth)) => match auth.flavor {
                AuthFlavor::NextAuth => "integrating NextAuth.js",
                AuthFlavor::BetterAuth => "integrating BetterAuth",
            },
            Self::Integration(IntegrationOptions::ShadcnUi(_)) => "integrating shadcn/ui",
        }
    }
}

// ── page / api / service ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub with_component: bool,
    pub with_test: bool,
    pub dynamic: Option<DynamicSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRouteOptions {
    pub methods: Vec<HttpMethod>,
    pub auth: bool,
    pub prisma: bool,
    pub dynamic: Option<DynamicSegment>,
}

impl Default for ApiRouteOptions {
    fn default() -> Self {
        Self {
            methods: HttpMethod::DEFAULTS.to_vec(),
            auth: false,
            prisma: false,
            dynamic: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Literal base URL; `None` reads `NEXT_PUBLIC_API_URL` at runtime.
    pub base_url: Option<String>,
    pub with_types: bool,
    pub with_interceptors: bool,
    pub with_error_handling: bool,
    pub with_auth: bool,
    pub with_retry: bool,
    pub with_cache: bool,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            with_types: false,
            with_interceptors: false,
            with_error_handling: false,
            with_auth: false,
            with_retry: false,
            with_cache: false,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

// ── structure / docker / kube ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureOptions {
    pub structure: StructureType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerOptions {
    pub node_version: String,
    pub port: u16,
    pub with_compose: bool,
    pub with_ignore: bool,
    pub production: bool,
}

impl Default for DockerOptions {
    fn default() -> Self {
        Self {
            node_version: "18-alpine".into(),
            port: 3000,
            with_compose: false,
            with_ignore: true,
            production: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubeOptions {
    pub namespace: String,
    pub replicas: u32,
    pub port: u16,
    pub with_ingress: bool,
    pub with_config_map: bool,
    pub image_name: String,
    pub image_tag: String,
    pub service_type: ServiceType,
}

impl KubeOptions {
    /// `name:tag` reference used by the deployment.
    pub fn image(&self) -> String {
        format!("{}:{}", self.image_name, self.image_tag)
    }
}

impl Default for KubeOptions {
    fn default() -> Self {
        Self {
            namespace: "default".into(),
            replicas: 2,
            port: 3000,
            with_ingress: false,
            with_config_map: false,
            image_name: "nextjs-app".into(),
            image_tag: "latest".into(),
            service_type: ServiceType::ClusterIp,
        }
    }
}

// ── integrations ──────────────────────────────────────────────────────────────

/// Tooling integrations written into an existing project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationOptions {
    EslintPrettier(LintOptions),
    Prisma(PrismaOptions),
    Auth(AuthOptions),
    ShadcnUi(ShadcnOptions),
}

impl IntegrationOptions {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EslintPrettier(_) => "ESLint + Prettier",
            Self::Prisma(_) => "Prisma",
            Self::Auth(auth) => auth.flavor.display_name(),
            Self::ShadcnUi(_) => "shadcn/ui",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOptions {
    pub strict: bool,
    pub airbnb: bool,
    pub typescript: bool,
    pub with_scripts: bool,
    /// Extra patterns appended to both ignore files.
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismaOptions {
    pub provider: DbProvider,
    pub schema_path: String,
    pub with_seed: bool,
    pub push: bool,
    pub generate: bool,
}

impl Default for PrismaOptions {
    fn default() -> Self {
        Self {
            provider: DbProvider::Sqlite,
            schema_path: "prisma/schema.prisma".into(),
            with_seed: false,
            push: false,
            generate: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOptions {
    pub flavor: AuthFlavor,
    pub provider: Option<AuthProvider>,
    pub prisma: bool,
    pub session: SessionStrategy,
    pub env: bool,
    pub route: bool,
}

impl AuthOptions {
    pub fn new(flavor: AuthFlavor) -> Self {
        Self {
            flavor,
            provider: None,
            prisma: false,
            session: SessionStrategy::Jwt,
            env: false,
            route: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadcnOptions {
    pub components: Vec<String>,
    pub theme: String,
    pub dir: String,
    pub tailwind: bool,
}

impl Default for ShadcnOptions {
    fn default() -> Self {
        Self {
            components: Vec::new(),
            theme: "zinc".into(),
            dir: "src/components/ui".into(),
            tailwind: false,
        }
    }
}
