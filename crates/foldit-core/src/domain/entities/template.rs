//! Template descriptors.
//!
//! A [`Template`] names one renderable file body together with every value
//! the body depends on. Descriptors are produced by the planner and turned
//! into text by a `TemplateRenderer` adapter; nothing here produces strings
//! beyond the descriptor's own name.

use std::fmt;

use crate::domain::{
    ApiRouteOptions, AuthFlavor, AuthOptions, DbProvider, DockerOptions, DynamicSegment,
    KubeOptions, LintOptions, ServiceOptions, ShadcnOptions,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    // ── app router ────────────────────────────────────────────────────────
    Page {
        entity: String,
        dynamic: Option<DynamicSegment>,
    },
    PageTest {
        entity: String,
        dynamic: Option<DynamicSegment>,
    },
    ComponentIndex {
        entity: String,
    },
    ApiRoute {
        entity: String,
        options: ApiRouteOptions,
    },

    // ── services ──────────────────────────────────────────────────────────
    Service {
        entity: String,
        options: ServiceOptions,
    },
    ServiceTypes {
        entity: String,
    },
    AxiosConfig {
        options: ServiceOptions,
    },

    // ── structure ─────────────────────────────────────────────────────────
    Gitkeep,

    // ── containers ────────────────────────────────────────────────────────
    Dockerfile(DockerOptions),
    DockerIgnore,
    DockerCompose(DockerOptions),
    KubeDeployment(KubeOptions),
    KubeService(KubeOptions),
    KubeIngress(KubeOptions),
    KubeConfigMap(KubeOptions),

    // ── lint ──────────────────────────────────────────────────────────────
    EslintConfig(LintOptions),
    PrettierConfig,
    EslintIgnore(LintOptions),
    PrettierIgnore(LintOptions),

    // ── prisma ────────────────────────────────────────────────────────────
    PrismaSchema {
        provider: DbProvider,
    },
    DatabaseEnv {
        provider: DbProvider,
    },
    PrismaClient,
    PrismaSeed,

    // ── auth ──────────────────────────────────────────────────────────────
    AuthConfig(AuthOptions),
    AuthRoute {
        flavor: AuthFlavor,
    },
    AuthPrismaAdapter {
        flavor: AuthFlavor,
    },
    AuthPrismaModels {
        flavor: AuthFlavor,
    },
    AuthEnv(AuthOptions),

    // ── shadcn/ui ─────────────────────────────────────────────────────────
    ShadcnComponentsJson(ShadcnOptions),
    GlobalsCss {
        theme: String,
    },
    TailwindConfig,
    PostcssConfig,
    CnUtils,
    ShadcnComponent {
        name: String,
    },
}

impl Template {
    /// Stable identifier used in logs and rendering errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Page { .. } => "page",
            Self::PageTest { .. } => "page-test",
            Self::ComponentIndex { .. } => "component-index",
            Self::ApiRoute { .. } => "api-route",
            Self::Service { .. } => "service",
            Self::ServiceTypes { .. } => "service-types",
            Self::AxiosConfig { .. } => "axios-config",
            Self::Gitkeep => "gitkeep",
            Self::Dockerfile(_) => "dockerfile",
            Self::DockerIgnore => "dockerignore",
            Self::DockerCompose(_) => "docker-compose",
            Self::KubeDeployment(_) => "kube-deployment",
            Self::KubeService(_) => "kube-service",
            Self::KubeIngress(_) => "kube-ingress",
            Self::KubeConfigMap(_) => "kube-configmap",
            Self::EslintConfig(_) => "eslint-config",
            Self::PrettierConfig => "prettier-config",
            Self::EslintIgnore(_) => "eslint-ignore",
            Self::PrettierIgnore(_) => "prettier-ignore",
            Self::PrismaSchema { .. } => "prisma-schema",
            Self::DatabaseEnv { .. } => "database-env",
            Self::PrismaClient => "prisma-client",
            Self::PrismaSeed => "prisma-seed",
            Self::AuthConfig(_) => "auth-config",
            Self::AuthRoute { .. } => "auth-route",
            Self::AuthPrismaAdapter { .. } => "auth-prisma-adapter",
            Self::AuthPrismaModels { .. } => "auth-prisma-models",
            Self::AuthEnv(_) => "auth-env",
            Self::ShadcnComponentsJson(_) => "shadcn-components-json",
            Self::GlobalsCss { .. } => "globals-css",
            Self::TailwindConfig => "tailwind-config",
            Self::PostcssConfig => "postcss-config",
            Self::CnUtils => "cn-utils",
            Self::ShadcnComponent { .. } => "shadcn-component",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
