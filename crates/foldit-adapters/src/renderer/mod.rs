//! Template rendering.

mod vars;

pub use vars::{Rendered, UnresolvedPlaceholder, Vars};

use tracing::{debug, instrument};

use foldit_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::Template,
    error::FolditResult,
};

use crate::templates::{api, auth, docker, kube, lint, page, prisma, service, shadcn};

/// Renders the descriptors produced by the planner with the bodies
/// compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for BuiltinRenderer {
    #[instrument(skip_all, fields(template = template.name()))]
    fn render(&self, template: &Template) -> FolditResult<String> {
        // An unresolved placeholder is a bug in the template table, not
        // something to write into the user's project.
        let text = render_builtin(template).map_err(|e| ApplicationError::RenderingFailed {
            template: template.name(),
            reason: e.to_string(),
        })?;

        debug!(bytes = text.len(), "Template rendered");
        Ok(text)
    }
}

fn render_builtin(template: &Template) -> Rendered {
    match template {
        Template::Page { entity, dynamic } => page::page(entity, dynamic.as_ref()),
        Template::PageTest { entity, dynamic } => page::page_test(entity, dynamic.as_ref()),
        Template::ComponentIndex { entity } => Ok(page::component_index(entity)),
        Template::ApiRoute { entity, options } => api::api_route(entity, options),

        Template::Service { entity, options } => service::service(entity, options),
        Template::ServiceTypes { entity } => service::service_types(entity),
        Template::AxiosConfig { options } => service::axios_config(options),

        Template::Gitkeep => Ok(String::new()),

        Template::Dockerfile(options) => docker::dockerfile(options),
        Template::DockerIgnore => Ok(docker::dockerignore()),
        Template::DockerCompose(options) => docker::compose(options),
        Template::KubeDeployment(options) => kube::deployment(options),
        Template::KubeService(options) => kube::service(options),
        Template::KubeIngress(options) => kube::ingress(options),
        Template::KubeConfigMap(options) => kube::config_map(options),

        Template::EslintConfig(options) => lint::eslint_config(options),
        Template::PrettierConfig => Ok(lint::prettier_config()),
        Template::EslintIgnore(options) => Ok(lint::eslint_ignore(options)),
        Template::PrettierIgnore(options) => Ok(lint::prettier_ignore(options)),

        Template::PrismaSchema { provider } => prisma::schema(*provider),
        Template::DatabaseEnv { provider } => Ok(prisma::database_env(*provider)),
        Template::PrismaClient => Ok(prisma::client()),
        Template::PrismaSeed => Ok(prisma::seed()),

        Template::AuthConfig(options) => auth::config(options),
        Template::AuthRoute { flavor } => Ok(auth::route(*flavor)),
        Template::AuthPrismaAdapter { flavor } => Ok(auth::prisma_adapter(*flavor)),
        Template::AuthPrismaModels { flavor } => auth::prisma_models(*flavor),
        Template::AuthEnv(options) => Ok(auth::env(options)),

        Template::ShadcnComponentsJson(options) => shadcn::components_json(options),
        Template::GlobalsCss { theme } => shadcn::globals_css(theme),
        Template::TailwindConfig => Ok(shadcn::tailwind_config()),
        Template::PostcssConfig => Ok(shadcn::postcss_config()),
        Template::CnUtils => Ok(shadcn::cn_utils()),
        Template::ShadcnComponent { name } => shadcn::component(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldit_core::domain::{
        ApiRouteOptions, AuthFlavor, AuthOptions, AuthProvider, DbProvider, DockerOptions,
        DynamicSegment, KubeOptions, LintOptions, ServiceOptions, ShadcnOptions,
    };

    /// One descriptor per variant, with the options that add the most text.
    fn every_template() -> Vec<Template> {
        let dynamic = Some(DynamicSegment::new("slug", true).unwrap());
        let service_options = ServiceOptions {
            with_types: true,
            with_interceptors: true,
            with_error_handling: true,
            with_auth: true,
            with_retry: true,
            with_cache: true,
            ..ServiceOptions::default()
        };
        let auth = AuthOptions {
            provider: Some(AuthProvider::Github),
            prisma: true,
            env: true,
            route: true,
            ..AuthOptions::new(AuthFlavor::BetterAuth)
        };
        let lint = LintOptions {
            strict: true,
            airbnb: true,
            typescript: true,
            with_scripts: true,
            ignore: vec!["tmp/".into()],
        };
        vec![
            Template::Page { entity: "blog".into(), dynamic: dynamic.clone() },
            Template::PageTest { entity: "blog".into(), dynamic: dynamic.clone() },
            Template::ComponentIndex { entity: "blog".into() },
            Template::ApiRoute {
                entity: "posts".into(),
                options: ApiRouteOptions {
                    auth: true,
                    prisma: true,
                    dynamic,
                    ..ApiRouteOptions::default()
                },
            },
            Template::Service { entity: "user".into(), options: service_options.clone() },
            Template::ServiceTypes { entity: "user".into() },
            Template::AxiosConfig { options: service_options },
            Template::Gitkeep,
            Template::Dockerfile(DockerOptions { production: true, ..DockerOptions::default() }),
            Template::DockerIgnore,
            Template::DockerCompose(DockerOptions::default()),
            Template::KubeDeployment(KubeOptions::default()),
            Template::KubeService(KubeOptions::default()),
            Template::KubeIngress(KubeOptions::default()),
            Template::KubeConfigMap(KubeOptions::default()),
            Template::EslintConfig(lint.clone()),
            Template::PrettierConfig,
            Template::EslintIgnore(lint.clone()),
            Template::PrettierIgnore(lint),
            Template::PrismaSchema { provider: DbProvider::Mongodb },
            Template::DatabaseEnv { provider: DbProvider::Postgresql },
            Template::PrismaClient,
            Template::PrismaSeed,
            Template::AuthConfig(auth.clone()),
            Template::AuthRoute { flavor: AuthFlavor::NextAuth },
            Template::AuthPrismaAdapter { flavor: AuthFlavor::NextAuth },
            Template::AuthPrismaModels { flavor: AuthFlavor::BetterAuth },
            Template::AuthEnv(auth),
            Template::ShadcnComponentsJson(ShadcnOptions::default()),
            Template::GlobalsCss { theme: "zinc".into() },
            Template::TailwindConfig,
            Template::PostcssConfig,
            Template::CnUtils,
            Template::ShadcnComponent { name: "button".into() },
        ]
    }

    #[test]
    fn no_builtin_leaves_a_placeholder_behind() {
        let renderer = BuiltinRenderer::new();
        for template in every_template() {
            if let Err(e) = renderer.render(&template) {
                panic!("{template} failed to render: {e}");
            }
        }
    }

    #[test]
    fn user_values_that_look_like_placeholders_are_kept() {
        let renderer = BuiltinRenderer::new();
        let page = renderer
            .render(&Template::Page { entity: "{{SLUG}}".into(), dynamic: None })
            .unwrap();
        assert!(page.contains("<h1>{{SLUG}}</h1>"));

        let component = renderer
            .render(&Template::ShadcnComponent { name: "{{X}}".into() })
            .unwrap();
        assert!(component.contains("{{X}}Variants"));
    }

    #[test]
    fn gitkeep_is_empty() {
        assert_eq!(BuiltinRenderer::new().render(&Template::Gitkeep).unwrap(), "");
    }
}
