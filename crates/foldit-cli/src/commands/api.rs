//! Implementation of the `foldit generate-api` command.

use tracing::instrument;

use foldit_core::prelude::{ApiRouteOptions, HttpMethod, ScaffoldOptions, ScaffoldRequest};

use crate::{
    cli::{ApiArgs, GlobalArgs},
    config::AppConfig,
    error::{CliResult, ScaffoldContext},
    output::OutputManager,
};

const ACTION: &str = "generating API route";

#[instrument(skip_all, fields(route = %args.name))]
pub fn execute(
    args: ApiArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let options = build_options(&args, config)?;
    let request = ScaffoldRequest::named(args.name.clone(), ScaffoldOptions::ApiRoute(options.clone()));
    let report = super::scaffold(&request, global, config, output)?;

    let methods: Vec<&str> = options.methods.iter().map(HttpMethod::as_str).collect();
    output.print(&format!("Supported methods: {}", methods.join(", ")))?;
    if options.auth {
        output.success("Authentication middleware included")?;
    }
    if options.prisma {
        output.success("Prisma integration included")?;
    }
    if let Some(segment) = &options.dynamic {
        output.success(&format!("Dynamic route with parameter: {}", segment.param()))?;
        if segment.is_catch_all() {
            output.success("Catch-all route enabled")?;
        }
    }
    output.print(&format!("API route '{}' scaffold created!", args.name))?;
    super::print_pending(&report, output)
}

/// Methods come from `--methods`, falling back to `api.methods` in config.
pub fn build_options(args: &ApiArgs, config: &AppConfig) -> CliResult<ApiRouteOptions> {
    let list = args.methods.as_deref().unwrap_or(&config.api.methods);
    let methods = HttpMethod::parse_list(list).during(ACTION)?;
    let dynamic = super::page::dynamic_segment(&args.dynamic).during(ACTION)?;
    Ok(ApiRouteOptions {
        methods,
        auth: args.auth,
        prisma: args.prisma,
        dynamic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DynamicArgs;

    fn args(methods: Option<&str>) -> ApiArgs {
        ApiArgs {
            name: "posts".into(),
            methods: methods.map(str::to_owned),
            auth: true,
            prisma: false,
            dynamic: DynamicArgs {
                dynamic: None,
                catch_all: false,
            },
        }
    }

    #[test]
    fn methods_are_normalised() {
        let options = build_options(&args(Some("get,post,PUT,get")), &AppConfig::default()).unwrap();
        assert_eq!(
            options.methods,
            [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put]
        );
        assert!(options.auth);
    }

    #[test]
    fn config_supplies_default_methods() {
        let mut config = AppConfig::default();
        config.api.methods = "DELETE".into();
        let options = build_options(&args(None), &config).unwrap();
        assert_eq!(options.methods, [HttpMethod::Delete]);
    }

    #[test]
    fn unknown_method_is_a_usage_error() {
        let err = build_options(&args(Some("GET,FETCH")), &AppConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Error generating API route:"));
        assert!(err.to_string().contains("FETCH"));
    }
}
