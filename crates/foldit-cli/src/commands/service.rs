//! Implementation of the `foldit generate-service` command.

use tracing::instrument;

use foldit_core::{
    domain::{ArtifactKind, DomainError, RoutePath},
    prelude::{ScaffoldOptions, ScaffoldRequest, ServiceOptions},
};

use crate::{
    cli::{GlobalArgs, ServiceArgs},
    config::AppConfig,
    error::{CliResult, ScaffoldContext},
    output::OutputManager,
};

#[instrument(skip_all, fields(service = %args.name))]
pub fn execute(
    args: ServiceArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let request = build_request(&args);
    let report = super::scaffold(&request, global, config, output)?;

    let usage = usage_example(&args.name).during(request.action())?;
    output.print("")?;
    output.success(&format!("Service '{}' generated successfully!", args.name))?;
    output.list("Usage example:", &usage)?;
    super::print_pending(&report, output)
}

/// Import and call lines for the generated singleton. Nested names import
/// from their sub-directory but the identifier is the entity alone.
fn usage_example(name: &str) -> Result<Vec<String>, DomainError> {
    let route = RoutePath::resolve(ArtifactKind::Service, name, None)?;
    let entity = route.entity_name();
    let segments = route.segments();
    let namespace: String = segments[..segments.len().saturating_sub(1)]
        .iter()
        .map(|segment| format!("/{segment}"))
        .collect();
    Ok(vec![
        format!("import {{ {entity}Service }} from '@/services{namespace}/{entity}Service';"),
        format!("const data = await {entity}Service.getAll();"),
    ])
}

pub fn build_request(args: &ServiceArgs) -> ScaffoldRequest {
    ScaffoldRequest::named(
        args.name.clone(),
        ScaffoldOptions::Service(ServiceOptions {
            base_url: args.base_url.clone(),
            with_types: args.with_types,
            with_interceptors: args.with_interceptors,
            with_error_handling: args.with_error_handling,
            with_auth: args.with_auth,
            with_retry: args.with_retry,
            with_cache: args.with_cache,
            max_retries: args.max_retries,
            retry_delay_ms: args.retry_delay,
        }),
    )
}
