//! Implementation of the `foldit generate-page` command.

use tracing::instrument;

use foldit_core::prelude::{DynamicSegment, PageOptions, ScaffoldOptions, ScaffoldRequest};

use crate::{
    cli::{DynamicArgs, GlobalArgs, PageArgs},
    config::AppConfig,
    error::{CliResult, ScaffoldContext},
    output::OutputManager,
};

pub(crate) const ACTION: &str = "generating page scaffold";

#[instrument(skip_all, fields(page = %args.name))]
pub fn execute(
    args: PageArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let request = build_request(&args)?;
    let report = super::scaffold(&request, global, config, output)?;

    if let Some(segment) = dynamic_of(&request) {
        output.success(&format!("Dynamic route with parameter: {}", segment.param()))?;
        if segment.is_catch_all() {
            output.success("Catch-all route enabled")?;
        }
    }
    output.print(&format!("Page '{}' scaffold created!", args.name))?;
    super::print_pending(&report, output)
}

pub fn build_request(args: &PageArgs) -> CliResult<ScaffoldRequest> {
    let dynamic = dynamic_segment(&args.dynamic).during(ACTION)?;
    Ok(ScaffoldRequest::named(
        args.name.clone(),
        ScaffoldOptions::Page(PageOptions {
            with_component: args.with_component,
            with_test: args.with_test,
            dynamic,
        }),
    ))
}

/// Validate the `--dynamic` / `--catch-all` pair.
pub(crate) fn dynamic_segment(
    args: &DynamicArgs,
) -> Result<Option<DynamicSegment>, foldit_core::domain::DomainError> {
    DynamicSegment::from_flags(args.dynamic.as_deref(), args.catch_all)
}

fn dynamic_of(request: &ScaffoldRequest) -> Option<&DynamicSegment> {
    match request.options() {
        ScaffoldOptions::Page(page) => page.dynamic.as_ref(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args(dynamic: Option<&str>, catch_all: bool) -> PageArgs {
        PageArgs {
            name: "blog".into(),
            with_component: false,
            with_test: true,
            dynamic: DynamicArgs {
                dynamic: dynamic.map(str::to_owned),
                catch_all,
            },
        }
    }

    #[test]
    fn request_carries_flags() {
        let request = build_request(&args(Some("slug"), true)).unwrap();
        assert_eq!(request.name(), "blog");
        let ScaffoldOptions::Page(page) = request.options() else {
            panic!("expected page options");
        };
        assert!(page.with_test);
        let segment = page.dynamic.as_ref().unwrap();
        assert_eq!(segment.param(), "slug");
        assert!(segment.is_catch_all());
    }

    #[test]
    fn catch_all_without_dynamic_is_rejected() {
        let err = build_request(&args(None, true)).unwrap_err();
        assert!(matches!(err, CliError::Scaffold { action: ACTION, .. }));
        assert!(err.to_string().contains("--catch-all requires --dynamic"));
    }
}
