//! Implementation of the `foldit dockerize` command.

use tracing::instrument;

use foldit_core::prelude::{DockerOptions, ScaffoldOptions, ScaffoldRequest};

use crate::{
    cli::{DockerArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: DockerArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let options = build_options(&args, config);
    let request = ScaffoldRequest::unnamed(ScaffoldOptions::Docker(options.clone()));
    let report = super::scaffold(&request, global, config, output)?;

    output.print("")?;
    output.success("Docker configuration complete!")?;
    output.list("Next steps:", &next_steps(&options))?;
    super::print_pending(&report, output)
}

/// Flags win over `docker.*` config values.
pub fn build_options(args: &DockerArgs, config: &AppConfig) -> DockerOptions {
    DockerOptions {
        node_version: args
            .node_version
            .clone()
            .unwrap_or_else(|| config.docker.node_version.clone()),
        port: args.port.unwrap_or(config.docker.port),
        with_compose: args.with_compose,
        with_ignore: !args.no_ignore,
        production: args.production,
    }
}

fn next_steps(options: &DockerOptions) -> Vec<String> {
    let port = options.port;
    let mut steps = vec![
        "Build image: docker build -t your-app .".to_owned(),
        format!("Run container: docker run -p {port}:{port} your-app"),
    ];
    if options.with_compose {
        steps.push("Or use Docker Compose: docker-compose up".into());
    }
    steps
}
