//! Implementation of the `foldit add-kube` command.

use tracing::instrument;

use foldit_core::{
    domain::ServiceType,
    prelude::{KubeOptions, ScaffoldOptions, ScaffoldRequest},
};

use crate::{
    cli::{GlobalArgs, KubeArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: KubeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let options = build_options(&args, config);
    let request = ScaffoldRequest::unnamed(ScaffoldOptions::Kube(options.clone()));
    let report = super::scaffold(&request, global, config, output)?;

    output.print("")?;
    output.success("Kubernetes configuration complete!")?;
    output.list("Next steps:", &next_steps(&options))?;
    super::print_pending(&report, output)
}

/// Flags win over `kube.*` config values.
pub fn build_options(args: &KubeArgs, config: &AppConfig) -> KubeOptions {
    let defaults = &config.kube;
    KubeOptions {
        namespace: args
            .namespace
            .clone()
            .unwrap_or_else(|| defaults.namespace.clone()),
        replicas: args.replicas.unwrap_or(defaults.replicas),
        port: args.port.unwrap_or(defaults.port),
        with_ingress: args.with_ingress,
        with_config_map: args.with_config_map,
        image_name: args
            .image_name
            .clone()
            .unwrap_or_else(|| defaults.image_name.clone()),
        image_tag: args
            .image_tag
            .clone()
            .unwrap_or_else(|| defaults.image_tag.clone()),
        service_type: args.service_type.map(ServiceType::from).unwrap_or_default(),
    }
}

fn next_steps(options: &KubeOptions) -> Vec<String> {
    let mut steps = vec![
        "Apply deployment: kubectl apply -f k8s/deployment.yaml".to_owned(),
        "Apply service: kubectl apply -f k8s/service.yaml".to_owned(),
    ];
    if options.with_ingress {
        steps.push("Apply ingress: kubectl apply -f k8s/ingress.yaml".into());
    }
    if options.with_config_map {
        steps.push("Apply configmap: kubectl apply -f k8s/configmap.yaml".into());
    }
    steps.push(format!("Check status: kubectl get pods -n {}", options.namespace));
    steps
}
