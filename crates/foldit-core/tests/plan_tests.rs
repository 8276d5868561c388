//! Planning through the public API only.

use std::path::Path;

use foldit_core::prelude::*;

fn paths(plan: &ScaffoldPlan) -> Vec<String> {
    plan.artifacts.iter().map(|a| a.path.to_string()).collect()
}

#[test]
fn nested_dynamic_api_route_resolves_under_api_root() {
    let request = ScaffoldRequest::named(
        "admin/users",
        ScaffoldOptions::ApiRoute(ApiRouteOptions {
            methods: HttpMethod::parse_list("get,post,get").unwrap(),
            dynamic: Some(DynamicSegment::new("id", false).unwrap()),
            ..ApiRouteOptions::default()
        }),
    );
    let plan = ScaffoldPlan::for_request(&request).unwrap();

    assert_eq!(paths(&plan), ["src/app/api/admin/users/[id]/route.ts"]);
    assert_eq!(
        plan.guard.as_ref().map(|g| g.as_path()),
        Some(Path::new("src/app/api/admin/users/[id]"))
    );
    match &plan.artifacts[0].template {
        Template::ApiRoute { entity, options } => {
            assert_eq!(entity, "users");
            assert_eq!(options.methods.len(), 2);
        }
        other => panic!("unexpected template {other}"),
    }
}

#[test]
fn parent_directory_names_are_rejected() {
    let request = ScaffoldRequest::named("../outside", ScaffoldOptions::Page(PageOptions::default()));
    let err = ScaffoldPlan::for_request(&request).unwrap_err();
    assert_eq!(FolditError::from(err).category(), ErrorCategory::Validation);
}

#[test]
fn kube_plan_respects_optional_manifests() {
    let request = ScaffoldRequest::unnamed(ScaffoldOptions::Kube(KubeOptions {
        with_ingress: true,
        ..KubeOptions::default()
    }));
    let plan = ScaffoldPlan::for_request(&request).unwrap();
    assert_eq!(
        paths(&plan),
        ["k8s/deployment.yaml", "k8s/service.yaml", "k8s/ingress.yaml"]
    );
    assert_eq!(plan.required.as_ref().map(ToString::to_string).as_deref(), Some("package.json"));
}
