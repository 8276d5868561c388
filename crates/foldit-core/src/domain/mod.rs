//! Core domain layer for FoldIt.
//!
//! Pure logic only: value objects, route resolution, requests, template
//! descriptors and plans. Nothing here touches the filesystem or spawns a
//! process; that happens behind the ports in `crate::application`.
//!
//! ## Layering
//!
//! - **No I/O**: planning is a pure function of the request
//! - **Immutable**: requests, plans and rendered artifacts are never mutated
//!   after construction
//! - **Closed sets**: every option with a fixed vocabulary is an enum

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    artifact::{RenderedArtifact, WriteMode},
    common::{RelativePath, capitalize},
    plan::{
        ArtifactRole, InstallStep, ManifestPatch, PlannedArtifact, PlannedDirectory,
        ScaffoldPlan, ToolCommand,
    },
    request::{
        ApiRouteOptions, AuthOptions, DockerOptions, IntegrationOptions, KubeOptions,
        LintOptions, PageOptions, PrismaOptions, ScaffoldOptions, ScaffoldRequest,
        ServiceOptions, ShadcnOptions, StructureOptions,
    },
    route::{DynamicSegment, RoutePath, RouteSegment},
    template::Template,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    ArtifactKind, AuthFlavor, AuthProvider, DbProvider, HttpMethod, PackageManager,
    ServiceType, SessionStrategy, StructureType,
};
