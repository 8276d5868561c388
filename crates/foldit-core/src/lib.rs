//! FoldIt Core - domain and application layers.
//!
//! FoldIt scaffolds pieces of a Next.js App Router project: pages, API
//! routes, services, folder layouts, container manifests and tooling
//! integrations. This crate decides what to write and drives the writing
//! through ports; `foldit-adapters` supplies the real implementations.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           foldit-cli (CLI)              │
//! │   parses args into ScaffoldRequests     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ScaffoldService, Materializer          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  Filesystem, TemplateRenderer,          │
//! │  PackageInstaller, CommandRunner,       │
//! │  Reporter                               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    foldit-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  RoutePath, ScaffoldRequest,            │
//! │  ScaffoldPlan, Template                 │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use foldit_core::prelude::*;
//!
//! # fn run(service: ScaffoldService, ctx: ExecutionContext) -> FolditResult<()> {
//! let request = ScaffoldRequest::named("about", ScaffoldOptions::Page(PageOptions::default()));
//! let report = service.scaffold(&request, &ctx)?;
//! assert_eq!(report.written().count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// What external crates should use.
pub mod prelude {
    pub use crate::application::{
        ExecutionContext, ScaffoldReport, ScaffoldService,
        ports::{CommandRunner, Filesystem, PackageInstaller, Reporter, TemplateRenderer},
    };
    pub use crate::domain::{
        ApiRouteOptions, AuthFlavor, AuthOptions, DockerOptions, DynamicSegment, HttpMethod,
        IntegrationOptions, KubeOptions, LintOptions, PackageManager, PageOptions,
        PrismaOptions, ScaffoldOptions, ScaffoldPlan, ScaffoldRequest, ServiceOptions,
        ShadcnOptions, StructureOptions, StructureType, Template,
    };
    pub use crate::error::{ErrorCategory, FolditError, FolditResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
