//! Scaffold Service - the command orchestrator.
//!
//! Every command runs the same pipeline:
//! 1. Plan the request (pure, may fail validation)
//! 2. Guard: required project files present, primary target absent
//! 3. Render every artifact; nothing has been written yet
//! 4. Write each artifact in plan order, reporting each one
//! 5. Patch `package.json`, install packages, run follow-up tools
//!
//! Failures in steps 1-3 leave the project untouched. A failure in step 4
//! stops the command; files already written stay on disk. Step 5 never fails
//! the command; problems become warnings with the manual command to run.
//! With auto-install off, installs and follow-up tools are only listed.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ExecutionContext,
        ports::{CommandRunner, Filesystem, PackageInstaller, Reporter, TemplateRenderer},
        services::{
            manifest,
            materializer::{MaterializationResult, Materializer, Outcome},
        },
    },
    domain::{
        ArtifactRole, InstallStep, ManifestPatch, PlannedArtifact, RenderedArtifact,
        ScaffoldPlan, ScaffoldRequest, ToolCommand, WriteMode,
    },
    error::FolditResult,
};

/// What a finished command did.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub results: Vec<MaterializationResult>,
    /// Post-write steps that failed or were skipped; each is a command the
    /// user still has to run.
    pub pending_commands: Vec<String>,
}

impl ScaffoldReport {
    /// Paths written by this run (created or updated).
    pub fn written(&self) -> impl Iterator<Item = &MaterializationResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Created | Outcome::Updated))
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Arc<dyn Filesystem>,
    installer: Box<dyn PackageInstaller>,
    runner: Box<dyn CommandRunner>,
    reporter: Box<dyn Reporter>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Arc<dyn Filesystem>,
        installer: Box<dyn PackageInstaller>,
        runner: Box<dyn CommandRunner>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            installer,
            runner,
            reporter,
        }
    }

    /// Plan and execute a request.
    #[instrument(skip_all, fields(kind = %request.kind(), name = %request.name()))]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        ctx: &ExecutionContext,
    ) -> FolditResult<ScaffoldReport> {
        let plan = ScaffoldPlan::for_request(request)?;
        debug!(
            artifacts = plan.artifacts.len(),
            installs = plan.installs.len(),
            "Plan resolved"
        );
        self.execute(&plan, ctx)
    }

    /// Execute an already resolved plan.
    pub fn execute(
        &self,
        plan: &ScaffoldPlan,
        ctx: &ExecutionContext,
    ) -> FolditResult<ScaffoldReport> {
        self.guard(plan, ctx)?;
        let rendered = self.render_all(plan)?;

        let materializer = Materializer::new(Arc::clone(&self.filesystem), ctx.cwd());
        for dir in &plan.directories {
            materializer.create_dir(&dir.path)?;
            self.reporter
                .success(&format!("Created {}: {}", dir.label, dir.path));
        }

        let mut report = ScaffoldReport::default();

        for (planned, artifact) in plan.artifacts.iter().zip(&rendered) {
            let result = materializer.materialize(artifact);

            match &result.outcome {
                Outcome::Failed(e) => {
                    warn!(path = %result.path, error = %e, "Write failed, aborting");
                    return Err(e.clone());
                }
                Outcome::SkippedExists if planned.role == ArtifactRole::Primary => {
                    return Err(ApplicationError::AlreadyExists {
                        path: result.path.as_path().to_path_buf(),
                    }
                    .into());
                }
                _ => self.report_artifact(planned, artifact, &result),
            }
            report.results.push(result);
        }

        if let Some(patch) = &plan.manifest {
            self.patch_manifest(patch, ctx);
        }

        for step in &plan.installs {
            if let Some(pending) = self.install(step, ctx) {
                report.pending_commands.push(pending);
            }
        }

        for command in &plan.commands {
            if let Some(pending) = self.run_tool(command, ctx) {
                report.pending_commands.push(pending);
            }
        }

        info!(written = report.written().count(), "Scaffold completed");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render_all(&self, plan: &ScaffoldPlan) -> FolditResult<Vec<RenderedArtifact>> {
        plan.artifacts
            .iter()
            .map(|planned| {
                let content = self.renderer.render(&planned.template)?;
                Ok(RenderedArtifact::new(
                    planned.path.clone(),
                    content,
                    planned.write_mode.clone(),
                ))
            })
            .collect()
    }

    fn guard(&self, plan: &ScaffoldPlan, ctx: &ExecutionContext) -> FolditResult<()> {
        if let Some(required) = &plan.required {
            if !self.filesystem.exists(&required.under(ctx.cwd())) {
                return Err(ApplicationError::MissingProjectFile {
                    path: required.as_path().to_path_buf(),
                }
                .into());
            }
        }

        if let Some(guard) = &plan.guard {
            if self.filesystem.exists(&guard.under(ctx.cwd())) {
                return Err(ApplicationError::AlreadyExists {
                    path: guard.as_path().to_path_buf(),
                }
                .into());
            }
        }

        if let Some(path) = plan
            .warn_if_exists
            .as_ref()
            .filter(|p| self.filesystem.exists(&p.under(ctx.cwd())))
        {
            self.reporter.warning(&format!(
                "{path} directory already exists. Some directories may already exist."
            ));
        }
        Ok(())
    }

    fn report_artifact(
        &self,
        planned: &PlannedArtifact,
        artifact: &RenderedArtifact,
        result: &MaterializationResult,
    ) {
        let shown = if planned.announce_dir {
            result.path.parent()
        } else {
            result.path.clone()
        };

        match &result.outcome {
            Outcome::Created => self
                .reporter
                .success(&format!("Created {}: {shown}", planned.label)),
            Outcome::Updated => self
                .reporter
                .success(&format!("Updated {}: {shown}", planned.label)),
            Outcome::SkippedExists => match artifact.write_mode() {
                WriteMode::Append { marker, .. } | WriteMode::Prepend { marker } => self
                    .reporter
                    .info(&format!("{} already contains {marker}, skipped", result.path)),
                _ => self
                    .reporter
                    .info(&format!("{} already exists, kept as is", result.path)),
            },
            Outcome::SkippedMissing => {
                self.reporter
                    .warning(&format!("{} not found", result.path));
                self.reporter.note(
                    &format!("Add the following {} to {}:", planned.label, result.path),
                    artifact.content(),
                );
            }
            Outcome::Failed(_) => {}
        }
    }

    fn patch_manifest(&self, patch: &ManifestPatch, ctx: &ExecutionContext) {
        if patch.is_empty() {
            return;
        }
        let path = ctx.cwd().join("package.json");

        let text = match self.filesystem.read_to_string(&path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                self.reporter.info(&format!(
                    "package.json not found, skipping {}",
                    patch.label
                ));
                return;
            }
            Err(e) => {
                self.reporter
                    .warning(&format!("Could not read package.json: {e}"));
                return;
            }
        };

        let updated = match manifest::apply_patch(&text, patch) {
            Ok(updated) => updated,
            Err(reason) => {
                let err = ApplicationError::ManifestUnreadable {
                    path: Path::new("package.json").to_path_buf(),
                    reason,
                };
                debug!(error = %err, "Manifest patch skipped");
                self.reporter
                    .info(&format!("{err}, skipping {}", patch.label));
                return;
            }
        };

        match self.filesystem.write_file(&path, &updated) {
            Ok(()) => self
                .reporter
                .success(&format!("Added {} to package.json", patch.label)),
            Err(e) => self
                .reporter
                .warning(&format!("Could not update package.json: {e}")),
        }
    }

    /// Returns the manual command when the install did not happen.
    fn install(&self, step: &InstallStep, ctx: &ExecutionContext) -> Option<String> {
        let command = step.command(ctx.package_manager()).to_string();

        if !ctx.auto_install() {
            self.reporter
                .info(&format!("Skipping install, run manually: {command}"));
            return Some(command);
        }

        self.reporter.info(&format!("Running: {command}"));
        match self.installer.install(ctx.cwd(), ctx.package_manager(), step) {
            Ok(()) => {
                self.reporter.success("Dependencies installed");
                None
            }
            Err(e) => {
                warn!(error = %e, "Install failed");
                self.reporter.warning(&format!(
                    "Failed to install {}: {e}",
                    step.packages.join(", ")
                ));
                self.reporter
                    .info(&format!("Please run manually: {command}"));
                Some(command)
            }
        }
    }

    /// Tools depend on the installed packages, so they follow the same
    /// auto-install switch.
    fn run_tool(&self, command: &ToolCommand, ctx: &ExecutionContext) -> Option<String> {
        if !ctx.auto_install() {
            self.reporter
                .info(&format!("Skipping {}, run manually: {command}", command.description));
            return Some(command.to_string());
        }

        self.reporter.info(&format!("Running: {command}"));
        match self.runner.run(ctx.cwd(), command) {
            Ok(()) => {
                self.reporter.success(&format!("Finished: {command}"));
                None
            }
            Err(e) => {
                warn!(error = %e, "Tool command failed");
                self.reporter
                    .warning(&format!("Failed to {}: {e}", command.description));
                self.reporter
                    .info(&format!("Please run manually: {command}"));
                Some(command.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockCommandRunner, MockPackageInstaller, MockTemplateRenderer,
    };
    use crate::application::services::testing::{FakeFilesystem, RecordingReporter};
    use crate::domain::{
        DockerOptions, IntegrationOptions, PackageManager, PageOptions, PrismaOptions,
        ScaffoldOptions, ServiceOptions, StructureOptions, StructureType,
    };
    use crate::error::FolditError;

    struct Harness {
        fs: Arc<FakeFilesystem>,
        reporter: RecordingReporter,
        service: ScaffoldService,
    }

    fn harness(installer: MockPackageInstaller, runner: MockCommandRunner) -> Harness {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|template| Ok(format!("// {}", template.name())));
        harness_with(renderer, installer, runner)
    }

    fn harness_with(
        renderer: MockTemplateRenderer,
        installer: MockPackageInstaller,
        runner: MockCommandRunner,
    ) -> Harness {
        let fs = Arc::new(FakeFilesystem::default());
        let reporter = RecordingReporter::default();
        let service = ScaffoldService::new(
            Box::new(renderer),
            fs.clone(),
            Box::new(installer),
            Box::new(runner),
            Box::new(reporter.clone()),
        );
        Harness {
            fs,
            reporter,
            service,
        }
    }

    fn quiet_harness() -> Harness {
        harness(MockPackageInstaller::new(), MockCommandRunner::new())
    }

    fn ctx() -> ExecutionContext {
        ExecutionContext::new("/work", PackageManager::Npm)
    }

    fn page(name: &str, opts: PageOptions) -> ScaffoldRequest {
        ScaffoldRequest::named(name, ScaffoldOptions::Page(opts))
    }

    #[test]
    fn page_is_written_and_reported() {
        let h = quiet_harness();
        let report = h
            .service
            .scaffold(&page("about", PageOptions::default()), &ctx())
            .unwrap();

        assert_eq!(report.written().count(), 1);
        assert_eq!(
            h.fs.read("/work/src/app/about/page.tsx").as_deref(),
            Some("// page")
        );
        assert!(h.reporter.contains("Created page: src/app/about/page.tsx"));
    }

    #[test]
    fn existing_page_directory_is_a_conflict_with_no_writes() {
        let h = quiet_harness();
        h.fs.seed_dir("/work/src/app/about");

        let err = h
            .service
            .scaffold(&page("about", PageOptions::default()), &ctx())
            .unwrap_err();

        assert!(err.is_conflict());
        assert!(err.to_string().contains("src/app/about"));
        assert_eq!(h.fs.file_count(), 0);
    }

    #[test]
    fn second_run_fails_after_first_succeeds() {
        let h = quiet_harness();
        let request = page("blog", PageOptions::default());
        h.service.scaffold(&request, &ctx()).unwrap();
        let files_after_first = h.fs.file_count();

        assert!(h.service.scaffold(&request, &ctx()).is_err());
        assert_eq!(h.fs.file_count(), files_after_first);
    }

    #[test]
    fn secondary_failure_aborts_but_keeps_primary() {
        let h = quiet_harness();
        h.fs.seed("/work/.dockerignore", "mine");
        h.fs.seed("/work/package.json", "{}");
        let request = ScaffoldRequest::unnamed(ScaffoldOptions::Docker(DockerOptions::default()));

        let err = h.service.scaffold(&request, &ctx()).unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(err.to_string(), ".dockerignore already exists");
        assert!(h.fs.read("/work/Dockerfile").is_some());
        assert_eq!(h.fs.read("/work/.dockerignore").as_deref(), Some("mine"));
    }

    #[test]
    fn docker_without_package_json_is_rejected() {
        let h = quiet_harness();
        let request = ScaffoldRequest::unnamed(ScaffoldOptions::Docker(DockerOptions::default()));

        let err = h.service.scaffold(&request, &ctx()).unwrap_err();

        assert!(matches!(
            err,
            FolditError::Application(ApplicationError::MissingProjectFile { .. })
        ));
        assert_eq!(h.fs.file_count(), 0);
    }

    #[test]
    fn structure_warns_when_src_exists() {
        let h = quiet_harness();
        h.fs.seed_dir("/work/src");
        let request = ScaffoldRequest::unnamed(ScaffoldOptions::Structure(StructureOptions {
            structure: StructureType::Basic,
        }));

        h.service.scaffold(&request, &ctx()).unwrap();

        assert!(h.reporter.contains("warning: src directory already exists"));
        assert!(h.reporter.contains("Created directory: src/components"));
    }

    #[test]
    fn install_failure_is_only_a_warning() {
        let mut installer = MockPackageInstaller::new();
        installer.expect_install().times(1).returning(|_, _, _| {
            Err(ApplicationError::CommandFailed {
                command: "npm install --save axios".into(),
                reason: "exit status 1".into(),
            }
            .into())
        });
        let h = harness(installer, MockCommandRunner::new());
        let request = ScaffoldRequest::named(
            "user",
            ScaffoldOptions::Service(ServiceOptions::default()),
        );

        let report = h.service.scaffold(&request, &ctx()).unwrap();

        assert_eq!(report.pending_commands, vec!["npm install --save axios"]);
        assert!(h.reporter.contains("Please run manually: npm install --save axios"));
    }

    #[test]
    fn auto_install_disabled_skips_installer() {
        let h = quiet_harness();
        let request = ScaffoldRequest::named(
            "user",
            ScaffoldOptions::Service(ServiceOptions::default()),
        );

        let report = h
            .service
            .scaffold(&request, &ctx().with_auto_install(false))
            .unwrap();

        assert_eq!(report.pending_commands.len(), 1);
    }

    #[test]
    fn render_failure_writes_nothing() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|template| match template.name() {
            "page-test" => Err(ApplicationError::RenderingFailed {
                template: "page-test",
                reason: "broken".into(),
            }
            .into()),
            name => Ok(format!("// {name}")),
        });
        let h = harness_with(renderer, MockPackageInstaller::new(), MockCommandRunner::new());
        let request = page(
            "about",
            PageOptions {
                with_test: true,
                with_component: true,
                ..PageOptions::default()
            },
        );

        assert!(h.service.scaffold(&request, &ctx()).is_err());
        assert_eq!(h.fs.file_count(), 0);
        assert!(h.reporter.lines().is_empty());
    }

    #[test]
    fn auto_install_disabled_skips_tools() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(0);
        let h = harness(MockPackageInstaller::new(), runner);
        h.fs.seed("/work/package.json", r#"{"name":"app"}"#);

        let request = ScaffoldRequest::unnamed(ScaffoldOptions::Integration(
            IntegrationOptions::Prisma(PrismaOptions {
                push: true,
                generate: true,
                ..PrismaOptions::default()
            }),
        ));
        let report = h
            .service
            .scaffold(&request, &ctx().with_auto_install(false))
            .unwrap();

        assert!(report.pending_commands.iter().any(|c| c == "npx prisma db push"));
        assert!(report.pending_commands.iter().any(|c| c == "npx prisma generate"));
        assert!(h.reporter.contains("run manually: npx prisma generate"));
    }

    #[test]
    fn prisma_patches_manifest_and_runs_tools() {
        let mut installer = MockPackageInstaller::new();
        installer.expect_install().returning(|_, _, _| Ok(()));
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, cmd| cmd.to_string() == "npx prisma generate")
            .times(1)
            .returning(|_, _| Ok(()));
        let h = harness(installer, runner);
        h.fs.seed("/work/package.json", r#"{"name":"app"}"#);
        h.fs.seed("/work/.env", "DATABASE_URL=\"file:./dev.db\"");

        let request = ScaffoldRequest::unnamed(ScaffoldOptions::Integration(
            IntegrationOptions::Prisma(PrismaOptions {
                generate: true,
                ..PrismaOptions::default()
            }),
        ));
        let report = h.service.scaffold(&request, &ctx()).unwrap();

        let manifest = h.fs.read("/work/package.json").unwrap();
        assert!(manifest.contains("\"db:generate\": \"prisma generate\""));
        assert!(h.reporter.contains(".env already contains DATABASE_URL, skipped"));
        assert!(report.pending_commands.is_empty());
    }

    #[test]
    fn unparsable_manifest_is_skipped() {
        let mut installer = MockPackageInstaller::new();
        installer.expect_install().returning(|_, _, _| Ok(()));
        let h = harness(installer, MockCommandRunner::new());
        h.fs.seed("/work/package.json", "{ broken");

        let request = ScaffoldRequest::unnamed(ScaffoldOptions::Integration(
            IntegrationOptions::Prisma(PrismaOptions::default()),
        ));
        h.service.scaffold(&request, &ctx()).unwrap();

        assert_eq!(h.fs.read("/work/package.json").as_deref(), Some("{ broken"));
        assert!(h.reporter.contains("skipping Prisma scripts"));
    }
}
