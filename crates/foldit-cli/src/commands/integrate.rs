//! Implementation of the `foldit integrate <tool>` commands.

use tracing::instrument;

use foldit_core::{
    domain::{AuthFlavor, DbProvider},
    prelude::{
        AuthOptions, IntegrationOptions, LintOptions, PrismaOptions, ScaffoldOptions,
        ScaffoldRequest, ShadcnOptions,
    },
};

use crate::{
    cli::{AuthArgs, GlobalArgs, IntegrateCommands, LintArgs, PrismaArgs, ShadcnArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    command: IntegrateCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let integration = build_options(command, config);
    let display_name = integration.display_name();
    let next_steps = next_steps(&integration);

    output.header(&format!("Integrating {display_name}..."))?;
    let request = ScaffoldRequest::unnamed(ScaffoldOptions::Integration(integration));
    let report = super::scaffold(&request, global, config, output)?;

    output.print("")?;
    output.success(&format!("{display_name} integration complete!"))?;
    output.list("Next steps:", &next_steps)?;
    super::print_pending(&report, output)
}

pub fn build_options(command: IntegrateCommands, config: &AppConfig) -> IntegrationOptions {
    match command {
        IntegrateCommands::EslintPrettier(args) => IntegrationOptions::EslintPrettier(lint(args)),
        IntegrateCommands::Prisma(args) => IntegrationOptions::Prisma(prisma(args, config)),
        IntegrateCommands::NextAuth(args) => {
            IntegrationOptions::Auth(auth(AuthFlavor::NextAuth, args))
        }
        IntegrateCommands::BetterAuth(args) => {
            IntegrationOptions::Auth(auth(AuthFlavor::BetterAuth, args))
        }
        IntegrateCommands::ShadcnUi(args) => IntegrationOptions::ShadcnUi(shadcn(args)),
    }
}

fn lint(args: LintArgs) -> LintOptions {
    LintOptions {
        strict: args.strict,
        airbnb: args.airbnb,
        typescript: args.typescript,
        with_scripts: args.with_scripts,
        ignore: trimmed(args.ignore),
    }
}

fn prisma(args: PrismaArgs, config: &AppConfig) -> PrismaOptions {
    PrismaOptions {
        provider: args.db.map(DbProvider::from).unwrap_or(config.prisma.provider),
        schema_path: args.schema,
        with_seed: args.with_seed,
        push: args.push,
        generate: args.generate,
    }
}

fn auth(flavor: AuthFlavor, args: AuthArgs) -> AuthOptions {
    AuthOptions {
        provider: args.provider.map(Into::into),
        prisma: args.prisma,
        session: args.session.into(),
        env: args.env,
        route: args.route,
        ..AuthOptions::new(flavor)
    }
}

fn shadcn(args: ShadcnArgs) -> ShadcnOptions {
    ShadcnOptions {
        components: trimmed(args.components),
        theme: args.theme,
        dir: args.dir.trim_end_matches('/').to_owned(),
        tailwind: args.tailwind,
    }
}

/// Drop blanks left by inputs such as `button,,card` or a trailing comma.
fn trimmed(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

fn next_steps(integration: &IntegrationOptions) -> Vec<String> {
    match integration {
        IntegrationOptions::EslintPrettier(options) if options.with_scripts => vec![
            "Lint your code: npm run lint".into(),
            "Format your code: npm run format".into(),
        ],
        IntegrationOptions::Prisma(options) if !options.push => vec![
            "Set DATABASE_URL in .env".into(),
            "Push the schema: npx prisma db push".into(),
        ],
        IntegrationOptions::Auth(options) if !options.env => vec![format!(
            "Set {} in .env.local",
            options.flavor.secret_key()
        )],
        IntegrationOptions::ShadcnUi(_) => vec![
            "Add components with: npx shadcn@latest add <component-name>".into(),
            "Customize your theme in globals.css".into(),
            "Import components from your ui directory".into(),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use foldit_core::domain::{AuthProvider, SessionStrategy};

    fn parse(args: &[&str]) -> IntegrationOptions {
        let mut argv = vec!["foldit", "integrate"];
        argv.extend_from_slice(args);
        let Some(Commands::Integrate(command)) = Cli::parse_from(argv).command else {
            panic!("expected integrate");
        };
        build_options(command, &AppConfig::default())
    }

    #[test]
    fn better_auth_keeps_its_flavor() {
        let IntegrationOptions::Auth(options) = parse(&[
            "better-auth",
            "--provider",
            "github",
            "--session",
            "database",
            "--prisma",
        ]) else {
            panic!("expected auth options");
        };
        assert_eq!(options.flavor, AuthFlavor::BetterAuth);
        assert_eq!(options.provider, Some(AuthProvider::Github));
        assert_eq!(options.session, SessionStrategy::Database);
        assert!(options.prisma);
    }

    #[test]
    fn prisma_defaults_to_configured_provider() {
        let IntegrationOptions::Prisma(options) = parse(&["prisma", "--with-seed"]) else {
            panic!("expected prisma options");
        };
        assert_eq!(options.provider, DbProvider::Sqlite);
        assert_eq!(options.schema_path, "prisma/schema.prisma");
        assert!(options.with_seed);
    }

    #[test]
    fn blank_list_entries_are_dropped() {
        let IntegrationOptions::ShadcnUi(options) =
            parse(&["shadcn-ui", "--components", "button,,card,", "--dir", "ui/"])
        else {
            panic!("expected shadcn options");
        };
        assert_eq!(options.components, ["button", "card"]);
        assert_eq!(options.dir, "ui");
    }

    #[test]
    fn shadcn_always_has_next_steps() {
        let steps = next_steps(&parse(&["shadcn-ui"]));
        assert_eq!(steps.len(), 3);
    }
}
