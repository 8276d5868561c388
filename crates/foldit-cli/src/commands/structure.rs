//! Implementation of the `foldit generate-structure` command.

use tracing::instrument;

use foldit_core::prelude::{ScaffoldOptions, ScaffoldRequest, StructureOptions, StructureType};

use crate::{
    cli::{GlobalArgs, StructureArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: StructureArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let structure = StructureType::from(args.structure);
    output.header(&format!("Generating {structure} project structure..."))?;

    let request = ScaffoldRequest::unnamed(ScaffoldOptions::Structure(StructureOptions {
        structure,
    }));
    let report = super::scaffold(&request, global, config, output)?;

    output.success(&format!("{structure} folder structure created successfully!"))?;
    output.print("")?;
    output.print(structure.description())?;
    super::print_pending(&report, output)
}
