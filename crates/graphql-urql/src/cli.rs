use clap::CommandFactory;
use crate::commands;

/// Generates urql bindings from GraphQL operation documents.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-urql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose (debug) logging. Overrides `LOG_LEVEL`.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand there is nothing to generate, so print usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
