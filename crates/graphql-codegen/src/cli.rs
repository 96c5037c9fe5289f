use crate::commands;
use clap::CommandFactory;

/// Compiles GraphQL operation IR (as emitted by the front-end) into
/// language-agnostic result-type descriptors.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-codegen", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log at DEBUG level (overrides the LOG_LEVEL environment \
             variable).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Without a subcommand there is nothing to compile, so print usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_long_help()?;
        Ok(())
    }
}
