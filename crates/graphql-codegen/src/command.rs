use crate::Cli;
use crate::CommandResult;

/// A subcommand of `graphql-codegen`. Consumes itself and reports its
/// outcome as stdout/stderr text plus an exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
