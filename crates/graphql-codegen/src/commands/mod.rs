mod compile;

use crate::Cli;
use crate::CommandResult;
use compile::CompileCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Compile every operation in the given IR files and print the
    /// resulting descriptors as JSON.
    Compile(Box<CompileCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        log::debug!("Running {self:?}.");
        match self {
            Self::Compile(cmd) => cmd.run(cli).await,
        }
    }
}
