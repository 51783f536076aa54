use crate::Cli;
use crate::CommandResult;

/// A `qcode` subcommand. Global flags arrive through `cli`; the returned
/// [`CommandResult`] decides what is printed and the process exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
