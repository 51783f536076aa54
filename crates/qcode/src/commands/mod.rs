mod parse;

use crate::Cli;
use crate::CommandResult;
use parse::ParseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "qcode")]
pub(crate) enum CommandEnum {
    /// Parse query documents and report their structure or first error.
    Parse(Box<ParseCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await
        }
    }
}
