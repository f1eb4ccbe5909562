mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use print::PrintCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "rustberry")]
pub(crate) enum CommandEnum {
    /// Print a document as re-serialized from one of its projections.
    Print(Box<PrintCmd>),

    /// Validate executable documents against a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
