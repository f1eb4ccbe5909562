use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use rustberry::Session;
use rustberry::bridge;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Print through the `graphql_parser` projection instead of the \
             graphql-core mirror.",
        long,
    )]
    graphql_parser: bool,

    #[arg(
        help="Path to the executable GraphQL file to print.",
        name="FILE",
    )]
    file: PathBuf,
}

impl PrintCmd {
    fn try_run(self) -> anyhow::Result<CommandResult> {
        let source = std::fs::read_to_string(&self.file)?;
        let session = Session::new();
        let document = match session.parse(&source) {
            Ok(document) => document,
            Err(diagnostic) => return Ok(CommandResult::failure(format_args!(
                "{} {}",
                output_utils::RED_X,
                output_utils::format_diagnostic(&self.file, &diagnostic),
            ))),
        };

        let printed = if self.graphql_parser {
            bridge::to_graphql_parser_ast(&document)?.to_string()
        } else {
            bridge::mirror::print_ast(&bridge::to_mirrored_ast(&document))
        };
        Ok(CommandResult::success(format_args!("{printed}")))
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.try_run() {
            Ok(result) => result,
            Err(err) => CommandResult::failure(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}
