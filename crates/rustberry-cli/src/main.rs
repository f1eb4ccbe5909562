mod cli;
mod command;
mod command_result;
mod commands;
mod log_level;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<std::process::ExitCode> {
    let mut cli = Cli::parse();
    init_logging(&cli);

    let Some(command) = cli.cmd.take() else {
        cli.run_default().await?;
        return Ok(std::process::ExitCode::SUCCESS);
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    Ok(result.exit_code)
}

/// Command output goes to stdout, so logs are written to stderr.
fn init_logging(cli: &Cli) {
    let env_value = std::env::var(log_level::LOG_LEVEL_ENV_VAR).ok();
    let (level, warning) = log_level::resolve(cli.verbose, env_value.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
