use clap::Parser;
use gabbs::{ConsoleLogger, Dispatcher, builtin_registry};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gabbs")]
#[command(about = "Shared tooling for frontend projects")]
#[command(version)]
struct Cli {
    /// List the available subcommands
    #[arg(long)]
    list_commands: bool,

    /// Subcommand followed by its arguments, e.g. `lint --es6 ./src`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = ConsoleLogger::from_env().shared();
    let dispatcher = Dispatcher::new(builtin_registry(logger.clone()), logger.clone());

    if cli.list_commands {
        for name in dispatcher.registry().names() {
            logger.raw(name);
        }
        return ExitCode::SUCCESS;
    }

    // Nothing to run: fail without output
    if cli.args.is_empty() {
        return ExitCode::FAILURE;
    }

    match dispatcher.start(cli.args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger.error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
