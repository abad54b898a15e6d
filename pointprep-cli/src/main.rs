//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use env_logger::Env;
use pointprep_cli::CliError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match pointprep_cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("pointprep: {err}");
            if err.is_usage() {
                eprintln!("{}", pointprep_cli::usage());
            }
            ExitCode::from(err.exit_code())
        }
    }
}
