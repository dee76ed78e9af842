pub mod handlers;
pub mod prompt;

use std::process::ExitCode;

use crate::logging;
use crate::presentation::cli::Cli;
use clap::Parser;

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("[error] failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }
    match handlers::handle_split(cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::FAILURE
        }
    }
}
