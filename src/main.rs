use std::process::ExitCode;

use clap::Parser as _;

use texseq::cli::Cli;
use texseq::error::EXIT_SUCCESS;
use texseq::{commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let cli = Cli::parse();

    if cli.version {
        commands::version::run();
        return ExitCode::from(EXIT_SUCCESS);
    }

    logging::init_subscriber(cli.verbosity());

    match commands::make::run(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            // Error-severity output bypasses --quiet.
            tracing::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
