use std::process::ExitCode;

use pz_config::cli::{self, Invocation};
use pz_core::pz_error;
use pz_messages::{msg, MESSAGES};

fn main() -> ExitCode {
    let _guard = pz_logging::init_subscriber();

    let Ok(invocation) = Invocation::from_args(std::env::args_os()) else {
        cli::print_usage();
        return ExitCode::from(1);
    };

    match cli::execute(invocation) {
        Ok(code) => code,
        Err(e) => {
            pz_error!("{}", msg!(MESSAGES.cli.error_generic, error = format!("{e:#}")));
            ExitCode::from(1)
        }
    }
}
