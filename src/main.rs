//! Cart Total CLI

use std::{io, process};

use tracing::debug;

use cart_total::{cli, config::Cli, logging};

/// Cart Total entry point
pub fn main() {
    let config = Cli::load().unwrap_or_else(|error| {
        // Help and version output are not failures.
        let code = i32::from(error.use_stderr());

        _ = error.print();

        process::exit(code);
    });

    if let Err(error) = logging::init(&config.log_level) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    if let Err(error) = cli::run(&config, io::stdout().lock()) {
        debug!(?error, "cart pricing failed");

        #[expect(
            clippy::print_stderr,
            reason = "user-facing error message, not a log line"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
