mod cli;

use moots_core::logging;

fn main() {
    // Log file first; fall back to stderr if the state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("moots error: {:#}", err);
        std::process::exit(1);
    }
}
