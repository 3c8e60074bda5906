// linesift/src/main.rs
//! linesift entry point.
//!
//! Parses the command line, sifts the input file and maps any failure to a
//! message on stdout and exit code 1.

use clap::Parser;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use linesift::cli::Cli;
use linesift::commands::sift::{report_failure, run_sift_opts, SiftOptions};
use linesift::logger;

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(args.log_level());

    let opts = SiftOptions {
        path: args.path.clone(),
        config_path: args.config.clone(),
        overrides: args.overrides(),
    };

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    match run_sift_opts(&opts, &mut writer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(failure) => {
            log::debug!("Sift failed: {:?}", failure);
            report_failure(&failure, &mut writer, supports_color);
            ExitCode::FAILURE
        }
    }
}
