// linesift/src/logger.rs
//! Logging setup for the linesift binary.
//!
//! Log records go to stderr so they never mix with the sifted lines printed
//! on stdout. `RUST_LOG` is honored unless a level is forced from the command
//! line.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

const LOGGED_CRATES: [&str; 2] = ["linesift", "linesift_core"];

/// Initializes `env_logger` once.
///
/// `Some(LevelFilter::Off)` silences everything; any other forced level is
/// applied to the linesift crates only.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);

    match level {
        Some(LevelFilter::Off) => {
            builder.filter_level(LevelFilter::Off);
        }
        Some(level) => {
            for module in LOGGED_CRATES {
                builder.filter_module(module, level);
            }
        }
        None => {}
    }

    // A logger may already be installed, e.g. by a test harness.
    let _ = builder.try_init();
}
