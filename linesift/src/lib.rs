// linesift/src/lib.rs
//! # linesift CLI Application
//!
//! This crate provides the command-line front end for `linesift-core`: argument
//! parsing, logging setup, and the user-facing output and error messages.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

// Re-export the command runner
pub use commands::sift::{run_sift_opts, SiftFailure, SiftOptions};
