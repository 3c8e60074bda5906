// linesift/src/commands/mod.rs
//! Command implementations for the linesift CLI.

pub mod sift;
