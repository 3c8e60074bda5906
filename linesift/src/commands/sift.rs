// linesift/src/commands/sift.rs
//! Sift command implementation: read the input file, run the pipeline and
//! print the result.

use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use linesift_core::{ConfigOverrides, Pipeline, ReadError, SiftConfig, SiftError};

use crate::ui::output_format;

/// Options for the `run_sift_opts` API.
#[derive(Debug, Clone, Default)]
pub struct SiftOptions {
    pub path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Everything that can make a sift run fail.
#[derive(Error, Debug)]
pub enum SiftFailure {
    #[error("{0:#}")]
    Config(anyhow::Error),

    #[error("{0}")]
    Settings(SiftError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("{} is empty or has only empty lines or lines with spaces", .0.display())]
    EmptyContent(PathBuf),

    #[error("{0}")]
    Pipeline(SiftError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl SiftFailure {
    fn from_pipeline(path: &Path, err: SiftError) -> Self {
        match err {
            SiftError::EmptyContent => SiftFailure::EmptyContent(path.to_path_buf()),
            other => SiftFailure::Pipeline(other),
        }
    }

    /// Extra lines printed after the error message.
    pub fn hints(&self) -> Vec<String> {
        match self {
            SiftFailure::Read(ReadError::TooLarge { .. }) => vec![
                "Please consider using the --max-size option".to_string(),
                "Run `linesift --help` for more information".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

/// Resolves the configuration: built-in defaults, then the optional file,
/// then the command-line overrides.
pub fn resolve_config(opts: &SiftOptions) -> Result<SiftConfig, SiftFailure> {
    let config = match &opts.config_path {
        Some(path) => SiftConfig::load_from_file(path).map_err(SiftFailure::Config)?,
        None => SiftConfig::default(),
    };
    config
        .with_overrides(&opts.overrides)
        .map_err(SiftFailure::Settings)
}

/// The main operation runner for the linesift CLI.
///
/// Nothing is written to `writer` unless the whole sift succeeds.
pub fn run_sift_opts<W: Write>(opts: &SiftOptions, writer: &mut W) -> Result<usize, SiftFailure> {
    info!("Starting sift of {}.", opts.path.display());

    let config = resolve_config(opts)?;
    let lines = config.reader().read(&opts.path)?;
    let output = Pipeline::from_config(&config)
        .run(&lines)
        .map_err(|err| SiftFailure::from_pipeline(&opts.path, err))?;

    debug!("Writing {} formatted lines.", output.len());
    output_format::print_lines(writer, &output)?;

    info!("Sift completed.");
    Ok(output.len())
}

/// Prints `failure` to `writer` in the user-facing format.
pub fn report_failure<W: Write>(failure: &SiftFailure, writer: &mut W, supports_color: bool) {
    let _ = output_format::print_error_message(
        writer,
        &failure.to_string(),
        &failure.hints(),
        supports_color,
    );
}
