#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
/// Locations of the input articles and the output seed file
pub mod config;
/// Error handling and custom [`Error`](std::error::Error) types
pub mod errors;
/// Functions for reading article documents and writing seed files
pub mod io;
/// Projection of article entries into seed records
mod ops;
/// Data types used throughout the seed generator
pub mod types;

use std::path::PathBuf;

use crate::{config::SeedConfig, errors::Error, types::ArticleKind};

/// What a call to [`run`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The seed file that was written
    pub output_file: PathBuf,
    /// Total number of records written
    pub records: usize,
    /// Number of records contributed by each loaded file, in load order
    pub per_kind: Vec<(ArticleKind, usize)>,
    /// Input files that were skipped because they did not exist
    pub missing: Vec<PathBuf>,
}

/// Loads both article files named by `config`, flattens their entries and writes
/// the seed file.
///
/// Nothing is written if any present input fails to load.
/// # Errors
/// Any [`Error`] from loading, parsing or writing
pub fn run(config: &SeedConfig) -> Result<RunSummary, Error> {
    let outcome = io::load_articles(config)?;
    let records = ops::flatten_documents(&outcome.documents);
    io::write_seed_file(config.output_file(), &records)?;
    Ok(RunSummary {
        output_file: config.output_file().to_path_buf(),
        records: records.len(),
        per_kind: outcome
            .documents
            .iter()
            .map(|loaded| (loaded.kind, loaded.document.entries().len()))
            .collect(),
        missing: outcome.missing,
    })
}
