use std::path::PathBuf;

/// Error type that can be returned by fallible operations in this crate.
///
/// A missing input file is not an error; see [`LoadOutcome`](crate::io::LoadOutcome).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input file exists but could not be read
    #[error("Error reading {}", .path.display())]
    Read {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
    /// An input file is not valid JSON, or does not have the shape of an article document
    #[error("Error parsing {}", .path.display())]
    Parse {
        /// The file that could not be parsed
        path: PathBuf,
        /// The underlying JSON error
        source: serde_json::Error,
    },
    /// The seed file could not be created or written
    #[error("Error writing {}", .path.display())]
    Write {
        /// The file that could not be written
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
    /// A progress message could not be written to the console
    #[error("Error writing to the console")]
    Console(#[from] std::io::Error),
    /// Seed records could not be serialized
    #[error("Error serializing seed records")]
    Serialize(#[from] serde_json::Error),
}
