//! Helpers for reading article documents and writing the seed file

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};

use crate::{
    config::SeedConfig,
    errors::Error,
    types::{ArticleDocument, ArticleKind, SeedRecord},
};

/// An article document together with where it came from
#[derive(Debug)]
pub struct LoadedDocument {
    /// Which family of articles the document holds
    pub kind: ArticleKind,
    /// The file the document was read from
    pub path: PathBuf,
    /// The parsed document
    pub document: ArticleDocument,
}

/// Result of loading every configured input file
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Documents that were found and parsed, in load order
    pub documents: Vec<LoadedDocument>,
    /// Input files that did not exist and were skipped
    pub missing: Vec<PathBuf>,
}

/// Parses an article document from a JSON stream.
///
/// Expects input data in this form:
/// ```json
/// {"datas": [{"Mnem": "Loyer", "Compte": {"Oid": 601, "Case": "CA"}}]}
/// ```
pub fn read_document<R: Read>(reader: R) -> Result<ArticleDocument, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// Loads the article document at `path`.
///
/// Returns `Ok(None)` if there is no file at `path`.
/// # Errors
/// [`Error::Read`] if the file can't be opened, [`Error::Parse`] if it is not a valid document
pub fn load_document(path: &Path) -> Result<Option<ArticleDocument>, Error> {
    if !path.is_file() {
        return Ok(None);
    }
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_document(BufReader::new(file))
        .map(Some)
        .map_err(|source| {
            if source.is_io() {
                Error::Read {
                    path: path.to_path_buf(),
                    source: source.into(),
                }
            } else {
                Error::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
}

/// Loads every input file named by `config`, in order.
///
/// A missing file prints a warning on stdout and is skipped. Any other failure aborts the load.
pub fn load_articles(config: &SeedConfig) -> Result<LoadOutcome, Error> {
    load_articles_reporting_to(config, &mut std::io::stdout().lock())
}

/// Like [`load_articles`], but writes the missing-file warnings to `console`.
pub fn load_articles_reporting_to<W: Write>(
    config: &SeedConfig,
    console: &mut W,
) -> Result<LoadOutcome, Error> {
    let mut outcome = LoadOutcome::default();
    for (kind, path) in config.input_files() {
        match load_document(&path)? {
            Some(document) => {
                info!(
                    "Loaded {} {kind} entries from {}",
                    document.entries().len(),
                    path.display()
                );
                outcome.documents.push(LoadedDocument {
                    kind,
                    path,
                    document,
                });
            }
            None => {
                warn!("Skipping missing {kind} file {}", path.display());
                writeln!(console, "⚠️  Input file not found: {}", path.display())?;
                outcome.missing.push(path);
            }
        }
    }
    Ok(outcome)
}

/// Serializes seed records as a JSON array, indented by two spaces.
///
/// Non-ASCII text is written as-is. Output data will be in the form:
/// ```json
/// [
///   {
///     "compteid": 601,
///     "mnem": "Loyer",
///     "caseCerfa": "CA"
///   }
/// ]
/// ```
pub fn write_seed_records<W: Write>(writer: &mut W, records: &[SeedRecord]) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Writes seed records to `path`, replacing whatever was there.
/// # Errors
/// [`Error::Write`] if the file can't be created or written
pub fn write_seed_file(path: &Path, records: &[SeedRecord]) -> Result<(), Error> {
    let write_error = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    match write_seed_records(&mut writer, records) {
        Err(Error::Serialize(source)) if source.is_io() => {
            return Err(write_error(source.into()));
        }
        result => result?,
    }
    writer.flush().map_err(write_error)?;
    info!("Wrote {} seed records to {}", records.len(), path.display());
    Ok(())
}
