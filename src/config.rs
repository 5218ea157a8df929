//! Locations of the input articles and the output seed file

use std::path::{Path, PathBuf};

use crate::types::ArticleKind;

/// Name of the directory holding the article files, relative to the base directory
pub const DATA_DIR_NAME: &str = "data";

/// Name of the generated seed file, relative to the base directory
pub const SEED_FILE_NAME: &str = "prisma_seed.json";

/// Where to read articles from and where to write the seed file.
///
/// Built once at startup and handed to the loader and writer; nothing in the
/// crate resolves paths against the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    base_dir: PathBuf,
    data_dir: PathBuf,
    output_file: PathBuf,
}

impl SeedConfig {
    /// Lays out `data/` and `prisma_seed.json` under `base_dir`
    #[must_use]
    pub fn from_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            data_dir: base_dir.join(DATA_DIR_NAME),
            output_file: base_dir.join(SEED_FILE_NAME),
            base_dir,
        }
    }

    /// Uses this crate's own directory as the base, independent of where the
    /// binary is invoked from
    #[must_use]
    pub fn default_location() -> Self {
        Self::from_base_dir(env!("CARGO_MANIFEST_DIR"))
    }

    /// Returns the base directory
    #[must_use]
    #[inline]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the directory holding the article files
    #[must_use]
    #[inline]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the seed file
    #[must_use]
    #[inline]
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Returns the path of the article file for `kind`
    #[must_use]
    pub fn input_file(&self, kind: ArticleKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Returns every input file with its kind, in load order
    pub fn input_files(&self) -> impl Iterator<Item = (ArticleKind, PathBuf)> + '_ {
        ArticleKind::ALL
            .into_iter()
            .map(|kind| (kind, self.input_file(kind)))
    }
}
