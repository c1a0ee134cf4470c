//! Results file output.
//!
//! The file holds one decimal drink count per line, in simulation order,
//! with no header or trailer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::OutputError;
use crate::result::ResultSet;

/// Default results file name.
pub const DEFAULT_OUTPUT: &str = "results.txt";

/// Writes one line per game to `writer`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_results<W: Write>(writer: W, results: &ResultSet) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for drinks in results.drinks() {
        writeln!(writer, "{drinks}")?;
    }
    writer.flush()
}

/// A results file, created before a run and written once it finishes.
#[derive(Debug)]
pub struct ResultsFile {
    path: PathBuf,
    file: File,
}

impl ResultsFile {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let path = path.as_ref().to_path_buf();
        match File::create(&path) {
            Ok(file) => Ok(Self { path, file }),
            Err(source) => Err(OutputError::Create { path, source }),
        }
    }

    /// Returns the path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `results` and closes the file.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write(self, results: &ResultSet) -> Result<(), OutputError> {
        let Self { path, file } = self;
        if let Err(source) = write_results(file, results) {
            return Err(OutputError::Write { path, source });
        }
        log::info!("wrote {} results to {}", results.len(), path.display());
        Ok(())
    }
}

/// Creates (or truncates) the file at `path` and writes `results` to it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_results(path: impl AsRef<Path>, results: &ResultSet) -> Result<(), OutputError> {
    ResultsFile::create(path)?.write(results)
}
