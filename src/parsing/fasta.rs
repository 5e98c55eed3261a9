//! FASTA record source backed by noodles.
//!
//! Supported inputs:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)
//! - `-` for uncompressed FASTA on standard input

use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::Record;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed FASTA input: {0}")]
    Malformed(String),
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let stem = if is_gzipped(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };

    matches!(
        stem.and_then(Path::extension)
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna" | "fas" | "fsa")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// A lazy, single-pass stream of FASTA records.
///
/// Each call to `next` reads exactly one record; nothing is buffered beyond
/// the record being returned.
pub struct FastaSource {
    reader: fasta::io::Reader<Box<dyn BufRead>>,
}

impl FastaSource {
    /// Open a FASTA file, or standard input when `path` is `-`.
    ///
    /// Files ending in `.gz` or `.bgz` are decompressed on the fly.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NotFound` if the file does not exist, or
    /// `ParseError::Io` if it cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        if path.as_os_str() == "-" {
            debug!("Reading FASTA from stdin");
            return Ok(Self::from_reader(io::stdin().lock()));
        }

        if !is_fasta_file(path) {
            warn!(
                "{} does not have a FASTA extension, reading it as FASTA anyway",
                path.display()
            );
        }

        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ParseError::NotFound(path.to_path_buf()),
            _ => ParseError::Io(e),
        })?;

        if is_gzipped(path) {
            debug!("Reading gzip-compressed FASTA from {}", path.display());
            Ok(Self::from_reader(BufReader::new(MultiGzDecoder::new(file))))
        } else {
            debug!("Reading FASTA from {}", path.display());
            Ok(Self::from_reader(BufReader::new(file)))
        }
    }

    /// Wrap any buffered reader of uncompressed FASTA text
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        let inner: Box<dyn BufRead> = Box::new(reader);
        Self {
            reader: fasta::io::Reader::new(inner),
        }
    }
}

impl Iterator for FastaSource {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.reader.records().next()?;

        Some(result.map(Record::from).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                ParseError::Malformed(format!("Failed to parse FASTA record: {e}"))
            }
            _ => ParseError::Io(e),
        }))
    }
}
