//! Bulk loading and saving of record files
//!
//! Loading is partial-failure tolerant: a line that cannot be parsed, or that
//! does not fit in the fleet, is skipped and reported while the rest of the
//! file is still read. Saving overwrites the target with one record per
//! stored ship, in insertion order.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::instrument;

use super::{CapacityError, Fleet, RecordError, record::parse_record};
use crate::domain::Vessel;

/// Why a line was not added to the fleet.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SkipReason {
    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8: {0}")]
    Encoding(std::str::Utf8Error),

    /// The line is not a valid record.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The fleet was already full.
    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

/// A line that was skipped during a bulk load.
#[derive(Debug, PartialEq)]
pub struct SkippedLine {
    /// One-based line number.
    pub line: usize,
    /// The raw text of the line.
    pub text: String,
    /// Why the line was skipped.
    pub reason: SkipReason,
}

/// The outcome of a bulk load.
#[derive(Debug, Default, PartialEq)]
pub struct LoadReport {
    /// Number of ships added to the fleet.
    pub loaded: usize,
    /// Lines that were skipped, in file order.
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Returns `true` if every line was loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Errors that stop a whole file from being read or written.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file being written.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

/// Reads records from `reader` into `fleet`.
///
/// Lines are split on `\n` (a trailing `\r` is dropped) and decoded one at a
/// time, so a line that is not UTF-8 is skipped like any other bad line.
///
/// # Errors
///
/// Returns an error only if reading from `reader` fails. Invalid lines are
/// reported in the returned [`LoadReport`] instead.
pub fn read_fleet<R: BufRead>(fleet: &mut Fleet, mut reader: R) -> io::Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let (text, result) = match std::str::from_utf8(raw) {
            Ok(line) => (
                line.to_string(),
                parse_record(line)
                    .map_err(SkipReason::from)
                    .and_then(|ship| fleet.add(&ship).map_err(SkipReason::from)),
            ),
            Err(e) => (
                String::from_utf8_lossy(raw).into_owned(),
                Err(SkipReason::Encoding(e)),
            ),
        };

        match result {
            Ok(()) => report.loaded += 1,
            Err(reason) => {
                tracing::warn!("Skipping line {number}: {reason}");
                report.skipped.push(SkippedLine {
                    line: number,
                    text,
                    reason,
                });
            }
        }
    }

    Ok(report)
}

/// Writes one record per stored ship to `writer`, in insertion order.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_fleet<W: Write>(fleet: &Fleet, mut writer: W) -> io::Result<()> {
    for ship in fleet.iter() {
        writeln!(writer, "{}", ship.to_record())?;
    }
    writer.flush()
}

/// Loads the record file at `path` into `fleet`.
///
/// # Errors
///
/// Returns [`FileError::Read`] if the file cannot be opened or read.
#[instrument(skip(fleet))]
pub fn load(fleet: &mut Fleet, path: &Path) -> Result<LoadReport, FileError> {
    let read_error = |source| FileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let report = read_fleet(fleet, BufReader::new(file)).map_err(read_error)?;

    tracing::info!(
        "Loaded {} ship(s) from {}, skipped {} line(s)",
        report.loaded,
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}

/// Saves `fleet` to `path`, replacing any existing content.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns [`FileError::Write`] if the file cannot be created or written.
#[instrument(skip(fleet))]
pub fn save(fleet: &Fleet, path: &Path) -> Result<usize, FileError> {
    let write_error = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    write_fleet(fleet, BufWriter::new(file)).map_err(write_error)?;

    tracing::info!("Saved {} ship(s) to {}", fleet.count(), path.display());
    Ok(fleet.count())
}
