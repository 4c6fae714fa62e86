//! Set file reader
//!
//! Text format: one set per line, elements written as comma-separated
//! decimal integers in declaration order. Line order is set order.
//!
//! ```text
//! 1,3,5,6
//! 2,4,5,16,20
//! 0,2,5
//! ```

use crate::constants::ELEMENT_SEPARATOR;
use crate::domain::set_store::{ElementError, SetStore, SetStoreError, StoreConfig};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Set file read errors
#[derive(Debug, Error)]
pub enum ReadError {
    /// Input file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    /// Read failure while streaming lines
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A line was rejected by the set store
    #[error("line {line}: {source}")]
    Rejected { line: usize, source: SetStoreError },
}

impl ReadError {
    /// 1-based number of the rejected line, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Rejected { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Parse one line into its elements
///
/// Whitespace around elements is ignored and a single trailing separator
/// is tolerated. A blank line yields no elements.
pub fn parse_line(line: &str) -> Result<Vec<u32>, ElementError> {
    let trimmed = line.trim();
    let trimmed = trimmed
        .strip_suffix(ELEMENT_SEPARATOR)
        .unwrap_or(trimmed)
        .trim_end();

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(ELEMENT_SEPARATOR)
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u32>()
                .map_err(|_| ElementError::Malformed(token.to_string()))
        })
        .collect()
}

/// Read sets from a line-oriented source into a new store
///
/// A UTF-8 byte order mark before the first line is skipped, and a line that
/// is not valid UTF-8 is rejected as malformed. Stops at the first rejected
/// line; no partial store is returned.
pub fn read_sets(reader: impl BufRead, config: StoreConfig) -> Result<SetStore, ReadError> {
    let mut store = SetStore::with_config(config);

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let number = index + 1;
        let raw: &[u8] = bytes.strip_suffix(b"\r").unwrap_or(&bytes);

        let line = std::str::from_utf8(raw).map_err(|_| ReadError::Rejected {
            line: number,
            source: ElementError::Malformed(String::from_utf8_lossy(raw).into_owned()).into(),
        })?;
        let line = if index == 0 {
            line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line)
        } else {
            line
        };

        let elements = parse_line(line).map_err(|e| ReadError::Rejected {
            line: number,
            source: e.into(),
        })?;

        store
            .add_set(&elements)
            .map_err(|source| ReadError::Rejected {
                line: number,
                source,
            })?;
    }

    Ok(store)
}

/// Load sets from a file
pub fn load_sets(path: impl AsRef<Path>, config: StoreConfig) -> Result<SetStore, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    read_sets(BufReader::new(file), config)
}
