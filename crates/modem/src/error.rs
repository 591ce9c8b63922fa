//! Error types for mtsynth-modem.

use std::path::PathBuf;

/// Error type for all fallible operations in the mtsynth-modem crate.
///
/// Covers file access, malformed ModEM content, and lookups of periods,
/// stations, or components that the dataset does not contain.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModemError {
    /// Returned when the input file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a read or write failure from the filesystem.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a block header is missing or incomplete.
    #[error("missing header at line {line}: {reason}")]
    MissingHeader {
        /// 1-based line number where the header was expected.
        line: usize,
        /// What was missing.
        reason: String,
    },

    /// Returned when a header or data line cannot be parsed.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the same component appears twice for a period and station.
    #[error("duplicate component {component} for station {station} at period {period}")]
    DuplicateComponent {
        /// Period of the repeated entry.
        period: f64,
        /// Station code of the repeated entry.
        station: String,
        /// Component name of the repeated entry.
        component: String,
    },

    /// Returned when a station code is not present in the dataset.
    #[error("station '{station}' not found")]
    MissingStation {
        /// The requested station code.
        station: String,
    },

    /// Returned when a station has no such component at the requested period.
    #[error("component {component} not found for station {station} at period {period}")]
    MissingComponent {
        /// The requested period.
        period: f64,
        /// The station that was searched.
        station: String,
        /// The requested component name.
        component: String,
    },
}
