//! Error types shared by the distance model, optimizer, and city-file I/O.

use thiserror::Error as ThisError;

/// Errors raised while loading, measuring, or optimizing a tour.
#[derive(Debug, ThisError)]
pub enum TourError {
    /// The tour (or a requested operation on it) violates a precondition:
    /// too few cities, an empty tour, an out-of-range index, a zero budget.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The distance between two cities is not finite, so at least one of
    /// them carries a NaN or infinite coordinate.
    #[error("malformed city record: non-finite distance between {from} and {to}")]
    MalformedRecord {
        /// Name of the edge's origin city.
        from: String,
        /// Name of the edge's destination city.
        to: String,
    },

    /// A line of a city file could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
