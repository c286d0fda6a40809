// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Library error type

use std::path::PathBuf;
use thiserror::Error;

/// Convenient result alias for the campusnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the campusnav library.
///
/// Unknown locations and disconnected graphs are deliberately absent here:
/// route lookups report those through [`crate::graph::Route::unreachable`].
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be encoded or decoded.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// File that was being parsed or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Path weights must be finite and non-negative.
    #[error("invalid distance {weight} between {from} and {to}")]
    InvalidWeight {
        /// One endpoint
        from: String,
        /// Other endpoint
        to: String,
        /// Rejected weight
        weight: f64,
    },

    /// A log entry did not follow the `Name - YYYY-MM-DD - Location` layout.
    #[error("malformed event entry: {entry:?}")]
    MalformedEvent {
        /// Raw entry text
        entry: String,
    },

    /// An event name contained the field separator and could not be read back.
    #[error("event name {name:?} must not contain \" - \"")]
    InvalidEventName {
        /// Rejected name
        name: String,
    },

    /// A required field was empty.
    #[error("{field} must not be empty")]
    MissingField {
        /// Field name
        field: &'static str,
    },

    /// A location is not a node of the campus graph.
    #[error("unknown location: {name}")]
    UnknownLocation {
        /// Requested name
        name: String,
    },

    /// A month argument was not of the form `YYYY-MM`.
    #[error("invalid month {value:?}, expected YYYY-MM")]
    InvalidMonth {
        /// Raw argument
        value: String,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration in {path}: {message}")]
    Config {
        /// Configuration file
        path: PathBuf,
        /// Parser message
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
