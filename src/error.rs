//! Error types for the fallible edges of the crate (catalog and profile I/O).
//!
//! Generating a pathway never fails; only reading data from outside does.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathwayError>;

#[derive(Error, Debug)]
pub enum PathwayError {
    /// Reading a catalog or profile file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input was not the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog records share an id
    #[error("duplicate module id in catalog: {0}")]
    DuplicateModule(String),

    /// A catalog record has negative or non-finite hours
    #[error("module {id} has invalid estimated hours: {hours}")]
    InvalidHours { id: String, hours: f64 },
}
