use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Empty quantity")]
    Empty,

    #[error("Unrecognized quantity: {0:?}")]
    Unrecognized(String),

    #[error("Fraction has a zero denominator: {0:?}")]
    ZeroDenominator(String),

    #[error("Quantity out of range: {0:?}")]
    OutOfRange(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown volume unit: {0:?} (expected ml or oz)")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read ingredient catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ingredient catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
