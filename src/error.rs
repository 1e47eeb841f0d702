//! Error types for the parsing and I/O edges of the calculator
//!
//! The numeric core never fails; these errors only arise when turning
//! caller-supplied text (CLI flags, CSV rows, JSON files) into typed inputs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("unknown buyer profile: {0}")]
    UnknownBuyerProfile(String),

    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("unknown loan type: {0}")]
    UnknownLoanType(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
