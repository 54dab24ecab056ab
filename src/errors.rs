// Inspector Errors
//
// Inspection itself never fails: every object-originated exception is absorbed
// by the safety layer, and only interrupts are re-raised. These are the only
// caller-facing errors, all about arguments and configuration, and they surface
// in Python as ValueError.

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("invalid inspector configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("unknown detail level '{0}' (expected 'basic', 'schema' or 'full')")]
    UnknownDetail(String),

    #[error("failed to serialize inspection record: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InspectorError>;

impl From<InspectorError> for PyErr {
    fn from(err: InspectorError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}
