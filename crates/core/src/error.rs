//! Decode error model.
//!
//! The analytics engine itself never fails: malformed record fields are
//! defaulted at deserialization time. The only fallible operation in the
//! system is turning a raw backend payload into typed record vectors, and
//! this is its error type.

use thiserror::Error;

/// Result type used at the JSON decode boundary.
pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload was not the expected JSON shape (e.g. not an array).
    #[error("failed to decode {record}: {source}")]
    Payload {
        /// Record kind being decoded, e.g. `"stock items"`.
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn payload(record: &'static str, source: serde_json::Error) -> Self {
        Self::Payload { record, source }
    }
}
