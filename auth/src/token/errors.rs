use thiserror::Error;

/// Error type for token operations.
///
/// The decode variants are kept apart for diagnostics only. Callers facing
/// the outside world should collapse them into a single rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,
}
