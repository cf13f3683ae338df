// src/error.rs

use thiserror::Error;

/// Everything that can go wrong in a single signing run.
///
/// Library code only ever returns these; the binary decides what to
/// print and which exit code to use.
#[derive(Debug, Error)]
pub enum SignError {
    /// The challenge argument was not supplied.
    #[error("missing required <challenge> argument")]
    Usage,

    /// The key file does not exist at the expected path.
    #[error("{path} not found")]
    KeyNotFound { path: String },

    /// The key file exists but is not a valid unencrypted Ed25519
    /// private key (wrong format, encrypted, or wrong key type).
    #[error("invalid private key: {0}")]
    KeyParse(String),

    /// The challenge argument is not valid standard base64.
    #[error("invalid base64 challenge: {0}")]
    InputDecode(String),

    /// Anything else (permissions, I/O).
    #[error("{0}")]
    Unexpected(String),
}
