//! Error types for steam-types.

use thiserror::Error;

/// Errors raised while decoding data handed back by the native SDK.
#[derive(Debug, Error)]
pub enum TypesError {
    /// A completed-call buffer was shorter than the payload it should hold.
    #[error("invalid callback payload: expected {expected} bytes, got {actual}")]
    InvalidCallbackPayload {
        /// Size of the native struct.
        expected: usize,
        /// Size of the buffer received.
        actual: usize,
    },

    /// A callback id did not match the payload type being decoded.
    #[error("unexpected callback id: expected {expected}, got {actual}")]
    UnexpectedCallback {
        /// Callback id of the payload type.
        expected: i32,
        /// Callback id carried by the call handle.
        actual: i32,
    },
}
