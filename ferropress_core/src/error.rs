//! Native error codes and the structured error type behind them.
//!
//! The i32 constants are the wire contract of the boundary: embedders
//! compiled against one version of the library must be able to interpret
//! the codes of any later version, so values are never changed or reused.

use thiserror::Error;

pub const SUCCESS: i32 = 0;
pub const BUFFER_TOO_SMALL: i32 = -1;
pub const ALGO_NOT_FOUND: i32 = -2;
pub const INVALID_ARGUMENT: i32 = -3;
pub const INTERNAL_ERROR: i32 = -50;
pub const PANIC_CAUGHT: i32 = -99;

/// Name of a native code for logs and error messages.
pub fn code_name(code: i32) -> &'static str {
    match code {
        SUCCESS => "SUCCESS",
        BUFFER_TOO_SMALL => "BUFFER_TOO_SMALL",
        ALGO_NOT_FOUND => "ALGO_NOT_FOUND",
        INVALID_ARGUMENT => "INVALID_ARGUMENT",
        INTERNAL_ERROR => "INTERNAL_ERROR",
        PANIC_CAUGHT => "PANIC_CAUGHT",
        _ => "UNKNOWN",
    }
}

/// Failure of a single compress/decompress/estimate call.
///
/// `Internal` covers both corrupt compressed input and calls into a
/// placeholder algorithm; the two are indistinguishable on the code
/// channel and that ambiguity is part of the published contract.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("output buffer too small, need at least {needed} bytes")]
    BufferTooSmall { needed: usize },

    #[error("unknown algorithm id {0}")]
    AlgoNotFound(u8),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("codec failure: {0}")]
    Internal(String),
}

impl CompressError {
    /// The stable native code this error is reported as.
    pub fn to_code(&self) -> i32 {
        match self {
            CompressError::BufferTooSmall { .. } => BUFFER_TOO_SMALL,
            CompressError::AlgoNotFound(_) => ALGO_NOT_FOUND,
            CompressError::InvalidArgument(_) => INVALID_ARGUMENT,
            CompressError::Internal(_) => INTERNAL_ERROR,
        }
    }

    /// The minimum capacity hint, present only for `BufferTooSmall`.
    pub fn needed_size(&self) -> Option<usize> {
        match self {
            CompressError::BufferTooSmall { needed } => Some(*needed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table_is_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(BUFFER_TOO_SMALL, -1);
        assert_eq!(ALGO_NOT_FOUND, -2);
        assert_eq!(INVALID_ARGUMENT, -3);
        assert_eq!(INTERNAL_ERROR, -50);
        assert_eq!(PANIC_CAUGHT, -99);
    }

    #[test]
    fn errors_map_to_their_codes() {
        assert_eq!(
            CompressError::BufferTooSmall { needed: 10 }.to_code(),
            BUFFER_TOO_SMALL
        );
        assert_eq!(CompressError::AlgoNotFound(255).to_code(), ALGO_NOT_FOUND);
        assert_eq!(
            CompressError::InvalidArgument("null pointer".into()).to_code(),
            INVALID_ARGUMENT
        );
        assert_eq!(
            CompressError::Internal("corrupt input".into()).to_code(),
            INTERNAL_ERROR
        );
    }

    #[test]
    fn needed_size_only_for_buffer_too_small() {
        assert_eq!(
            CompressError::BufferTooSmall { needed: 42 }.needed_size(),
            Some(42)
        );
        assert_eq!(CompressError::AlgoNotFound(0).needed_size(), None);
        assert_eq!(
            CompressError::Internal("x".into()).needed_size(),
            None
        );
    }

    #[test]
    fn code_names_cover_the_table() {
        assert_eq!(code_name(0), "SUCCESS");
        assert_eq!(code_name(-1), "BUFFER_TOO_SMALL");
        assert_eq!(code_name(-99), "PANIC_CAUGHT");
        assert_eq!(code_name(17), "UNKNOWN");
    }
}
