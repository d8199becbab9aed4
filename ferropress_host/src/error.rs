use ferropress_core::{error, Algorithm};
use thiserror::Error;

/// A failed operation against the native boundary.
///
/// The four failure classes stay distinct so callers can react correctly:
/// capacity errors are retryable with a bigger buffer, argument errors are
/// caller bugs, codec failures mean the input (or the algorithm choice) is
/// unusable, and a contained fault means the library itself misbehaved.
/// Each variant keeps the algorithm and, where meaningful, the size hint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// The output buffer was still too small after the one permitted
    /// retry; `needed` is the native side's final capacity hint.
    #[error("{algorithm}: output buffer too small even after retry, need {needed} bytes")]
    BufferTooSmall { algorithm: Algorithm, needed: usize },

    #[error("unknown algorithm id {id}")]
    AlgoNotFound { id: u8 },

    #[error("{algorithm}: invalid argument passed across the native boundary")]
    InvalidArgument { algorithm: Algorithm },

    /// Codec failure: corrupt compressed input or a placeholder algorithm.
    /// The native side does not distinguish the two.
    #[error("{algorithm}: codec failure (corrupt input or unimplemented algorithm)")]
    Internal { algorithm: Algorithm },

    /// The panic firewall contained a fault inside the native library.
    #[error("{algorithm}: native fault contained at the boundary")]
    PanicCaught { algorithm: Algorithm },

    /// A code this build does not know; raw value preserved for triage.
    #[error("{algorithm}: unrecognized native status code {code}")]
    Unrecognized { algorithm: Algorithm, code: i32 },
}

impl BoundaryError {
    /// Map a non-success native code (and the out-parameter value, for the
    /// sizing case) back into the structured error.
    pub(crate) fn from_code(algorithm: Algorithm, code: i32, hint: usize) -> Self {
        match code {
            error::BUFFER_TOO_SMALL => BoundaryError::BufferTooSmall {
                algorithm,
                needed: hint,
            },
            error::ALGO_NOT_FOUND => BoundaryError::AlgoNotFound {
                id: algorithm.id(),
            },
            error::INVALID_ARGUMENT => BoundaryError::InvalidArgument { algorithm },
            error::INTERNAL_ERROR => BoundaryError::Internal { algorithm },
            error::PANIC_CAUGHT => BoundaryError::PanicCaught { algorithm },
            other => BoundaryError::Unrecognized {
                algorithm,
                code: other,
            },
        }
    }

    /// The stable native code behind this error.
    pub fn code(&self) -> i32 {
        match self {
            BoundaryError::BufferTooSmall { .. } => error::BUFFER_TOO_SMALL,
            BoundaryError::AlgoNotFound { .. } => error::ALGO_NOT_FOUND,
            BoundaryError::InvalidArgument { .. } => error::INVALID_ARGUMENT,
            BoundaryError::Internal { .. } => error::INTERNAL_ERROR,
            BoundaryError::PanicCaught { .. } => error::PANIC_CAUGHT,
            BoundaryError::Unrecognized { code, .. } => *code,
        }
    }

    /// The capacity hint, present only for the sizing failure.
    pub fn needed_size(&self) -> Option<usize> {
        match self {
            BoundaryError::BufferTooSmall { needed, .. } => Some(*needed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip_through_from_code() {
        let algo = Algorithm::Lz4;
        for code in [-1, -2, -3, -50, -99] {
            let err = BoundaryError::from_code(algo, code, 128);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let err = BoundaryError::from_code(Algorithm::Zstd, -7, 0);
        assert_eq!(
            err,
            BoundaryError::Unrecognized {
                algorithm: Algorithm::Zstd,
                code: -7
            }
        );
        assert_eq!(err.code(), -7);
    }

    #[test]
    fn hint_only_on_the_sizing_failure() {
        assert_eq!(
            BoundaryError::from_code(Algorithm::Gzip, -1, 4096).needed_size(),
            Some(4096)
        );
        assert_eq!(
            BoundaryError::from_code(Algorithm::Gzip, -50, 4096).needed_size(),
            None
        );
    }
}
