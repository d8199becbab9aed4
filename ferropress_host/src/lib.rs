//! Host-side buffer protocol for the ferropress native boundary.
//!
//! The native entry points never allocate: the caller owns both buffers
//! and learns sizes through the out-parameter. This crate packages the
//! calling discipline once so embedding code never reasons about raw
//! pointers or retries:
//!
//! 1. Size the first output buffer from the estimator (compress) or from
//!    the caller's expected size (decompress).
//! 2. Invoke the entry point.
//! 3. On `BUFFER_TOO_SMALL`, regrow once to `max(hint, 2 * capacity)` and
//!    re-invoke. A second undersized result is a hard failure; the bound
//!    protects against a misbehaving estimator looping forever.
//!
//! The one-shot [`compress`]/[`decompress`] functions allocate a fresh
//! buffer per call. [`Compressor`] reuses one growable buffer across calls
//! for hot paths; it is intentionally not thread-safe (one instance per
//! thread, or external locking).

mod compressor;
mod error;

pub use compressor::Compressor;
pub use error::BoundaryError;

pub use ferropress_core::Algorithm;

use ferropress_core::error as code;

/// Liveness probe: true when the native boundary answers.
pub fn ping() -> bool {
    ferropress_ffi::native_ping() != 0
}

/// Worst-case compressed size for `input_len` bytes, asked of the native
/// side. Never undershoots what a compress call can require.
pub fn estimate_max_output_size(algorithm: Algorithm, level: i32, input_len: usize) -> usize {
    ferropress_ffi::estimate_max_output_size_native(algorithm.id(), level, input_len)
}

/// Compress `input`, returning the compressed bytes.
///
/// Negative `level` selects the algorithm's default; out-of-range levels
/// are clamped by the native side (see [`Algorithm::clamp_level`]).
pub fn compress(
    algorithm: Algorithm,
    level: i32,
    input: &[u8],
) -> Result<Vec<u8>, BoundaryError> {
    let estimate = estimate_max_output_size(algorithm, level, input.len());
    run_to_completion(algorithm, estimate, |out, out_len| {
        ferropress_ffi::compress_native(
            algorithm.id(),
            level,
            input.as_ptr(),
            input.len(),
            out.as_mut_ptr(),
            out.len(),
            out_len,
        )
    })
}

/// Decompress `input`, returning the original bytes.
///
/// `expected_size` seeds the output buffer; it is a hint, not a hard
/// requirement, since an undersized first attempt recovers through the
/// retry with the native side's exact capacity hint.
pub fn decompress(
    algorithm: Algorithm,
    input: &[u8],
    expected_size: usize,
) -> Result<Vec<u8>, BoundaryError> {
    run_to_completion(algorithm, expected_size, |out, out_len| {
        ferropress_ffi::decompress_native(
            algorithm.id(),
            input.as_ptr(),
            input.len(),
            out.as_mut_ptr(),
            out.len(),
            out_len,
        )
    })
}

/// The retry state machine: allocate, invoke, regrow at most once.
///
/// An explicit flag bounds the loop to two invocations; recursion would
/// hide the bound.
fn run_to_completion(
    algorithm: Algorithm,
    initial_capacity: usize,
    mut invoke: impl FnMut(&mut [u8], &mut usize) -> i32,
) -> Result<Vec<u8>, BoundaryError> {
    let mut capacity = initial_capacity;
    let mut retried = false;
    loop {
        let mut buf = vec![0u8; capacity];
        let mut out_len: usize = 0;
        let result = invoke(&mut buf, &mut out_len);

        if result == code::SUCCESS {
            buf.truncate(out_len);
            return Ok(buf);
        }
        if result == code::BUFFER_TOO_SMALL && !retried {
            retried = true;
            capacity = out_len.max(capacity * 2);
            continue;
        }
        return Err(BoundaryError::from_code(algorithm, result, out_len));
    }
}
