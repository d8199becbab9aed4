//! C-ABI entry points of the native library.
//!
//! Everything observable across this boundary is a return value: each
//! entry point runs inside a panic firewall that converts any unwind into
//! the `PANIC_CAUGHT` code, and all other failures into their stable
//! codes. The `*out_len` out-parameter carries bytes-written on success
//! and the minimum required capacity on `BUFFER_TOO_SMALL`; it is left
//! untouched for every other code.
//!
//! # Safety
//! Callers provide raw pointers with lengths and capacities; the functions
//! validate for null before building slices and hold no reference to any
//! buffer after returning. Pointer/length mismatches cannot be detected
//! here and remain the caller's contract, as is standard for a C ABI.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, error, info, trace};

use ferropress_codecs as codecs;
use ferropress_core::error;
use ferropress_core::Algorithm;

/// Liveness probe: returns 1 when the library is loaded and callable.
#[no_mangle]
pub extern "C" fn native_ping() -> i32 {
    trace!("native_ping called");
    contain("ping", || 1)
}

/// Compress `in_len` bytes from `in_ptr` into the buffer at `out_ptr`
/// (capacity `out_cap`). On success, writes the number of bytes produced
/// to `*out_len` and returns SUCCESS (0). On BUFFER_TOO_SMALL, writes the
/// needed size hint to `*out_len` and returns -1.
#[no_mangle]
pub extern "C" fn compress_native(
    algo: u8,
    level: i32,
    in_ptr: *const u8,
    in_len: usize,
    out_ptr: *mut u8,
    out_cap: usize,
    out_len: *mut usize,
) -> i32 {
    contain("compress", || {
        compress_inner(algo, level, in_ptr, in_len, out_ptr, out_cap, out_len)
    })
}

/// Decompress `in_len` bytes from `in_ptr` into the buffer at `out_ptr`
/// (capacity `out_cap`). Same return and `*out_len` contract as
/// [`compress_native`]; there is no level parameter.
#[no_mangle]
pub extern "C" fn decompress_native(
    algo: u8,
    in_ptr: *const u8,
    in_len: usize,
    out_ptr: *mut u8,
    out_cap: usize,
    out_len: *mut usize,
) -> i32 {
    contain("decompress", || {
        decompress_inner(algo, in_ptr, in_len, out_ptr, out_cap, out_len)
    })
}

/// Conservative upper bound on the compressed size of `in_len` bytes.
/// Returns 0 on unknown algorithm or contained panic; a caller that needs
/// the distinction validates the algorithm id before sizing buffers.
#[no_mangle]
pub extern "C" fn estimate_max_output_size_native(algo: u8, level: i32, in_len: usize) -> usize {
    match catch_unwind(AssertUnwindSafe(|| {
        let algorithm = Algorithm::try_from(algo).ok()?;
        let estimate = codecs::estimate_max_output_size(algorithm, level, in_len);
        trace!("estimate: algo={algorithm}, in_len={in_len}, estimate={estimate}");
        Some(estimate)
    })) {
        Ok(Some(size)) => size,
        _ => {
            debug!("estimate: failed for algo id {algo}");
            0
        }
    }
}

/// The panic firewall: run `f` and translate an unwind into the
/// PANIC_CAUGHT code. Nothing a codec did before the fault is trusted; the
/// faulted computation is never resumed.
fn contain<F: FnOnce() -> i32>(op: &'static str, f: F) -> i32 {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        error!("{op}: panic contained at the native boundary");
        error::PANIC_CAUGHT
    })
}

fn compress_inner(
    algo: u8,
    level: i32,
    in_ptr: *const u8,
    in_len: usize,
    out_ptr: *mut u8,
    out_cap: usize,
    out_len: *mut usize,
) -> i32 {
    let (input, output) = match buffers(in_ptr, in_len, out_ptr, out_cap, out_len) {
        Some(pair) => pair,
        None => {
            error!(
                "compress: null pointer argument (in={}, out={}, out_len={})",
                !in_ptr.is_null(),
                !out_ptr.is_null(),
                !out_len.is_null()
            );
            return error::INVALID_ARGUMENT;
        }
    };

    let algorithm = match Algorithm::try_from(algo) {
        Ok(a) => a,
        Err(e) => {
            error!("compress: unknown algorithm id {algo}");
            return e.to_code();
        }
    };

    debug!("compress: algo={algorithm}, level={level}, in_len={in_len}, out_cap={out_cap}");

    match codecs::compress(algorithm, level, input, output) {
        Ok(n) => {
            unsafe { *out_len = n };
            info!(
                "compress: algo={algorithm}, {in_len} -> {n} bytes (ratio={:.2}x)",
                if n > 0 { in_len as f64 / n as f64 } else { 0.0 }
            );
            error::SUCCESS
        }
        Err(e) => {
            if let Some(needed) = e.needed_size() {
                unsafe { *out_len = needed };
                debug!("compress: buffer too small, needed={needed}");
            } else {
                error!("compress: algo={algorithm}, error={e}");
            }
            e.to_code()
        }
    }
}

fn decompress_inner(
    algo: u8,
    in_ptr: *const u8,
    in_len: usize,
    out_ptr: *mut u8,
    out_cap: usize,
    out_len: *mut usize,
) -> i32 {
    let (input, output) = match buffers(in_ptr, in_len, out_ptr, out_cap, out_len) {
        Some(pair) => pair,
        None => {
            error!(
                "decompress: null pointer argument (in={}, out={}, out_len={})",
                !in_ptr.is_null(),
                !out_ptr.is_null(),
                !out_len.is_null()
            );
            return error::INVALID_ARGUMENT;
        }
    };

    let algorithm = match Algorithm::try_from(algo) {
        Ok(a) => a,
        Err(e) => {
            error!("decompress: unknown algorithm id {algo}");
            return e.to_code();
        }
    };

    debug!("decompress: algo={algorithm}, in_len={in_len}, out_cap={out_cap}");

    match codecs::decompress(algorithm, input, output) {
        Ok(n) => {
            unsafe { *out_len = n };
            info!("decompress: algo={algorithm}, {in_len} -> {n} bytes");
            error::SUCCESS
        }
        Err(e) => {
            if let Some(needed) = e.needed_size() {
                unsafe { *out_len = needed };
                debug!("decompress: buffer too small, needed={needed}");
            } else {
                error!("decompress: algo={algorithm}, error={e}");
            }
            e.to_code()
        }
    }
}

/// Validate the pointer arguments and build the two borrowed buffers.
///
/// A null input pointer is legal when `in_len` is 0 (the empty input); the
/// output and out-length pointers must always be non-null. Returns `None`
/// on any violation, before anything is dereferenced.
fn buffers<'a>(
    in_ptr: *const u8,
    in_len: usize,
    out_ptr: *mut u8,
    out_cap: usize,
    out_len: *mut usize,
) -> Option<(&'a [u8], &'a mut [u8])> {
    if out_ptr.is_null() || out_len.is_null() {
        return None;
    }
    let input: &[u8] = if in_len == 0 {
        &[]
    } else if in_ptr.is_null() {
        return None;
    } else {
        unsafe { std::slice::from_raw_parts(in_ptr, in_len) }
    };
    let output = unsafe { std::slice::from_raw_parts_mut(out_ptr, out_cap) };
    Some((input, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_returns_one() {
        assert_eq!(native_ping(), 1);
    }

    #[test]
    fn compress_null_ptr_returns_invalid_argument() {
        let input = b"hello";
        let mut out = [0u8; 64];
        let mut out_len: usize = 0;

        // null input pointer with a non-zero length
        let result = compress_native(
            1,
            -1,
            std::ptr::null(),
            10,
            out.as_mut_ptr(),
            out.len(),
            &mut out_len,
        );
        assert_eq!(result, error::INVALID_ARGUMENT);

        // null output pointer
        let result = compress_native(
            1,
            -1,
            input.as_ptr(),
            input.len(),
            std::ptr::null_mut(),
            64,
            &mut out_len,
        );
        assert_eq!(result, error::INVALID_ARGUMENT);

        // null out_len pointer
        let result = compress_native(
            1,
            -1,
            input.as_ptr(),
            input.len(),
            out.as_mut_ptr(),
            out.len(),
            std::ptr::null_mut(),
        );
        assert_eq!(result, error::INVALID_ARGUMENT);
    }

    #[test]
    fn null_input_with_zero_length_is_legal() {
        let mut out = [0u8; 64];
        let mut out_len: usize = 0;
        let result = compress_native(
            1,
            -1,
            std::ptr::null(),
            0,
            out.as_mut_ptr(),
            out.len(),
            &mut out_len,
        );
        assert_eq!(result, error::SUCCESS);
    }

    #[test]
    fn unknown_algo_returns_algo_not_found() {
        let input = b"hello";
        let mut out = [0u8; 64];
        let mut out_len: usize = 0;
        let result = compress_native(
            255,
            -1,
            input.as_ptr(),
            input.len(),
            out.as_mut_ptr(),
            out.len(),
            &mut out_len,
        );
        assert_eq!(result, error::ALGO_NOT_FOUND);

        let result = decompress_native(
            255,
            input.as_ptr(),
            input.len(),
            out.as_mut_ptr(),
            out.len(),
            &mut out_len,
        );
        assert_eq!(result, error::ALGO_NOT_FOUND);
    }

    #[test]
    fn estimate_unknown_algo_returns_zero() {
        assert_eq!(estimate_max_output_size_native(255, -1, 1000), 0);
    }

    #[test]
    fn decompress_invalid_data_returns_internal_error() {
        let input = b"hello";
        let mut out = [0u8; 64];
        let mut out_len: usize = 0;
        let result = decompress_native(
            1,
            input.as_ptr(),
            input.len(),
            out.as_mut_ptr(),
            out.len(),
            &mut out_len,
        );
        assert_eq!(result, error::INTERNAL_ERROR);
    }
}
