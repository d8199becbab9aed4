use ferropress_core::error as code;
use ferropress_core::Algorithm;

use crate::error::BoundaryError;

/// Stateful wrapper that reuses one growable output buffer across calls,
/// for callers pushing many payloads through the boundary.
///
/// Results are returned as borrowed slices into the internal buffer, so a
/// call produces no allocation once the buffer has grown to the working
/// size. The borrow also makes the reuse contract explicit: a result must
/// be consumed (or copied out) before the next call.
///
/// Not thread-safe by design: methods take `&mut self`, so sharing an
/// instance across threads requires external serialization. Use one
/// instance per thread. Buffer growth replaces the allocation outright
/// rather than extending it in place.
pub struct Compressor {
    out: Vec<u8>,
}

impl Compressor {
    /// Default initial buffer of 4 KB.
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Start with `capacity` bytes of output buffer, for callers that know
    /// their payload sizes up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: vec![0u8; capacity],
        }
    }

    /// Compress `input`; the returned slice is valid until the next call.
    pub fn compress(
        &mut self,
        algorithm: Algorithm,
        level: i32,
        input: &[u8],
    ) -> Result<&[u8], BoundaryError> {
        let estimate = crate::estimate_max_output_size(algorithm, level, input.len());
        self.ensure_capacity(estimate);

        let mut out_len: usize = 0;
        let mut result = self.invoke_compress(algorithm, level, input, &mut out_len);

        if result == code::BUFFER_TOO_SMALL {
            self.ensure_capacity(out_len);
            result = self.invoke_compress(algorithm, level, input, &mut out_len);
        }

        if result == code::SUCCESS {
            Ok(&self.out[..out_len])
        } else {
            Err(BoundaryError::from_code(algorithm, result, out_len))
        }
    }

    /// Decompress `input`; the returned slice is valid until the next call.
    pub fn decompress(
        &mut self,
        algorithm: Algorithm,
        input: &[u8],
        expected_size: usize,
    ) -> Result<&[u8], BoundaryError> {
        self.ensure_capacity(expected_size);

        let mut out_len: usize = 0;
        let mut result = self.invoke_decompress(algorithm, input, &mut out_len);

        if result == code::BUFFER_TOO_SMALL {
            self.ensure_capacity(out_len);
            result = self.invoke_decompress(algorithm, input, &mut out_len);
        }

        if result == code::SUCCESS {
            Ok(&self.out[..out_len])
        } else {
            Err(BoundaryError::from_code(algorithm, result, out_len))
        }
    }

    /// Current output buffer capacity, exposed for tests and tuning.
    pub fn capacity(&self) -> usize {
        self.out.len()
    }

    fn invoke_compress(
        &mut self,
        algorithm: Algorithm,
        level: i32,
        input: &[u8],
        out_len: &mut usize,
    ) -> i32 {
        ferropress_ffi::compress_native(
            algorithm.id(),
            level,
            input.as_ptr(),
            input.len(),
            self.out.as_mut_ptr(),
            self.out.len(),
            out_len,
        )
    }

    fn invoke_decompress(
        &mut self,
        algorithm: Algorithm,
        input: &[u8],
        out_len: &mut usize,
    ) -> i32 {
        ferropress_ffi::decompress_native(
            algorithm.id(),
            input.as_ptr(),
            input.len(),
            self.out.as_mut_ptr(),
            self.out.len(),
            out_len,
        )
    }

    /// Grow (never shrink) the reused buffer to at least `needed` bytes,
    /// doubling to amortize repeated small increases. The old allocation
    /// is dropped, so no caller can be left holding a stale slice.
    fn ensure_capacity(&mut self, needed: usize) {
        if self.out.len() < needed {
            let grown = needed.max(self.out.len() * 2);
            self.out = vec![0u8; grown];
        }
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}
