//! Snappy raw codec (no level parameter).
//!
//! The raw format prefixes the uncompressed length, so the decompress side
//! can state its exact capacity requirement up front.

use ferropress_core::CompressError;

/// Worst-case compressed size for `input_len` raw bytes.
pub fn max_compressed_size(input_len: usize) -> usize {
    snap::raw::max_compress_len(input_len)
}

pub fn compress(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    // The snap encoder requires the full worst-case capacity regardless of
    // how well the data compresses, so the capacity check happens here.
    let max = max_compressed_size(input.len());
    if output.len() < max {
        return Err(CompressError::BufferTooSmall { needed: max });
    }
    snap::raw::Encoder::new()
        .compress(input, output)
        .map_err(|e| CompressError::Internal(e.to_string()))
}

pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    let len = snap::raw::decompress_len(input)
        .map_err(|e| CompressError::Internal(e.to_string()))?;
    if output.len() < len {
        return Err(CompressError::BufferTooSmall { needed: len });
    }
    snap::raw::Decoder::new()
        .decompress(input, output)
        .map_err(|e| CompressError::Internal(e.to_string()))
}
