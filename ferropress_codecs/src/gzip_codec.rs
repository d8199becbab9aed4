//! Gzip codec via flate2 (levels 0..=9, default 6).
//!
//! flate2 exposes no fallible write-into-slice encoder, so both directions
//! run through a scratch Vec and the caller's capacity is checked on the
//! finished result. The hint on a too-small buffer is therefore exact.

use std::io::{Read, Write};

use ferropress_core::CompressError;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Worst-case compressed size for `input_len` raw bytes: deflate stored
/// blocks cost under 1/16 of overhead, plus the gzip header and trailer.
pub fn max_compressed_size(input_len: usize) -> usize {
    input_len + input_len / 8 + 32
}

pub fn compress(input: &[u8], output: &mut [u8], level: i32) -> Result<usize, CompressError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level as u32));
    encoder
        .write_all(input)
        .map_err(|e| CompressError::Internal(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| CompressError::Internal(e.to_string()))?;
    copy_checked(&compressed, output)
}

pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    let mut decoder = GzDecoder::new(input);
    let mut raw = Vec::new();
    decoder
        .read_to_end(&mut raw)
        .map_err(|e| CompressError::Internal(e.to_string()))?;
    copy_checked(&raw, output)
}

/// Copy `src` into `dst` or report the exact capacity required.
pub(crate) fn copy_checked(src: &[u8], dst: &mut [u8]) -> Result<usize, CompressError> {
    if src.len() > dst.len() {
        return Err(CompressError::BufferTooSmall { needed: src.len() });
    }
    dst[..src.len()].copy_from_slice(src);
    Ok(src.len())
}
