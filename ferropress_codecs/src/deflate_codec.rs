//! Raw-deflate codec via flate2 (levels 0..=9, default 6).
//!
//! Same scratch-Vec strategy as the gzip codec; the two share the stored-
//! block overhead bound, deflate just has no header or trailer to pay for.

use std::io::{Read, Write};

use ferropress_core::CompressError;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::gzip_codec::copy_checked;

/// Worst-case compressed size for `input_len` raw bytes.
pub fn max_compressed_size(input_len: usize) -> usize {
    input_len + input_len / 8 + 32
}

pub fn compress(input: &[u8], output: &mut [u8], level: i32) -> Result<usize, CompressError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::new(level as u32));
    encoder
        .write_all(input)
        .map_err(|e| CompressError::Internal(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| CompressError::Internal(e.to_string()))?;
    copy_checked(&compressed, output)
}

pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    let mut decoder = DeflateDecoder::new(input);
    let mut raw = Vec::new();
    decoder
        .read_to_end(&mut raw)
        .map_err(|e| CompressError::Internal(e.to_string()))?;
    copy_checked(&raw, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let input = b"Hello world! ".repeat(100);
        let mut compressed = vec![0u8; max_compressed_size(input.len())];
        let n = compress(&input, &mut compressed, 6).unwrap();
        assert!(n < input.len());

        let mut decompressed = vec![0u8; input.len()];
        let m = decompress(&compressed[..n], &mut decompressed).unwrap();
        assert_eq!(&decompressed[..m], &input[..]);
    }

    #[test]
    fn level_zero_stores_within_the_bound() {
        let input = vec![0xA5u8; 100_000];
        let mut compressed = vec![0u8; max_compressed_size(input.len())];
        let n = compress(&input, &mut compressed, 0).unwrap();
        assert!(n <= max_compressed_size(input.len()));

        let mut decompressed = vec![0u8; input.len()];
        let m = decompress(&compressed[..n], &mut decompressed).unwrap();
        assert_eq!(m, input.len());
    }
}
