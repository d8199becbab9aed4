//! LZ4 raw-block codec (no level parameter, always fast mode).
//!
//! Fastest decompression of the bundled codecs. The raw block format does
//! not carry the uncompressed size, so decompression relies on the caller
//! providing an adequately sized output buffer.

use ferropress_core::CompressError;
use lz4_flex::block;

/// Worst-case compressed size for `input_len` raw bytes.
pub fn max_compressed_size(input_len: usize) -> usize {
    block::get_maximum_output_size(input_len)
}

pub fn compress(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    // compress_into only fails when the destination cannot hold the block.
    block::compress_into(input, output).map_err(|_| CompressError::BufferTooSmall {
        needed: max_compressed_size(input.len()),
    })
}

pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    block::decompress_into(input, output).map_err(|e| match e {
        block::DecompressError::OutputTooSmall { expected, .. } => {
            CompressError::BufferTooSmall { needed: expected }
        }
        other => CompressError::Internal(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let input = b"Hello world! ".repeat(100);
        let mut compressed = vec![0u8; max_compressed_size(input.len())];
        let n = compress(&input, &mut compressed).unwrap();
        assert!(n < input.len(), "repetitive input should shrink");

        let mut decompressed = vec![0u8; input.len()];
        let m = decompress(&compressed[..n], &mut decompressed).unwrap();
        assert_eq!(&decompressed[..m], &input[..]);
    }

    #[test]
    fn undersized_output_reports_the_bound() {
        let input = b"Hello world! ".repeat(100);
        let mut tiny = [0u8; 4];
        match compress(&input, &mut tiny).unwrap_err() {
            CompressError::BufferTooSmall { needed } => {
                assert_eq!(needed, max_compressed_size(input.len()));
            }
            other => panic!("expected BufferTooSmall, got {other}"),
        }
    }

    #[test]
    fn garbage_input_is_a_codec_failure() {
        let mut out = vec![0u8; 64];
        let err = decompress(b"hello", &mut out).unwrap_err();
        assert!(matches!(err, CompressError::Internal(_)));
    }
}
