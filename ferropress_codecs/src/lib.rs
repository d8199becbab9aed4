//! Codec dispatch for the ferropress boundary.
//!
//! The three operations below multiplex the registered algorithms behind a
//! single exhaustive match per operation. The `Algorithm` set is closed on
//! purpose: id stability matters more than open-ended extensibility, so
//! dispatch is an enum match rather than trait objects.
//!
//! Brotli, Lzma2, Bzip2 and Lzf are placeholder entries. Their ids are
//! reserved in the registry but both transform directions report a codec
//! failure; callers see `INTERNAL_ERROR`, the same code as corrupt input.

mod deflate_codec;
mod gzip_codec;
mod lz4_codec;
mod snappy_codec;
mod zstd_codec;

pub mod fault;

use ferropress_core::{Algorithm, CompressError};

/// Compress `input` into `output`, returning the number of bytes written.
///
/// The level is resolved through [`Algorithm::clamp_level`] before it
/// reaches the codec, so any i32 is acceptable here. If `output` is too
/// small the error carries the minimum capacity that would have succeeded,
/// and any bytes already written to `output` are meaningless.
pub fn compress(
    algo: Algorithm,
    level: i32,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, CompressError> {
    fault::trip();
    let level = algo.clamp_level(level);

    match algo {
        Algorithm::Lz4 => lz4_codec::compress(input, output),
        Algorithm::Snappy => snappy_codec::compress(input, output),
        Algorithm::Zstd => zstd_codec::compress(input, output, level),
        Algorithm::Gzip => gzip_codec::compress(input, output, level),
        Algorithm::Deflate => deflate_codec::compress(input, output, level),
        Algorithm::Brotli | Algorithm::Lzma2 | Algorithm::Bzip2 | Algorithm::Lzf => {
            Err(not_implemented(algo))
        }
    }
}

/// Decompress `input` into `output`, returning the number of bytes written.
///
/// Decompression takes no level for any registered algorithm. Corrupt
/// input is reported as a codec failure, indistinguishable on the code
/// channel from a placeholder algorithm.
pub fn decompress(
    algo: Algorithm,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, CompressError> {
    fault::trip();

    match algo {
        Algorithm::Lz4 => lz4_codec::decompress(input, output),
        Algorithm::Snappy => snappy_codec::decompress(input, output),
        Algorithm::Zstd => zstd_codec::decompress(input, output),
        Algorithm::Gzip => gzip_codec::decompress(input, output),
        Algorithm::Deflate => deflate_codec::decompress(input, output),
        Algorithm::Brotli | Algorithm::Lzma2 | Algorithm::Bzip2 | Algorithm::Lzf => {
            Err(not_implemented(algo))
        }
    }
}

/// Worst-case compressed size for `input_len` bytes, by formula.
///
/// Each codec module owns its bound; placeholders use a blanket doubling
/// so a future implementation can only tighten the estimate. A buffer of
/// this capacity is guaranteed to make [`compress`] succeed for any input
/// of this length at any level.
pub fn estimate_max_output_size(algo: Algorithm, _level: i32, input_len: usize) -> usize {
    match algo {
        Algorithm::Lz4 => lz4_codec::max_compressed_size(input_len),
        Algorithm::Snappy => snappy_codec::max_compressed_size(input_len),
        Algorithm::Zstd => zstd_codec::max_compressed_size(input_len),
        Algorithm::Gzip => gzip_codec::max_compressed_size(input_len),
        Algorithm::Deflate => deflate_codec::max_compressed_size(input_len),
        Algorithm::Brotli | Algorithm::Lzma2 | Algorithm::Bzip2 | Algorithm::Lzf => {
            input_len * 2 + 64
        }
    }
}

fn not_implemented(algo: Algorithm) -> CompressError {
    CompressError::Internal(format!("{algo} is not implemented"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_fail_both_directions() {
        let input = b"payload";
        let mut out = vec![0u8; 256];
        for algo in [
            Algorithm::Brotli,
            Algorithm::Lzma2,
            Algorithm::Bzip2,
            Algorithm::Lzf,
        ] {
            let err = compress(algo, -1, input, &mut out).unwrap_err();
            assert_eq!(err.to_code(), ferropress_core::error::INTERNAL_ERROR);
            let err = decompress(algo, input, &mut out).unwrap_err();
            assert_eq!(err.to_code(), ferropress_core::error::INTERNAL_ERROR);
        }
    }

    #[test]
    fn estimates_are_never_zero_for_nonempty_input() {
        for algo in Algorithm::ALL {
            assert!(estimate_max_output_size(algo, -1, 1) > 0, "{algo}");
        }
    }
}
