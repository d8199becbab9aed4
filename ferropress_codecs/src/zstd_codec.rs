//! Zstandard single-frame codec (levels 1..=22, default 3).
//!
//! Frames written here embed the content size, so decompression can state
//! its exact capacity requirement before touching the payload.

use ferropress_core::CompressError;

/// Worst-case compressed size for `input_len` raw bytes.
pub fn max_compressed_size(input_len: usize) -> usize {
    zstd::zstd_safe::compress_bound(input_len)
}

pub fn compress(input: &[u8], output: &mut [u8], level: i32) -> Result<usize, CompressError> {
    // Require the frame bound up front so the size hint is the bound and
    // not whatever partial state the encoder reached.
    let bound = max_compressed_size(input.len());
    if output.len() < bound {
        return Err(CompressError::BufferTooSmall { needed: bound });
    }
    zstd::bulk::compress_to_buffer(input, output, level)
        .map_err(|e| CompressError::Internal(e.to_string()))
}

pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize, CompressError> {
    match zstd::zstd_safe::get_frame_content_size(input) {
        Ok(Some(content_size)) => {
            if (output.len() as u64) < content_size {
                return Err(CompressError::BufferTooSmall {
                    needed: content_size as usize,
                });
            }
        }
        // A frame without an embedded size: let the decoder decide whether
        // the provided capacity suffices.
        Ok(None) => {}
        Err(_) => {
            return Err(CompressError::Internal("invalid zstd frame header".into()));
        }
    }
    zstd::bulk::decompress_to_buffer(input, output)
        .map_err(|e| CompressError::Internal(e.to_string()))
}
