use std::fmt;
use std::ops::RangeInclusive;

use crate::error::CompressError;

/// Compression algorithms with stable one-byte identifiers.
///
/// The discriminants are part of the wire contract shared with every
/// embedder of the native library: they are never reused or renumbered.
/// Adding an algorithm means appending a new id, nothing else moves.
///
/// Not every registered algorithm is functional. Brotli, Lzma2, Bzip2 and
/// Lzf are placeholder entries that reserve their ids; both transform
/// directions report an internal error for them (see `ferropress_codecs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Algorithm {
    Lz4 = 1,
    Snappy = 2,
    Zstd = 3,
    Gzip = 4,
    Brotli = 5,
    Lzma2 = 6,
    Bzip2 = 7,
    Lzf = 8,
    Deflate = 9,
}

impl Algorithm {
    /// Every registered algorithm, in id order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Lz4,
        Algorithm::Snappy,
        Algorithm::Zstd,
        Algorithm::Gzip,
        Algorithm::Brotli,
        Algorithm::Lzma2,
        Algorithm::Bzip2,
        Algorithm::Lzf,
        Algorithm::Deflate,
    ];

    /// Stable identifier transported across the native boundary.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Human-readable name for logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Lz4 => "lz4",
            Algorithm::Snappy => "snappy",
            Algorithm::Zstd => "zstd",
            Algorithm::Gzip => "gzip",
            Algorithm::Brotli => "brotli",
            Algorithm::Lzma2 => "lzma2",
            Algorithm::Bzip2 => "bzip2",
            Algorithm::Lzf => "lzf",
            Algorithm::Deflate => "deflate",
        }
    }

    /// Valid compression-level range, or `None` for algorithms without a
    /// level parameter (lz4, snappy, lzf).
    pub fn level_range(self) -> Option<RangeInclusive<i32>> {
        match self {
            Algorithm::Lz4 | Algorithm::Snappy | Algorithm::Lzf => None,
            Algorithm::Zstd => Some(1..=22),
            Algorithm::Gzip | Algorithm::Lzma2 | Algorithm::Deflate => Some(0..=9),
            Algorithm::Brotli => Some(0..=11),
            Algorithm::Bzip2 => Some(1..=9),
        }
    }

    /// Default level, selected when the caller passes a negative level.
    /// Zero for level-less algorithms.
    pub fn default_level(self) -> i32 {
        match self {
            Algorithm::Lz4 | Algorithm::Snappy | Algorithm::Lzf => 0,
            Algorithm::Zstd => 3,
            Algorithm::Gzip
            | Algorithm::Brotli
            | Algorithm::Lzma2
            | Algorithm::Bzip2
            | Algorithm::Deflate => 6,
        }
    }

    /// Resolve the effective level for a call.
    ///
    /// Policy, identical for every leveled algorithm: a negative level
    /// selects the default, an out-of-range non-negative level is clamped
    /// to the nearest valid bound, and level-less algorithms ignore the
    /// parameter entirely (always 0). Out-of-range levels are never an
    /// error.
    ///
    /// Ranges and defaults:
    /// - lz4, snappy, lzf: no level
    /// - zstd: 1..=22, default 3
    /// - gzip, deflate, lzma2: 0..=9, default 6
    /// - brotli: 0..=11, default 6
    /// - bzip2: 1..=9, default 6
    pub fn clamp_level(self, level: i32) -> i32 {
        match self.level_range() {
            None => 0,
            Some(range) => {
                if level < 0 {
                    self.default_level()
                } else {
                    level.clamp(*range.start(), *range.end())
                }
            }
        }
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = CompressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Algorithm::Lz4),
            2 => Ok(Algorithm::Snappy),
            3 => Ok(Algorithm::Zstd),
            4 => Ok(Algorithm::Gzip),
            5 => Ok(Algorithm::Brotli),
            6 => Ok(Algorithm::Lzma2),
            7 => Ok(Algorithm::Bzip2),
            8 => Ok(Algorithm::Lzf),
            9 => Ok(Algorithm::Deflate),
            _ => Err(CompressError::AlgoNotFound(value)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
