use thiserror::Error;

/// Errors reported by the base32 size functions and decoder.
///
/// Encoding itself never fails; only the slice-based `encode_into` can
/// report `BufferTooSmall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base32Error {
    /// Text length is not a multiple of 8, or a size query overflowed.
    #[error("Invalid base32 length: {0}")]
    InvalidLength(usize),

    /// Byte at the given offset is neither an alphabet symbol nor `=`.
    #[error("Invalid base32 character {1:#04x} at offset {0}")]
    InvalidCharacter(usize, u8),

    /// Misplaced padding, a bad padding count, or non-zero trailing bits.
    #[error("Invalid base32 padding at offset {0}")]
    InvalidPadding(usize),

    #[error("Output buffer too small: need {needed} bytes, got {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Base32Error>;
