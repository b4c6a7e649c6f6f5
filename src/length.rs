//! Output sizing for both directions.

use crate::alphabet::{BLOCK_BYTES, BLOCK_CHARS};
use crate::config::CasePolicy;
use crate::decode::validate;
use crate::error::{Base32Error, Result};

/// Exact number of characters `encode` produces for `len` input bytes.
///
/// Being a `const fn`, it can size stack buffers:
/// `let mut buf = [0u8; encoded_length(10)];`
///
/// Panics on overflow; see [`checked_encoded_length`].
pub const fn encoded_length(len: usize) -> usize {
    len.div_ceil(BLOCK_BYTES) * BLOCK_CHARS
}

pub fn checked_encoded_length(len: usize) -> Result<usize> {
    len.div_ceil(BLOCK_BYTES)
        .checked_mul(BLOCK_CHARS)
        .ok_or(Base32Error::InvalidLength(len))
}

/// Largest number of bytes `len` characters of base32 can decode to.
///
/// The exact figure depends on the padding of the final block, see
/// [`decoded_length`].
pub fn decoded_length_upper_bound(len: usize) -> Result<usize> {
    if len % BLOCK_CHARS != 0 {
        return Err(Base32Error::InvalidLength(len));
    }
    Ok(len / BLOCK_CHARS * BLOCK_BYTES)
}

/// Exact decoded length of `text` under the default case policy.
///
/// Reports the same character, length and padding errors as `decode`;
/// non-zero trailing bits are only detected by decoding.
pub fn decoded_length<T: AsRef<[u8]>>(text: T) -> Result<usize> {
    validate(text.as_ref(), CasePolicy::Insensitive)
}
