use crate::alphabet::{BLOCK_BYTES, BLOCK_CHARS, PAD, char_to_value};
use crate::config::{CasePolicy, DecodeConfig, TrailingBits};
use crate::error::{Base32Error, Result};
use crate::length::decoded_length_upper_bound;

/// Decodes padded base32 with the default [`DecodeConfig`]: lower case is
/// accepted and non-zero trailing bits are rejected.
pub fn decode<T: AsRef<[u8]>>(text: T) -> Result<Vec<u8>> {
    decode_with(text, &DecodeConfig::default())
}

pub fn decode_with<T: AsRef<[u8]>>(text: T, config: &DecodeConfig) -> Result<Vec<u8>> {
    let text = text.as_ref();
    let mut decoded = vec![0u8; decoded_length_upper_bound(text.len()).unwrap_or(0)];
    let len = decode_into(text, &mut decoded, config)?;
    decoded.truncate(len);
    Ok(decoded)
}

/// Decodes into a caller-sized buffer and returns the number of bytes
/// written.
///
/// `output` must hold the decoded bytes; `decoded_length_upper_bound` is
/// always enough. `output` is left untouched when an error is returned.
pub fn decode_into(text: &[u8], output: &mut [u8], config: &DecodeConfig) -> Result<usize> {
    let needed = validate(text, config.case)?;
    if output.len() < needed {
        return Err(Base32Error::BufferTooSmall {
            needed,
            available: output.len(),
        });
    }
    if text.is_empty() {
        return Ok(0);
    }

    // Only the final block can carry padding or trailing bits, so it is
    // decoded first into scratch space.
    let last_offset = text.len() - BLOCK_CHARS;
    let (full_blocks, last) = text.split_at(last_offset);
    let data_chars = block_data_chars(last, last_offset)?;
    let mut tail = [0u8; BLOCK_BYTES];
    let tail_len = decode_block(&last[..data_chars], last_offset, &mut tail, config)?;

    let mut written = 0;
    for (i, block) in full_blocks.chunks_exact(BLOCK_CHARS).enumerate() {
        written += decode_block(block, i * BLOCK_CHARS, &mut output[written..], config)?;
    }
    output[written..written + tail_len].copy_from_slice(&tail[..tail_len]);
    written += tail_len;

    debug_assert_eq!(written, needed);
    Ok(written)
}

/// Checks characters, length and the padding of every block, returning the
/// exact decoded length. Trailing bits are left to the decoder.
pub(crate) fn validate(text: &[u8], case: CasePolicy) -> Result<usize> {
    check_characters(text, case)?;
    decoded_length_upper_bound(text.len())?;

    let blocks = text.len() / BLOCK_CHARS;
    let mut len = 0;
    for (i, block) in text.chunks_exact(BLOCK_CHARS).enumerate() {
        let offset = i * BLOCK_CHARS;
        let data_chars = block_data_chars(block, offset)?;
        if data_chars < BLOCK_CHARS && i + 1 != blocks {
            return Err(Base32Error::InvalidPadding(offset + data_chars));
        }
        len += decoded_block_len(data_chars).unwrap_or(BLOCK_BYTES);
    }
    Ok(len)
}

/// Every byte must be an alphabet symbol or `=`; structure is checked later.
fn check_characters(text: &[u8], case: CasePolicy) -> Result<()> {
    match text
        .iter()
        .position(|&c| c != PAD && char_to_value(c, case).is_none())
    {
        Some(offset) => Err(Base32Error::InvalidCharacter(offset, text[offset])),
        None => Ok(()),
    }
}

/// Counts the data characters of one block. `=` may only form a suffix and
/// the suffix length must be one of 0, 1, 3, 4 or 6.
pub(crate) fn block_data_chars(block: &[u8], offset: usize) -> Result<usize> {
    let data_chars = block
        .iter()
        .position(|&c| c == PAD)
        .unwrap_or(block.len());

    if let Some(pos) = block[data_chars..].iter().position(|&c| c != PAD) {
        return Err(Base32Error::InvalidPadding(offset + data_chars + pos));
    }

    match decoded_block_len(data_chars) {
        Some(_) => Ok(data_chars),
        None => Err(Base32Error::InvalidPadding(offset + data_chars)),
    }
}

/// Bytes carried by a block with `data_chars` symbols, `None` for counts
/// the encoder never produces.
pub(crate) const fn decoded_block_len(data_chars: usize) -> Option<usize> {
    match data_chars {
        8 => Some(5),
        7 => Some(4),
        5 => Some(3),
        4 => Some(2),
        2 => Some(1),
        _ => None,
    }
}

fn decode_block(
    symbols: &[u8],
    offset: usize,
    output: &mut [u8],
    config: &DecodeConfig,
) -> Result<usize> {
    // Holds at most 7 pending bits plus one incoming symbol.
    let mut buffer: u16 = 0;
    let mut bits: u32 = 0;
    let mut n = 0;

    for (i, &c) in symbols.iter().enumerate() {
        // Already screened by `check_characters`.
        let value =
            char_to_value(c, config.case).ok_or(Base32Error::InvalidCharacter(offset + i, c))?;
        buffer = (buffer << 5) | u16::from(value);
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            output[n] = (buffer >> bits) as u8;
            n += 1;
            buffer &= (1 << bits) - 1;
        }
    }

    if buffer != 0 && config.trailing_bits == TrailingBits::Strict {
        log::trace!("non-zero trailing bits in block at offset {offset}");
        return Err(Base32Error::InvalidPadding(offset + symbols.len() - 1));
    }

    Ok(n)
}
