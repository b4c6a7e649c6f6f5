use crate::alphabet::{BLOCK_BYTES, BLOCK_CHARS, PAD, value_to_char};
use crate::error::{Base32Error, Result};
use crate::length::encoded_length;

/// Encodes `input` as padded RFC4648 base32.
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    let input = input.as_ref();
    let mut encoded = vec![0u8; encoded_length(input.len())];
    let written = encode_blocks(input, &mut encoded);
    debug_assert_eq!(written, encoded.len());

    // The alphabet and padding are ASCII.
    encoded.into_iter().map(char::from).collect()
}

/// Encodes `input` into a caller-sized buffer and returns the number of
/// characters written, always `encoded_length(input.len())`.
pub fn encode_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    let needed = encoded_length(input.len());
    if output.len() < needed {
        return Err(Base32Error::BufferTooSmall {
            needed,
            available: output.len(),
        });
    }
    Ok(encode_blocks(input, &mut output[..needed]))
}

fn encode_blocks(input: &[u8], output: &mut [u8]) -> usize {
    let mut written = 0;
    for chunk in input.chunks(BLOCK_BYTES) {
        let block = &mut output[written..written + BLOCK_CHARS];
        let data_chars = encode_chunk(chunk, block);
        block[data_chars..].fill(PAD);
        written += BLOCK_CHARS;
    }
    written
}

/// Writes the symbols for up to 5 bytes and returns how many were written:
/// 2, 4, 5, 7 or 8 for 1 to 5 bytes.
fn encode_chunk(chunk: &[u8], block: &mut [u8]) -> usize {
    // Holds at most 4 pending bits plus one incoming byte.
    let mut buffer: u16 = 0;
    let mut bits: u32 = 0;
    let mut n = 0;

    for &byte in chunk {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            block[n] = value_to_char((buffer >> bits) as u8);
            n += 1;
        }
        buffer &= (1 << bits) - 1;
    }

    // Left-align the remaining bits in a final group, zero-filled.
    if bits > 0 {
        block[n] = value_to_char((buffer << (5 - bits)) as u8);
        n += 1;
    }

    n
}
