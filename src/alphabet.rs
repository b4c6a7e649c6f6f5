//! RFC4648 base32 alphabet.
//!
//! ```text
//! value  0..=25  26..=31
//! symbol A-Z     2-7
//! ```

use crate::config::CasePolicy;

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Padding character.
pub const PAD: u8 = b'=';

/// Number of encoded characters per block.
pub const BLOCK_CHARS: usize = 8;

/// Number of bytes per block.
pub const BLOCK_BYTES: usize = 5;

const INVALID: u8 = 0xFF;

/// ASCII byte -> 5-bit value, `INVALID` for anything else. Upper case only.
const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const DECODE_TABLE: [u8; 256] = build_decode_table();

/// Maps a 5-bit value to its symbol. Bits above the low five are ignored.
#[inline]
pub const fn value_to_char(value: u8) -> u8 {
    ALPHABET[(value & 0x1F) as usize]
}

/// Maps a symbol back to its 5-bit value, `None` when `c` is not part of the
/// alphabet under the given case policy. `=` is never a symbol.
#[inline]
pub fn char_to_value(c: u8, case: CasePolicy) -> Option<u8> {
    let c = match case {
        CasePolicy::Insensitive => c.to_ascii_uppercase(),
        CasePolicy::UpperOnly => c,
    };
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}
