//! RFC4648 base32 encoding and decoding.
//!
//! ```
//! use simple_base32::{decode, encode, encoded_length};
//!
//! assert_eq!(encode(b"foobar"), "MZXW6YTBOI======");
//! assert_eq!(encoded_length(6), 16);
//! assert_eq!(decode("mzxw6ytboi======").unwrap(), b"foobar");
//! ```

pub mod alphabet;
pub mod codec;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod length;
pub mod logger;
pub mod result;
pub mod service;

pub use codec::Base32Codec;
pub use config::{CasePolicy, DecodeConfig, TrailingBits};
pub use decode::{decode, decode_into, decode_with};
pub use encode::{encode, encode_into};
pub use error::{Base32Error, Result};
pub use length::{
    checked_encoded_length, decoded_length, decoded_length_upper_bound, encoded_length,
};
