use crate::config::DecodeConfig;
use crate::decode::decode_with;
use crate::encode::encode;
use crate::error::Result;

/// Base32 codec bound to one decode policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32Codec {
    config: DecodeConfig,
}

impl Base32Codec {
    pub fn new(config: DecodeConfig) -> Self {
        Base32Codec { config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn encode<T>(&self, input: T) -> String
    where
        T: AsRef<[u8]>,
    {
        let input = input.as_ref();
        log::trace!("[encode] {} bytes", input.len());
        encode(input)
    }

    pub fn decode<T>(&self, input: T) -> Result<Vec<u8>>
    where
        T: AsRef<[u8]>,
    {
        let input = input.as_ref();
        log::trace!("[decode] {} characters, {:?}", input.len(), self.config);
        decode_with(input, &self.config).inspect_err(|e| log::debug!("[decode] rejected: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Base32Codec;
    use crate::config::{CasePolicy, DecodeConfig, TrailingBits};
    use crate::error::Base32Error;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    #[test]
    fn test_empty_input() {
        let codec = Base32Codec::default();
        let input: &[u8] = &[];
        let encoded = codec.encode(input);
        assert_eq!(encoded, "");
        let decoded = codec.decode(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, Vec::<u8>::new());
    }

    #[test]
    fn test_all_zero_input() {
        let codec = Base32Codec::default();
        let input = vec![0, 0, 0, 0];
        let encoded = codec.encode(&input);
        assert_eq!(encoded, "AAAAAAA=");
        let decoded = codec.decode(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_known_values() {
        let codec = Base32Codec::default();

        let input = b"Hello, Base32!";
        let encoded = codec.encode(input);
        assert_eq!(encoded, "JBSWY3DPFQQEEYLTMUZTEII=");
        let decoded = codec.decode(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_large_random_inputs() {
        let codec = Base32Codec::default();

        let mut rng = StdRng::seed_from_u64(42); // deterministic RNG for reproducibility

        for size in &[1usize, 10, 100, 1000, 5000] {
            let mut input = vec![0u8; *size];
            rng.fill_bytes(&mut input);
            let encoded = codec.encode(&input);
            let decoded = codec.decode(encoded.as_bytes()).unwrap();
            assert_eq!(decoded, input, "Failed for size: {size}");
        }
    }

    #[test]
    fn test_decode_invalid_characters() {
        let codec = Base32Codec::default();

        let invalid_inputs = ["Hello123", "MZXW6YT0", "ABCD$%^&", "abc\u{2603}de"];

        for &input in &invalid_inputs {
            let result = codec.decode(input.as_bytes());
            assert!(
                matches!(result, Err(Base32Error::InvalidCharacter(..))),
                "Invalid input '{input}' should error, got {result:?}"
            );
        }
    }

    #[test]
    fn test_config_is_applied() {
        let strict = Base32Codec::new(DecodeConfig::new(
            CasePolicy::UpperOnly,
            TrailingBits::Strict,
        ));
        let lenient = Base32Codec::new(DecodeConfig::new(
            CasePolicy::Insensitive,
            TrailingBits::Lenient,
        ));

        assert_eq!(strict.config().case, CasePolicy::UpperOnly);
        assert!(strict.decode("my======").is_err());
        assert!(strict.decode("MZ======").is_err());
        assert_eq!(lenient.decode("mz======").unwrap(), b"f");
    }
}
