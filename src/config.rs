use serde::{Deserialize, Serialize};

/// Which letter case the decoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasePolicy {
    /// `a-z` are folded to `A-Z` before lookup.
    #[default]
    Insensitive,
    /// Only the canonical upper case alphabet is accepted.
    UpperOnly,
}

/// What the decoder does with bits left over after the last whole byte of
/// the final block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingBits {
    /// Non-zero leftover bits are rejected as `InvalidPadding`.
    #[default]
    Strict,
    /// Leftover bits are discarded.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DecodeConfig {
    pub case: CasePolicy,
    pub trailing_bits: TrailingBits,
}

impl DecodeConfig {
    pub fn new(case: CasePolicy, trailing_bits: TrailingBits) -> Self {
        DecodeConfig {
            case,
            trailing_bits,
        }
    }

    /// Builds a config from command line style flags.
    ///
    /// `--upper-only` selects [`CasePolicy::UpperOnly`] and `--lenient`
    /// selects [`TrailingBits::Lenient`]. Returns the first unknown flag as
    /// the error.
    pub fn from_flags<'a, I>(flags: I) -> Result<Self, &'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut config = DecodeConfig::default();
        for flag in flags {
            match flag {
                "--upper-only" => config.case = CasePolicy::UpperOnly,
                "--lenient" => config.trailing_bits = TrailingBits::Lenient,
                other => return Err(other),
            }
        }
        Ok(config)
    }
}
