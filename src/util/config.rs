// Codec Configuration
// Block length and alphabet selection shared by encryption and decryption

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::rsa::alphabet::{basic, extended, Alphabet};
use crate::rsa::error::Result as CodecResult;

/// Block length used when none is configured
pub const DEFAULT_BLOCK_LENGTH: usize = 4;

/// Which alphabet a codec run uses
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AlphabetKind {
    /// A-Z -> 0-25
    #[default]
    Basic,
    /// `*` -> 0, A-Z -> 1-26, 0-9 -> 27-36
    Extended,
    /// Symbols numbered 0, 1, 2, ... in the order given
    Custom(String),
}

impl AlphabetKind {
    /// Borrow the static table or build the custom one
    pub fn resolve(&self) -> CodecResult<Cow<'static, Alphabet>> {
        match self {
            AlphabetKind::Basic => Ok(Cow::Borrowed(basic())),
            AlphabetKind::Extended => Ok(Cow::Borrowed(extended())),
            AlphabetKind::Custom(symbols) => Alphabet::from_symbols(symbols).map(Cow::Owned),
        }
    }
}

impl FromStr for AlphabetKind {
    type Err = String;

    /// Accepts `basic`, `extended` or `custom:<symbols>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(AlphabetKind::Basic),
            "extended" => Ok(AlphabetKind::Extended),
            _ => match s.strip_prefix("custom:") {
                Some(symbols) if !symbols.is_empty() => {
                    Alphabet::from_symbols(symbols).map_err(|e| e.to_string())?;
                    Ok(AlphabetKind::Custom(symbols.to_string()))
                }
                _ => Err(format!(
                    "unknown alphabet {:?}: expected basic, extended or custom:<symbols>",
                    s
                )),
            },
        }
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetKind::Basic => write!(f, "basic"),
            AlphabetKind::Extended => write!(f, "extended"),
            AlphabetKind::Custom(symbols) => write!(f, "custom:{}", symbols),
        }
    }
}

/// Configuration for text encryption/decryption
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    pub block_length: usize,
    pub alphabet: AlphabetKind,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            block_length: DEFAULT_BLOCK_LENGTH,
            alphabet: AlphabetKind::default(),
        }
    }
}

impl CodecConfig {
    pub fn with_block_length(mut self, block_length: usize) -> Self {
        self.block_length = block_length;
        self
    }

    pub fn with_alphabet(mut self, alphabet: AlphabetKind) -> Self {
        self.alphabet = alphabet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::error::RsaError;
    use test_case::test_case;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.block_length, 4);
        assert_eq!(config.alphabet, AlphabetKind::Basic);
    }

    #[test]
    fn test_builder() {
        let config = CodecConfig::default()
            .with_block_length(6)
            .with_alphabet(AlphabetKind::Extended);
        assert_eq!(config.block_length, 6);
        assert_eq!(config.alphabet.resolve().unwrap().len(), 37);
    }

    #[test_case("basic" => Ok(AlphabetKind::Basic))]
    #[test_case("extended" => Ok(AlphabetKind::Extended))]
    #[test_case("custom:XYZ" => Ok(AlphabetKind::Custom("XYZ".to_string())))]
    fn test_parse_alphabet_kind(s: &str) -> Result<AlphabetKind, String> {
        s.parse()
    }

    #[test_case("greek")]
    #[test_case("custom:")]
    #[test_case("custom:AAAAAAAAAAB")]
    fn test_parse_alphabet_kind_rejects(s: &str) {
        assert!(s.parse::<AlphabetKind>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for kind in [
            AlphabetKind::Basic,
            AlphabetKind::Extended,
            AlphabetKind::Custom("01".to_string()),
        ] {
            assert_eq!(kind.to_string().parse::<AlphabetKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_resolve_custom() {
        let alphabet = AlphabetKind::Custom("XYZ".to_string()).resolve().unwrap();
        assert_eq!(alphabet.code_of('Z'), Ok(2));
        assert!(matches!(AlphabetKind::Basic.resolve(), Ok(Cow::Borrowed(_))));

        let repeated = AlphabetKind::Custom("XYX".to_string()).resolve();
        assert_eq!(repeated, Err(RsaError::DuplicateSymbol('X')));
    }
}
