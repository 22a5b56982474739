// Alphabet
// Bidirectional character <-> code table used by the block codec

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;

use super::bigint::{from_u64, number_of_decimal_digits, RsaBigInt};
use super::error::{Result, RsaError};

/// Filler symbol holding code 0 in the extended alphabet
pub const WILDCARD: char = '*';

static BASIC: Lazy<Alphabet> = Lazy::new(|| numbered("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));

static EXTENDED: Lazy<Alphabet> = Lazy::new(|| {
    let symbols = format!("{}ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789", WILDCARD);
    numbered(&symbols)
});

fn numbered(symbols: &str) -> Alphabet {
    symbols.chars().zip(0u32..).collect()
}

/// 26-symbol alphabet: A-Z -> 0-25
pub fn basic() -> &'static Alphabet {
    &BASIC
}

/// 37-symbol alphabet: `*` -> 0, A-Z -> 1-26, 0-9 -> 27-36
pub fn extended() -> &'static Alphabet {
    &EXTENDED
}

/// Injective mapping from characters to codes, kept together with its inverse.
///
/// Both directions live behind one type so a binding can never exist in only
/// one of them. Assigning a pair evicts any previous owner of either side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    codes: BTreeMap<char, u32>,
    characters: BTreeMap<u32, char>,
}

impl Alphabet {
    /// Empty alphabet
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign codes 0, 1, 2, ... to `symbols` in order.
    /// Fails with `DuplicateSymbol` if a symbol repeats, since the codes would skip values.
    pub fn from_symbols(symbols: &str) -> Result<Self> {
        let mut seen = BTreeSet::new();
        if let Some(repeated) = symbols.chars().find(|&c| !seen.insert(c)) {
            return Err(RsaError::DuplicateSymbol(repeated));
        }
        Ok(numbered(symbols))
    }

    /// Code bound to `character`
    pub fn code_of(&self, character: char) -> Result<u32> {
        self.codes
            .get(&character)
            .copied()
            .ok_or(RsaError::UnknownCharacter(character))
    }

    /// Character bound to `code`
    pub fn character_of(&self, code: u32) -> Result<char> {
        self.characters
            .get(&code)
            .copied()
            .ok_or_else(|| RsaError::UnknownCode(RsaBigInt::from(code)))
    }

    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when no character is bound
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether `character` has a code
    pub fn contains(&self, character: char) -> bool {
        self.codes.contains_key(&character)
    }

    /// Bindings ordered by code
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.characters.iter().map(|(&code, &character)| (character, code))
    }

    /// Highest code in use, `None` when empty
    pub fn largest_code(&self) -> Option<u32> {
        self.characters.keys().next_back().copied()
    }

    /// The character used to pad messages to a whole number of blocks
    pub fn zero_character(&self) -> Result<char> {
        self.character_of(0)
    }

    /// Decimal width every code is padded to inside a block.
    ///
    /// Wide enough for the largest code; for the usual contiguous tables this
    /// is the digit count of `len() - 1`.
    pub fn digits_per_character(&self) -> usize {
        let largest = self.largest_code().unwrap_or(0);
        number_of_decimal_digits(&from_u64(u64::from(largest)))
    }

    /// Bind `character` to `code`, evicting previous owners of either side
    pub fn set(&mut self, character: char, code: u32) {
        if let Some(old_code) = self.codes.remove(&character) {
            self.characters.remove(&old_code);
        }
        if let Some(old_character) = self.characters.remove(&code) {
            self.codes.remove(&old_character);
        }
        self.codes.insert(character, code);
        self.characters.insert(code, character);
    }

    /// Drop `character` and its code; returns the code it held
    pub fn remove(&mut self, character: char) -> Option<u32> {
        let code = self.codes.remove(&character)?;
        self.characters.remove(&code);
        Some(code)
    }
}

impl FromIterator<(char, u32)> for Alphabet {
    fn from_iter<I: IntoIterator<Item = (char, u32)>>(iter: I) -> Self {
        let mut alphabet = Alphabet::new();
        for (character, code) in iter {
            alphabet.set(character, code);
        }
        alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bijection(alphabet: &Alphabet) {
        for (character, code) in alphabet.iter() {
            assert_eq!(alphabet.code_of(character), Ok(code));
            assert_eq!(alphabet.character_of(code), Ok(character));
        }
        assert_eq!(alphabet.codes.len(), alphabet.characters.len());
    }

    #[test]
    fn test_basic_table() {
        let alphabet = basic();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.code_of('A'), Ok(0));
        assert_eq!(alphabet.code_of('Z'), Ok(25));
        assert_eq!(alphabet.zero_character(), Ok('A'));
        assert_eq!(alphabet.digits_per_character(), 2);
        assert_bijection(alphabet);
    }

    #[test]
    fn test_extended_table() {
        let alphabet = extended();
        assert_eq!(alphabet.len(), 37);
        assert_eq!(alphabet.code_of(WILDCARD), Ok(0));
        assert_eq!(alphabet.code_of('A'), Ok(1));
        assert_eq!(alphabet.code_of('Z'), Ok(26));
        assert_eq!(alphabet.code_of('0'), Ok(27));
        assert_eq!(alphabet.code_of('9'), Ok(36));
        assert_eq!(alphabet.zero_character(), Ok(WILDCARD));
        assert_bijection(alphabet);
    }

    #[test]
    fn test_every_code_round_trips() {
        for alphabet in [basic(), extended()] {
            for code in 0..alphabet.len() as u32 {
                let character = alphabet.character_of(code).unwrap();
                assert_eq!(alphabet.code_of(character), Ok(code));
            }
        }
    }

    #[test]
    fn test_unknown_lookups() {
        assert_eq!(basic().code_of('a'), Err(RsaError::UnknownCharacter('a')));
        assert_eq!(basic().character_of(26), Err(RsaError::UnknownCode(from_u64(26))));
    }

    #[test]
    fn test_set_evicts_previous_code_owner() {
        let mut alphabet = Alphabet::from_symbols("ABC").unwrap();
        alphabet.set('X', 1);

        assert!(!alphabet.contains('B'));
        assert_eq!(alphabet.character_of(1), Ok('X'));
        assert_eq!(alphabet.len(), 3);
        assert_bijection(&alphabet);
    }

    #[test]
    fn test_set_rebinds_character() {
        let mut alphabet = Alphabet::from_symbols("ABC").unwrap();
        alphabet.set('A', 7);

        assert_eq!(alphabet.code_of('A'), Ok(7));
        assert_eq!(alphabet.character_of(0), Err(RsaError::UnknownCode(from_u64(0))));
        assert_eq!(alphabet.largest_code(), Some(7));
        assert_bijection(&alphabet);
    }

    #[test]
    fn test_set_swaps_both_sides() {
        let mut alphabet = Alphabet::from_symbols("ABC").unwrap();
        // 'A' leaves code 0 and takes code 2 away from 'C'
        alphabet.set('A', 2);

        assert_eq!(alphabet.len(), 2);
        assert!(!alphabet.contains('C'));
        assert_eq!(alphabet.character_of(0), Err(RsaError::UnknownCode(from_u64(0))));
        assert_eq!(alphabet.character_of(2), Ok('A'));
        assert_bijection(&alphabet);
    }

    #[test]
    fn test_remove() {
        let mut alphabet = Alphabet::from_symbols("ABC").unwrap();
        assert_eq!(alphabet.remove('B'), Some(1));
        assert_eq!(alphabet.remove('B'), None);
        assert_eq!(alphabet.character_of(1), Err(RsaError::UnknownCode(from_u64(1))));
        assert_eq!(alphabet.len(), 2);
        assert_bijection(&alphabet);
    }

    #[test]
    fn test_digit_width_follows_largest_code() {
        assert_eq!(Alphabet::from_symbols("0123456789").unwrap().digits_per_character(), 1);
        assert_eq!(Alphabet::from_symbols("0123456789X").unwrap().digits_per_character(), 2);
        let sparse: Alphabet = [('A', 0), ('B', 120)].into_iter().collect();
        assert_eq!(sparse.digits_per_character(), 3);
        assert_eq!(Alphabet::new().digits_per_character(), 1);
    }

    #[test]
    fn test_from_symbols_rejects_repeats() {
        assert_eq!(Alphabet::from_symbols("AAAAAAAAAAB"), Err(RsaError::DuplicateSymbol('A')));
        assert_eq!(Alphabet::from_symbols("ABCB"), Err(RsaError::DuplicateSymbol('B')));
        assert_eq!(Alphabet::from_symbols("ABC").unwrap().largest_code(), Some(2));
    }
}
