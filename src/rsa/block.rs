// Block Codec
// Converts messages to fixed-width numeric blocks and back

use num_traits::Zero;

use super::alphabet::Alphabet;
use super::bigint::{from_u64, number_of_decimal_digits, RsaBigInt};
use super::error::{Result, RsaError};

fn incompatible(alphabet: &Alphabet, block_length: usize, reason: String) -> RsaError {
    RsaError::AlphabetIncompatible {
        alphabet_size: alphabet.len(),
        block_length,
        reason,
    }
}

/// Check that `block_length` holds a whole number of codes.
/// Returns the number of characters packed in one block.
pub fn characters_per_block(alphabet: &Alphabet, block_length: usize) -> Result<usize> {
    if alphabet.is_empty() {
        return Err(incompatible(alphabet, block_length, "alphabet is empty".to_string()));
    }

    let digits = alphabet.digits_per_character();
    if block_length == 0 || block_length % digits != 0 {
        return Err(incompatible(
            alphabet,
            block_length,
            format!("block length must be a positive multiple of {}", digits),
        ));
    }

    Ok(block_length / digits)
}

/// Upper bound for any block.
///
/// Each character slot holds the alphabet size or the largest code, whichever
/// is greater, so sparse code tables are still bounded.
pub fn maximum_code(alphabet: &Alphabet, block_length: usize) -> Result<RsaBigInt> {
    let per_block = characters_per_block(alphabet, block_length)?;
    let largest = u64::from(alphabet.largest_code().unwrap_or(0));
    let slot = from_u64((alphabet.len() as u64).max(largest));
    let width = number_of_decimal_digits(&slot).max(alphabet.digits_per_character());
    let shift = from_u64(10).pow(width as u32);

    let mut maximum = RsaBigInt::zero();
    for _ in 0..per_block {
        maximum = maximum * &shift + &slot;
    }
    Ok(maximum)
}

/// Fails with `AlphabetIncompatible` unless every block stays within `modulus`
pub fn check_alphabet(alphabet: &Alphabet, modulus: &RsaBigInt, block_length: usize) -> Result<()> {
    let maximum = maximum_code(alphabet, block_length)?;
    if &maximum > modulus {
        return Err(incompatible(
            alphabet,
            block_length,
            format!("largest block {} exceeds modulus {}", maximum, modulus),
        ));
    }
    Ok(())
}

/// Whether `alphabet` and `block_length` can be used under `modulus`
pub fn is_alphabet_compatible(alphabet: &Alphabet, modulus: &RsaBigInt, block_length: usize) -> bool {
    check_alphabet(alphabet, modulus, block_length).is_ok()
}

/// Render a block as a decimal string left-padded with zeros to `block_length`
pub fn render_block(block: &RsaBigInt, block_length: usize) -> Result<String> {
    let digits = block.to_str_radix(10);
    if digits.len() > block_length {
        return Err(RsaError::BlockOverflow {
            block: block.clone(),
            block_length,
        });
    }
    Ok(format!("{:0>width$}", digits, width = block_length))
}

/// Pack `message` into blocks of `block_length` digits.
///
/// The message is right-padded with the alphabet's zero-code character up to a
/// whole number of blocks.
pub fn encode(message: &str, alphabet: &Alphabet, block_length: usize) -> Result<Vec<RsaBigInt>> {
    let per_block = characters_per_block(alphabet, block_length)?;
    let shift = from_u64(10).pow(alphabet.digits_per_character() as u32);

    let mut characters: Vec<char> = message.chars().collect();
    let remainder = characters.len() % per_block;
    if remainder != 0 {
        let filler = alphabet.zero_character()?;
        characters.resize(characters.len() + per_block - remainder, filler);
    }

    characters
        .chunks(per_block)
        .map(|chunk| {
            chunk.iter().try_fold(RsaBigInt::zero(), |block, &character| {
                let code = alphabet.code_of(character)?;
                Ok(block * &shift + code)
            })
        })
        .collect()
}

/// Unpack blocks of `block_length` digits back into text
pub fn decode(blocks: &[RsaBigInt], alphabet: &Alphabet, block_length: usize) -> Result<String> {
    characters_per_block(alphabet, block_length)?;
    let digits = alphabet.digits_per_character();

    let mut message = String::with_capacity(blocks.len() * (block_length / digits));
    for block in blocks {
        let rendered = render_block(block, block_length)?;
        for group in rendered.as_bytes().chunks(digits) {
            message.push(decode_group(group, alphabet)?);
        }
    }

    Ok(message)
}

fn decode_group(group: &[u8], alphabet: &Alphabet) -> Result<char> {
    let mut code = RsaBigInt::zero();
    for digit in group {
        code = code * 10u8 + (digit - b'0');
    }
    match u32::try_from(&code) {
        Ok(code) => alphabet.character_of(code),
        Err(_) => Err(RsaError::UnknownCode(code)),
    }
}
