// RSA Decryption Implementation
// Recovers the private exponent from (e, n) and decodes the resulting blocks

use tracing::{debug, trace};

use super::alphabet::Alphabet;
use super::bigint::{mod_pow, RsaBigInt};
use super::block::{characters_per_block, decode};
use super::error::{Result, RsaError};
use super::keygen::RsaPrivateKey;

/// Split ciphertext into `block_length`-digit blocks.
///
/// Whitespace between blocks is ignored, so both the space separated form and
/// the plain fixed-width concatenation are accepted.
pub fn parse_ciphertext(ciphertext: &str, block_length: usize) -> Result<Vec<RsaBigInt>> {
    let digits: Vec<u8> = ciphertext
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if let Some(bad) = digits.iter().find(|b| !b.is_ascii_digit()) {
        return Err(RsaError::MalformedCiphertext(format!(
            "unexpected character {:?}",
            char::from(*bad)
        )));
    }

    if block_length == 0 || digits.len() % block_length != 0 {
        return Err(RsaError::MalformedCiphertext(format!(
            "{} digits is not a multiple of block length {}",
            digits.len(),
            block_length
        )));
    }

    digits
        .chunks(block_length)
        .map(|chunk| {
            RsaBigInt::parse_bytes(chunk, 10)
                .ok_or_else(|| RsaError::MalformedCiphertext("invalid block".to_string()))
        })
        .collect()
}

/// Compute m = c^d mod n for every block
pub fn decrypt_blocks(blocks: &[RsaBigInt], private_key: &RsaPrivateKey) -> Vec<RsaBigInt> {
    blocks
        .iter()
        .map(|c| {
            let m = mod_pow(c, &private_key.d, &private_key.n);
            trace!(%c, %m, "decrypted block");
            m
        })
        .collect()
}

/// Decrypt with an already recovered private key
pub fn decrypt_with_key(
    ciphertext: &str,
    private_key: &RsaPrivateKey,
    alphabet: &Alphabet,
    block_length: usize,
) -> Result<String> {
    let blocks = parse_ciphertext(ciphertext, block_length)?;
    characters_per_block(alphabet, block_length)?;

    let decrypted = decrypt_blocks(&blocks, private_key);
    decode(&decrypted, alphabet, block_length)
}

/// Decrypt `ciphertext` produced under the public key `(e, n)`.
///
/// The ciphertext shape and the alphabet are validated before `n` is factored.
pub fn decrypt(
    ciphertext: &str,
    e: &RsaBigInt,
    n: &RsaBigInt,
    alphabet: &Alphabet,
    block_length: usize,
) -> Result<String> {
    let blocks = parse_ciphertext(ciphertext, block_length)?;
    characters_per_block(alphabet, block_length)?;
    debug!(blocks = blocks.len(), block_length, "parsed ciphertext");

    let private_key = RsaPrivateKey::recover(e, n)?;
    debug!(totient = %private_key.totient, "recovered private exponent");

    let decrypted = decrypt_blocks(&blocks, &private_key);
    decode(&decrypted, alphabet, block_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::alphabet::{basic, extended};
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::encrypt;

    #[test]
    fn test_parse_ciphertext() {
        let expected = vec![from_u64(2790), from_u64(12)];
        assert_eq!(parse_ciphertext("2790 0012", 4).unwrap(), expected);
        assert_eq!(parse_ciphertext("27900012", 4).unwrap(), expected);
        assert_eq!(parse_ciphertext(" 2790\n0012 ", 4).unwrap(), expected);
        assert!(parse_ciphertext("", 4).unwrap().is_empty());
    }

    #[test]
    fn test_parse_ciphertext_malformed() {
        for (text, block_length) in [("279 0012", 4), ("2790 00x2", 4), ("2790", 0), ("-2790", 4)] {
            let result = parse_ciphertext(text, block_length);
            assert!(
                matches!(result, Err(RsaError::MalformedCiphertext(_))),
                "{:?} with block length {}",
                text,
                block_length
            );
        }
    }

    #[test]
    fn test_decrypt_blocks() {
        let key = RsaPrivateKey::recover(&from_u64(17), &from_u64(3233)).unwrap();
        assert_eq!(decrypt_blocks(&[from_u64(2790)], &key), vec![from_u64(65)]);
    }

    #[test]
    fn test_decrypt_textbook() {
        // 0708 ("HI") encrypts to 0191 under (17, 3233)
        let message = decrypt("0191", &from_u64(17), &from_u64(3233), basic(), 4).unwrap();
        assert_eq!(message, "HI");
    }

    #[test]
    fn test_decrypt_round_trip() {
        let (p, q, e) = (from_u64(61), from_u64(53), from_u64(17));
        let ciphertext = encrypt("HELLOWORLD", &p, &q, &e, basic(), 4).unwrap();
        let message = decrypt(&ciphertext, &e, &(&p * &q), basic(), 4).unwrap();
        assert_eq!(message, "HELLOWORLD");
    }

    #[test]
    fn test_decrypt_with_key() {
        let (p, q, e) = (from_u64(701), from_u64(709), from_u64(65537));
        let ciphertext = encrypt("RSA2024*", &p, &q, &e, extended(), 6).unwrap();
        let key = RsaPrivateKey::recover(&e, &(&p * &q)).unwrap();
        assert_eq!(decrypt_with_key(&ciphertext, &key, extended(), 6).unwrap(), "RSA2024**");
    }

    #[test]
    fn test_decrypt_malformed_before_factoring() {
        // 3234 would fail factorization; the length check must come first
        let result = decrypt("123", &from_u64(17), &from_u64(3234), basic(), 4);
        assert!(matches!(result, Err(RsaError::MalformedCiphertext(_))));
    }

    #[test]
    fn test_decrypt_misaligned_alphabet() {
        let result = decrypt("012", &from_u64(17), &from_u64(3233), basic(), 3);
        assert!(matches!(result, Err(RsaError::AlphabetIncompatible { .. })));
    }

    #[test]
    fn test_decrypt_invalid_modulus() {
        let result = decrypt("0191", &from_u64(17), &from_u64(3234), basic(), 4);
        assert_eq!(result, Err(RsaError::InvalidModulus(from_u64(3234))));
    }

    #[test]
    fn test_decrypt_no_inverse() {
        let result = decrypt("0191", &from_u64(15), &from_u64(3233), basic(), 4);
        assert!(matches!(result, Err(RsaError::NoInverseExists { .. })));
    }
}
