// RSA Encryption Implementation
// Alphabet blocks raised to the public exponent, rendered as fixed-width decimal

use tracing::{debug, trace};

use super::alphabet::Alphabet;
use super::bigint::{mod_pow, RsaBigInt};
use super::block::{check_alphabet, encode, render_block};
use super::error::Result;
use super::keygen::RsaPublicKey;

/// Separator placed between rendered ciphertext blocks
pub const BLOCK_SEPARATOR: &str = " ";

/// Compute c = m^e mod n for every block
pub fn encrypt_blocks(blocks: &[RsaBigInt], public_key: &RsaPublicKey) -> Vec<RsaBigInt> {
    blocks
        .iter()
        .map(|m| {
            let c = mod_pow(m, &public_key.e, &public_key.n);
            trace!(%m, %c, "encrypted block");
            c
        })
        .collect()
}

/// Render blocks zero-padded to `block_length` digits, joined by single spaces
pub fn render_ciphertext(blocks: &[RsaBigInt], block_length: usize) -> Result<String> {
    let rendered = blocks
        .iter()
        .map(|block| render_block(block, block_length))
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join(BLOCK_SEPARATOR))
}

/// Encrypt a message with an already derived public key
pub fn encrypt_with_key(
    message: &str,
    public_key: &RsaPublicKey,
    alphabet: &Alphabet,
    block_length: usize,
) -> Result<String> {
    check_alphabet(alphabet, &public_key.n, block_length)?;

    let blocks = encode(message, alphabet, block_length)?;
    debug!(blocks = blocks.len(), block_length, "encoded message");

    let encrypted = encrypt_blocks(&blocks, public_key);
    render_ciphertext(&encrypted, block_length)
}

/// Encrypt `message` under the key derived from primes `p`, `q` and exponent `e`
pub fn encrypt(
    message: &str,
    p: &RsaBigInt,
    q: &RsaBigInt,
    e: &RsaBigInt,
    alphabet: &Alphabet,
    block_length: usize,
) -> Result<String> {
    let public_key = RsaPublicKey::from_primes(p, q, e)?;
    encrypt_with_key(message, &public_key, alphabet, block_length)
}
