// RSA Codec Errors
// Every failure is a violated precondition of the given inputs

use super::bigint::RsaBigInt;

/// Errors raised by key derivation, block coding and the encrypt/decrypt pipelines.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("{0} is not a prime number")]
    NotPrime(RsaBigInt),

    #[error("exponent {e} is not coprime with the totient {totient}")]
    NotCoprimeExponent { e: RsaBigInt, totient: RsaBigInt },

    #[error("alphabet of {alphabet_size} symbols cannot be used with block length {block_length}: {reason}")]
    AlphabetIncompatible {
        alphabet_size: usize,
        block_length: usize,
        reason: String,
    },

    #[error("character {0:?} is not part of the alphabet")]
    UnknownCharacter(char),

    #[error("code {0} has no character in the alphabet")]
    UnknownCode(RsaBigInt),

    #[error("symbol {0:?} appears more than once")]
    DuplicateSymbol(char),

    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    #[error("modulus {0} does not factor into exactly two primes")]
    InvalidModulus(RsaBigInt),

    #[error("{value} has no inverse modulo {modulus}")]
    NoInverseExists { value: RsaBigInt, modulus: RsaBigInt },

    #[error("block {block} does not fit in {block_length} digits")]
    BlockOverflow { block: RsaBigInt, block_length: usize },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, RsaError>;
