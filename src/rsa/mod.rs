// RSA Module - Main module file
// Exports the alphabet, number theory, block codec and encrypt/decrypt pipelines

pub mod alphabet;
pub mod bigint;
pub mod block;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;

pub use alphabet::{basic, extended, Alphabet};
pub use block::{decode, encode, is_alphabet_compatible};
pub use decrypt::{decrypt, decrypt_with_key};
pub use encrypt::{encrypt, encrypt_with_key};
pub use error::{Result, RsaError};
pub use keygen::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
