//! Textbook RSA over alphabet-coded text.
//!
//! Messages are mapped character by character through an [`rsa::Alphabet`],
//! packed into fixed-width decimal blocks and raised to the public exponent.
//! Decryption recovers the private exponent by factoring the modulus, so it
//! only works for the small moduli this scheme is meant for. No padding or
//! side-channel hardening: this is a teaching tool, not a cipher to rely on.
//!
//! ```
//! use textbook_rsa::rsa::{basic, decrypt, encrypt};
//! use num_bigint::BigUint;
//!
//! let (p, q, e) = (BigUint::from(61u32), BigUint::from(53u32), BigUint::from(17u32));
//! let ciphertext = encrypt("HI", &p, &q, &e, basic(), 4).unwrap();
//! assert_eq!(ciphertext, "0191");
//! assert_eq!(decrypt(&ciphertext, &e, &(&p * &q), basic(), 4).unwrap(), "HI");
//! ```

pub mod rsa;
pub mod util;
