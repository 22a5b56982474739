// RSA Key Derivation
// Builds the public key from (p, q, e) and recovers the private exponent from (e, n)

use tracing::debug;

use super::alphabet::Alphabet;
use super::bigint::{are_prime_relative, is_prime, mod_inverse, prime_factorization, RsaBigInt};
use super::error::{Result, RsaError};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key, recomputed from a factorization of the modulus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt,       // Modulus (same as public)
    pub d: RsaBigInt,       // Private exponent
    pub p: RsaBigInt,       // Smaller prime factor
    pub q: RsaBigInt,       // Larger prime factor
    pub totient: RsaBigInt, // (p-1)(q-1)
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

fn totient(p: &RsaBigInt, q: &RsaBigInt) -> RsaBigInt {
    (p - 1u8) * (q - 1u8)
}

impl RsaPublicKey {
    /// Derive `(e, n)` from two primes and a public exponent.
    ///
    /// Fails with `NotPrime` if either factor is composite and with
    /// `NotCoprimeExponent` if `e` shares a factor with `(p-1)(q-1)`.
    pub fn from_primes(p: &RsaBigInt, q: &RsaBigInt, e: &RsaBigInt) -> Result<Self> {
        for factor in [p, q] {
            if !is_prime(factor) {
                return Err(RsaError::NotPrime(factor.clone()));
            }
        }

        let totient = totient(p, q);
        if !are_prime_relative(e, &totient) {
            return Err(RsaError::NotCoprimeExponent {
                e: e.clone(),
                totient,
            });
        }

        let n = p * q;
        debug!(%n, %e, "derived public key");

        Ok(Self { n, e: e.clone() })
    }

    /// Encrypt a message using this public key
    pub fn encrypt(&self, message: &str, alphabet: &Alphabet, block_length: usize) -> Result<String> {
        use super::encrypt::encrypt_with_key;
        encrypt_with_key(message, self, alphabet, block_length)
    }
}

impl RsaPrivateKey {
    /// Recover the private exponent for `(e, n)` by factoring `n`.
    ///
    /// The two factors are not required to be distinct.
    pub fn recover(e: &RsaBigInt, n: &RsaBigInt) -> Result<Self> {
        let factors = prime_factorization(n);
        debug!(%n, ?factors, "factored modulus");

        let (p, q) = match factors.as_slice() {
            [p, q] => (p.clone(), q.clone()),
            _ => return Err(RsaError::InvalidModulus(n.clone())),
        };

        let totient = totient(&p, &q);
        let d = mod_inverse(e, &totient)?;

        Ok(Self {
            n: n.clone(),
            d,
            p,
            q,
            totient,
        })
    }

    /// Decrypt a ciphertext using this private key
    pub fn decrypt(&self, ciphertext: &str, alphabet: &Alphabet, block_length: usize) -> Result<String> {
        use super::decrypt::decrypt_with_key;
        decrypt_with_key(ciphertext, self, alphabet, block_length)
    }

    /// The public half this private key inverts
    pub fn public_key(&self, e: &RsaBigInt) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e: e.clone(),
        }
    }
}

impl RsaKeyPair {
    /// Derive both halves from known primes without factoring the modulus
    pub fn from_primes(p: &RsaBigInt, q: &RsaBigInt, e: &RsaBigInt) -> Result<Self> {
        let public_key = RsaPublicKey::from_primes(p, q, e)?;

        let (p, q) = if p <= q { (p, q) } else { (q, p) };
        let totient = totient(p, q);
        let d = mod_inverse(e, &totient)?;

        let private_key = RsaPrivateKey {
            n: public_key.n.clone(),
            d,
            p: p.clone(),
            q: q.clone(),
            totient,
        };

        Ok(Self {
            public_key,
            private_key,
        })
    }
}
