// RSA Big Integer Operations
// Number theory over num-bigint: primality, gcd, inverses, powers, factorization

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use super::error::{Result, RsaError};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Count of decimal digits needed to write `n` (zero has one digit)
pub fn number_of_decimal_digits(n: &RsaBigInt) -> usize {
    n.to_str_radix(10).len()
}

/// Deterministic trial division over candidates of the form 6k ± 1
pub fn is_prime(n: &RsaBigInt) -> bool {
    let two = from_u64(2);
    let three = from_u64(3);

    if n <= &RsaBigInt::one() {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if n.is_multiple_of(&two) || n.is_multiple_of(&three) {
        return false;
    }

    // Alternate +2 / +4 from 5: 5, 7, 11, 13, 17, 19, ...
    let mut divisor = from_u64(5);
    let mut step = 2u8;
    while &divisor * &divisor <= *n {
        if n.is_multiple_of(&divisor) {
            return false;
        }
        divisor += step;
        step = 6 - step;
    }

    true
}

/// Greatest common divisor (iterative Euclid)
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple
pub fn lcm(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    if a.is_zero() || b.is_zero() {
        return RsaBigInt::zero();
    }
    (a * b) / gcd(a, b)
}

/// True when `a` and `b` share no factor besides 1
pub fn are_prime_relative(a: &RsaBigInt, b: &RsaBigInt) -> bool {
    gcd(a, b).is_one()
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
///
/// Iterative form of the recurrence `(g, x, y) <- (g', y' - (b / a) * x', x')`
/// taken from the sub-problem on `(b mod a, a)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    // Walk down the remainder chain, remembering each quotient b / a.
    let mut quotients = Vec::new();
    let mut a = a.clone();
    let mut b = b.clone();
    while !a.is_zero() {
        let (q, r) = b.div_rem(&a);
        quotients.push(q);
        b = a;
        a = r;
    }

    // Base case gcd(0, b) = b = 0*0 + b*1, then unwind.
    let g = b;
    let mut x = BigInt::zero();
    let mut y = BigInt::one();
    for q in quotients.iter().rev() {
        let next_x = &y - q * &x;
        y = x;
        x = next_x;
    }

    (g, x, y)
}

/// Compute modular inverse: n^(-1) mod modulus, normalized into [0, modulus)
pub fn mod_inverse(n: &RsaBigInt, modulus: &RsaBigInt) -> Result<RsaBigInt> {
    let no_inverse = || RsaError::NoInverseExists {
        value: n.clone(),
        modulus: modulus.clone(),
    };

    if modulus.is_zero() {
        return Err(no_inverse());
    }

    let signed_n = BigInt::from_biguint(Sign::Plus, n.clone());
    let signed_modulus = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let (g, x, _) = extended_gcd(&signed_n, &signed_modulus);

    if !g.is_one() {
        return Err(no_inverse());
    }

    // mod_floor keeps the result non-negative for a positive modulus
    x.mod_floor(&signed_modulus).to_biguint().ok_or_else(no_inverse)
}

/// Modular exponentiation: base^exponent mod modulus
/// Uses square-and-multiply; a zero exponent always yields 1.
/// A zero modulus leaves nothing to reduce by and yields 0.
pub fn mod_pow(base: &RsaBigInt, exponent: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if exponent.is_zero() {
        return RsaBigInt::one();
    }
    if modulus.is_zero() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one() % modulus;
    let mut base = base % modulus;
    let mut exp = exponent.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Prime factors of `n` with multiplicity, in non-decreasing order
pub fn prime_factorization(n: &RsaBigInt) -> Vec<RsaBigInt> {
    let mut factors = Vec::new();
    let two = from_u64(2);

    if n < &two {
        return factors;
    }

    let mut n = n.clone();
    while n.is_even() {
        factors.push(two.clone());
        n >>= 1;
    }

    let mut divisor = from_u64(3);
    while &divisor * &divisor <= n {
        while n.is_multiple_of(&divisor) {
            factors.push(divisor.clone());
            n /= &divisor;
        }
        divisor += 2u8;
    }

    if n > two {
        factors.push(n);
    }

    factors
}
