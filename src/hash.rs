use crate::error::{Error, Result};

/// Number of buckets in a default `StringSet`.
pub const BUCKET_COUNT: usize = 1_000_001;

/// Polynomial base. Prime, and larger than the 26-letter alphabet.
pub const HASH_BASE: u64 = 29;

/// Computes `base^exp mod modulus` by repeated squaring.
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut a = base as u128 % m;
    let mut n = exp;
    while n > 0 {
        if n & 1 == 1 {
            result = result * a % m;
        }
        a = a * a % m;
        n >>= 1;
    }
    result as u64
}

/// Maps a string to `[0, modulus)` as `sum(value(s[i]) * base^i) mod modulus`,
/// where `value(c) = c - 'a'`.
///
/// Only lowercase ASCII letters spread evenly. Other bytes wrap around in
/// 64-bit arithmetic, which keeps the result deterministic but unbalanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialHasher {
    base: u64,
    modulus: u64,
}

impl PolynomialHasher {
    pub fn new(base: u64, modulus: u64) -> Result<Self> {
        if modulus == 0 {
            return Err(Error::ZeroModulus);
        }
        Ok(PolynomialHasher { base, modulus })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn hash(&self, s: &str) -> usize {
        let m = self.modulus;
        let mut sum: u64 = 0;
        for (i, &b) in s.as_bytes().iter().enumerate() {
            let value = (b as u64).wrapping_sub(b'a' as u64);
            let term = value.wrapping_mul(mod_pow(self.base, i as u64, m)) % m;
            sum = ((sum as u128 + term as u128) % m as u128) as u64;
        }
        sum as usize
    }
}

impl Default for PolynomialHasher {
    fn default() -> Self {
        PolynomialHasher {
            base: HASH_BASE,
            modulus: BUCKET_COUNT as u64,
        }
    }
}

/// Hashes `s` with the default base and bucket count.
pub fn hash_string(s: &str) -> usize {
    PolynomialHasher::default().hash(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_pow_small_values() {
        assert_eq!(mod_pow(2, 10, 1_000), 24);
        assert_eq!(mod_pow(29, 0, 1_000_001), 1);
        assert_eq!(mod_pow(29, 2, 1_000_001), 841);
        assert_eq!(mod_pow(5, 3, 1), 0);
        assert_eq!(mod_pow(0, 0, 7), 1);
    }

    #[test]
    fn mod_pow_matches_naive_loop() {
        let m = 1_000_001u64;
        let mut naive = 1u64;
        for exp in 0..200u64 {
            assert_eq!(mod_pow(HASH_BASE, exp, m), naive, "exp {}", exp);
            naive = naive * HASH_BASE % m;
        }
    }

    #[test]
    fn mod_pow_large_modulus_does_not_overflow() {
        let m = u64::MAX - 58;
        let r = mod_pow(u64::MAX - 1, 12345, m);
        assert!(r < m);
    }

    #[test]
    fn known_hash_values() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 0);
        assert_eq!(hash_string("b"), 1);
        assert_eq!(hash_string("aba"), 29);
        assert_eq!(hash_string("abc"), 29 + 2 * 841);
    }

    #[test]
    fn trailing_a_collides() {
        // 'a' maps to zero, so appending it never changes the sum.
        assert_eq!(hash_string("b"), hash_string("ba"));
        assert_eq!(hash_string("b"), hash_string("baaaa"));
    }

    #[test]
    fn deterministic_and_in_range() {
        let words = ["level", "rotor", "zzzzzzzzzzzzzzz", "qwertyuiopasdfghjklzxcvbnm"];
        for w in words {
            let h = hash_string(w);
            assert_eq!(h, hash_string(w));
            assert!(h < BUCKET_COUNT);
        }
    }

    #[test]
    fn out_of_alphabet_bytes_stay_in_range() {
        let hasher = PolynomialHasher::default();
        for w in ["ABC", "0123", "hello world!", "Ünïcode"] {
            let h = hasher.hash(w);
            assert_eq!(h, hasher.hash(w));
            assert!(h < BUCKET_COUNT);
        }
    }

    #[test]
    fn custom_modulus() {
        let hasher = PolynomialHasher::new(29, 7).unwrap();
        assert_eq!(hasher.modulus(), 7);
        assert_eq!(hasher.hash("abc"), (29 + 2 * 841) % 7);
        assert!(PolynomialHasher::new(29, 0).is_err());
    }
}
