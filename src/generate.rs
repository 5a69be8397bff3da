//! Random lowercase strings for pre-populating a set.
//!
//! The generator is always passed in, so a seeded `StdRng` gives repeatable
//! output.

use crate::error::{Error, Result};
use rand::Rng;

pub const DEFAULT_MAX_LEN: usize = 15;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// Generates `count` strings with lengths drawn uniformly from `[1, max_len]`.
pub fn random_strings<R: Rng>(rng: &mut R, count: usize, max_len: usize) -> Result<Vec<String>> {
    if max_len == 0 {
        return Err(Error::InvalidMaxLength(max_len));
    }
    let mut strings = Vec::with_capacity(count);
    for _ in 0..count {
        let len = rng.gen_range(1..=max_len);
        strings.push(random_string(rng, len));
    }
    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn string_has_requested_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = random_string(&mut rng, 40);
        assert_eq!(s.len(), 40);
        assert!(s.bytes().all(|b| b.is_ascii_lowercase()));
        assert!(random_string(&mut rng, 0).is_empty());
    }

    #[test]
    fn lengths_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let strings = random_strings(&mut rng, 1000, 5).unwrap();
        assert_eq!(strings.len(), 1000);
        assert!(strings.iter().all(|s| (1..=5).contains(&s.len())));
    }

    #[test]
    fn same_seed_same_output() {
        let a = random_strings(&mut StdRng::seed_from_u64(1), 100, DEFAULT_MAX_LEN).unwrap();
        let b = random_strings(&mut StdRng::seed_from_u64(1), 100, DEFAULT_MAX_LEN).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_max_len_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(random_strings(&mut rng, 10, 0), Err(Error::InvalidMaxLength(0))));
    }
}
