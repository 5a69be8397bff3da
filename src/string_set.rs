use crate::error::{Error, Result};
use crate::hash::{BUCKET_COUNT, HASH_BASE, PolynomialHasher};

/// A set of strings stored in a fixed number of buckets, each bucket a chain
/// of distinct strings. The bucket count never changes after construction.
pub struct StringSet {
    hasher: PolynomialHasher,
    buckets: Vec<Vec<String>>,
    len: usize,
}

impl StringSet {
    pub fn new() -> Self {
        Self {
            hasher: PolynomialHasher::default(),
            buckets: vec![Vec::new(); BUCKET_COUNT],
            len: 0,
        }
    }

    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::ZeroBuckets);
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(bucket_count)
            .map_err(|_| Error::BucketAllocation(bucket_count))?;
        buckets.resize_with(bucket_count, Vec::new);
        Ok(Self {
            hasher: PolynomialHasher::new(HASH_BASE, bucket_count as u64)?,
            buckets,
            len: 0,
        })
    }

    /// Empties every chain. The bucket count is kept.
    pub fn reset(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// Inserts `s`. Returns false if it was already present.
    pub fn add(&mut self, s: &str) -> bool {
        let chain = &mut self.buckets[self.hasher.hash(s)];
        if chain.iter().any(|x| x == s) {
            return false;
        }
        chain.push(s.to_owned());
        self.len += 1;
        true
    }

    /// Removes `s`. Returns false if it was not present.
    pub fn remove(&mut self, s: &str) -> bool {
        let chain = &mut self.buckets[self.hasher.hash(s)];
        match chain.iter().position(|x| x == s) {
            Some(pos) => {
                chain.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, s: &str) -> bool {
        self.buckets[self.hasher.hash(s)].iter().any(|x| x == s)
    }

    /// Scans the whole table and returns every stored palindrome, in bucket
    /// order and then chain order.
    pub fn all_palindromes(&self) -> Vec<String> {
        self.iter()
            .filter(|s| is_palindrome(s))
            .map(str::to_owned)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().flatten().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }
}

impl Default for StringSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares bytes pairwise from both ends; the middle byte of an odd-length
/// string is never compared.
pub fn is_palindrome(s: &str) -> bool {
    let b = s.as_bytes();
    let n = b.len();
    (0..n / 2).all(|i| b[i] == b[n - 1 - i])
}
