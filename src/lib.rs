pub mod command;
pub mod error;
pub mod generate;
pub mod hash;
pub mod string_set;

pub use error::{Error, Result};
pub use hash::{BUCKET_COUNT, HASH_BASE, PolynomialHasher, hash_string, mod_pow};
pub use string_set::{StringSet, is_palindrome};
