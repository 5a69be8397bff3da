use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("bucket count must be positive")]
    ZeroBuckets,

    #[error("cannot allocate {0} buckets")]
    BucketAllocation(usize),

    #[error("hash modulus must be positive")]
    ZeroModulus,

    #[error("maximum string length must be at least 1, got {0}")]
    InvalidMaxLength(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
