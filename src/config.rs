//! Configuration options for the oid map.

use crate::table::TABLE_SIZE;

/// The default growth increment for bucket storage, in entries.
pub const DEFAULT_BUCKET_CHUNK_SIZE: usize = 8;

/// Configuration options for creating a map.
#[derive(Debug, Clone)]
pub struct Options {
    /// Growth increment for bucket storage, in entries.
    /// Bucket capacity only ever moves in whole chunks, never one entry
    /// at a time.
    /// Default: 8
    pub bucket_chunk_size: usize,

    /// Expected total number of keys, used to pre-size buckets.
    /// When non-zero, each bucket reserves enough whole chunks up front to
    /// hold its share of this many uniformly distributed keys, so a bulk
    /// load of that magnitude never reallocates.
    /// Set to 0 to start every bucket empty.
    /// Default: 0
    pub expected_keys: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bucket_chunk_size: DEFAULT_BUCKET_CHUNK_SIZE,
            expected_keys: 0,
        }
    }
}

impl Options {
    /// Creates a new Options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bucket growth increment.
    pub fn bucket_chunk_size(mut self, size: usize) -> Self {
        self.bucket_chunk_size = size;
        self
    }

    /// Sets the expected total number of keys.
    pub fn expected_keys(mut self, keys: usize) -> Self {
        self.expected_keys = keys;
        self
    }

    /// Validates the options and returns an error if any are invalid.
    pub fn validate(&self) -> crate::Result<()> {
        if self.bucket_chunk_size == 0 {
            return Err(crate::Error::invalid_argument("bucket_chunk_size must be > 0"));
        }
        Ok(())
    }

    /// Per-bucket capacity to reserve at creation, rounded up to whole
    /// chunks. Zero when no expectation was given.
    pub(crate) fn initial_bucket_capacity(&self) -> usize {
        if self.expected_keys == 0 {
            return 0;
        }
        let per_bucket = (self.expected_keys + TABLE_SIZE - 1) / TABLE_SIZE;
        let chunks = (per_bucket + self.bucket_chunk_size - 1) / self.bucket_chunk_size;
        chunks * self.bucket_chunk_size
    }
}
