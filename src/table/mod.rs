//! # Prefix Table
//!
//! The fixed-size dispatch layer of the map: one bucket per value of an
//! oid's leading two bytes, allocated eagerly so that slot selection is a
//! single array index with no hashing and no collision handling. The oids
//! are content hashes, so the prefix bytes are already uniformly
//! distributed and the table doubles as a perfect hash of the key space.

mod bucket;

pub(crate) use bucket::{Bucket, Entry};

use crate::oid::Oid;

/// The number of table slots, one per two-byte oid prefix.
pub(crate) const TABLE_SIZE: usize = 1 << (8 * Oid::PREFIX_LEN);

/// The eagerly allocated slot array.
///
/// All 65,536 buckets exist from creation; empty buckets hold no backing
/// storage, so the up-front cost is the slot headers alone.
#[derive(Debug)]
pub(crate) struct PrefixTable<V> {
    buckets: Box<[Bucket<V>]>,
}

impl<V> PrefixTable<V> {
    /// Creates a table of empty buckets.
    pub(crate) fn new() -> Self {
        Self::with_bucket_capacity(0)
    }

    /// Creates a table whose buckets each pre-reserve `capacity` entries.
    pub(crate) fn with_bucket_capacity(capacity: usize) -> Self {
        let buckets: Box<[Bucket<V>]> = if capacity == 0 {
            (0..TABLE_SIZE).map(|_| Bucket::new()).collect()
        } else {
            (0..TABLE_SIZE).map(|_| Bucket::with_capacity(capacity)).collect()
        };
        Self { buckets }
    }

    /// Returns the bucket an oid dispatches to.
    pub(crate) fn bucket(&self, oid: &Oid) -> &Bucket<V> {
        &self.buckets[oid.table_index()]
    }

    /// Returns the bucket an oid dispatches to, mutably.
    pub(crate) fn bucket_mut(&mut self, oid: &Oid) -> &mut Bucket<V> {
        &mut self.buckets[oid.table_index()]
    }

    /// Returns all buckets in ascending slot order.
    ///
    /// Slot order is ascending prefix order, so walking buckets in slice
    /// order and entries in bucket order visits oids in full ascending
    /// order.
    pub(crate) fn buckets(&self) -> &[Bucket<V>] {
        &self.buckets
    }
}
