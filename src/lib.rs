//! # OidMap - A Prefix-Indexed Map for Object Identifiers
//!
//! OidMap is an in-memory associative container mapping fixed-size 20-byte
//! object identifiers (content hashes) to caller-supplied values. It is
//! built for bulk workloads that insert and look up very large numbers of
//! identifiers, such as tracking object identities across a repository
//! transformation pass.
//!
//! ## Architecture
//!
//! Identifiers are already high-entropy, so no hashing is needed. The map
//! is two layers deep:
//!
//! - **Prefix table**: a fixed array of 65,536 buckets, addressed directly
//!   by the first two bytes of an identifier. Allocated eagerly, so
//!   dispatch is always a single array index.
//! - **Buckets**: per-slot sorted arrays ordered by the remaining 18 bytes,
//!   searched by binary search and grown in whole chunks.
//!
//! Lookups and inserts are O(log n) within a bucket, and with ~65,536
//! buckets evenly splitting N keys the per-bucket n stays small. Iteration
//! yields every entry in strictly ascending full-key order.
//!
//! ## Ownership
//!
//! The map owns the values it is given and hands out `&V` on lookup. To
//! reproduce a non-owning dictionary over caller-managed data, instantiate
//! with a borrowed or index type (`OidMap<&'a T>`, `OidMap<u32>` into an
//! arena); the lifetime contract is then explicit in the type parameter.
//!
//! ## Example Usage
//!
//! ```rust
//! use oidmap::{Oid, OidMap};
//!
//! # fn main() -> Result<(), oidmap::Error> {
//! let mut map = OidMap::new();
//!
//! let a = Oid::from_hex("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d")?;
//! let b = Oid::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709")?;
//!
//! map.insert(a, "blob a")?;
//! map.insert(b, "blob b")?;
//!
//! assert_eq!(map.get(&a), Some(&"blob a"));
//! assert_eq!(map.len(), 2);
//!
//! // Entries come back in ascending identifier order.
//! for (oid, value) in map.iter() {
//!     println!("{} => {}", oid, value);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Module declarations
pub mod config;
pub mod error;
pub mod oid;

mod iter;
mod table;

// Re-exports
pub use config::Options;
pub use error::{Error, Result};
pub use iter::Iter;
pub use oid::Oid;

use table::PrefixTable;

/// An in-memory map from 20-byte object identifiers to values.
///
/// Duplicate identifiers are rejected rather than overwritten: a repeated
/// [`insert`](OidMap::insert) signals a caller invariant violation and must
/// be treated as unrecoverable. Absent keys are a normal outcome and
/// [`get`](OidMap::get) reports them as `None`.
///
/// # Thread Safety
///
/// The map has no internal synchronization. All mutation goes through
/// `&mut self`, so sharing across threads requires external locking
/// (for example `RwLock<OidMap<V>>`).
pub struct OidMap<V> {
    /// The eagerly allocated two-byte-prefix dispatch table
    table: PrefixTable<V>,

    /// Configuration the map was created with
    options: Options,

    /// Number of stored entries
    len: usize,
}

impl<V> OidMap<V> {
    /// Creates an empty map with default options.
    ///
    /// The full prefix table is allocated up front; the buckets themselves
    /// start with no backing storage.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oidmap::OidMap;
    ///
    /// let map: OidMap<u64> = OidMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            table: PrefixTable::new(),
            options: Options::default(),
            len: 0,
        }
    }

    /// Creates an empty map with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oidmap::{OidMap, Options};
    ///
    /// # fn main() -> Result<(), oidmap::Error> {
    /// let options = Options::new().expected_keys(1_000_000);
    /// let map: OidMap<u64> = OidMap::with_options(options)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_options(options: Options) -> Result<Self> {
        options.validate()?;

        let capacity = options.initial_bucket_capacity();
        log::debug!(
            "creating oid map: chunk={}, expected_keys={}, per-bucket reserve={}",
            options.bucket_chunk_size,
            options.expected_keys,
            capacity
        );

        Ok(Self {
            table: PrefixTable::with_bucket_capacity(capacity),
            options,
            len: 0,
        })
    }

    /// Inserts an identifier and its value.
    ///
    /// The identifier's leading two bytes select the bucket; the remaining
    /// bytes place the entry within it. Bucket storage grows by one chunk
    /// when full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOid`] if the identifier is already
    /// present. This is a fail-fast signal, not a recoverable condition:
    /// callers are expected to only insert identifiers they know are new,
    /// and to log and terminate on this error. The map is left untouched
    /// by the failed insert.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oidmap::{Oid, OidMap};
    ///
    /// # fn main() -> Result<(), oidmap::Error> {
    /// let mut map = OidMap::new();
    /// let oid = Oid::new([7u8; 20]);
    ///
    /// map.insert(oid, 42u64)?;
    /// assert!(map.insert(oid, 43).is_err());
    /// assert_eq!(map.get(&oid), Some(&42));
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, oid: Oid, value: V) -> Result<()> {
        let chunk = self.options.bucket_chunk_size;
        let bucket = self.table.bucket_mut(&oid);

        match bucket.search(&oid) {
            Ok(_) => Err(Error::DuplicateOid(oid)),
            Err(pos) => {
                bucket.insert_at(pos, oid, value, chunk);
                self.len += 1;
                Ok(())
            }
        }
    }

    /// Returns a reference to the value stored for an identifier.
    ///
    /// Returns `None` if the identifier was never inserted. This is an
    /// expected outcome, not an error, and is always distinguishable from
    /// a stored value.
    pub fn get(&self, oid: &Oid) -> Option<&V> {
        let bucket = self.table.bucket(oid);
        let pos = bucket.search(oid).ok()?;
        Some(&bucket.entries()[pos].value)
    }

    /// Returns `true` if the identifier is present.
    pub fn contains(&self, oid: &Oid) -> bool {
        self.get(oid).is_some()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over all entries in ascending identifier order.
    ///
    /// Slot order sorts the leading two bytes and bucket order sorts the
    /// trailing bytes, so the full visited sequence is strictly ascending
    /// in 20-byte lexicographic order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oidmap::{Oid, OidMap};
    ///
    /// # fn main() -> Result<(), oidmap::Error> {
    /// let mut map = OidMap::new();
    /// map.insert(Oid::new([2u8; 20]), "b")?;
    /// map.insert(Oid::new([1u8; 20]), "a")?;
    ///
    /// let keys: Vec<String> = map.iter().map(|(oid, _)| oid.to_string()).collect();
    /// assert!(keys[0] < keys[1]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.table, self.len)
    }
}

impl<V> Default for OidMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a OidMap<V> {
    type Item = (&'a Oid, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
