#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A map from `i64` keys to arbitrary values.
///
/// This module provides `LongMap`, which wraps a `BucketTable` and exposes
/// the usual map interface without requiring a hasher.
pub mod long_map;

/// The separately-chained bucket array behind `LongMap`.
///
/// Bucket indexing, chaining, growth, and the raw entry API live here.
pub mod bucket_table;

mod key_index;

pub use bucket_table::BucketTable;
pub use bucket_table::DEFAULT_CAPACITY;
pub use bucket_table::DEFAULT_LOAD_FACTOR;
pub use long_map::Entry;
pub use long_map::LongMap;
