//! Dictionary implementations
//!
//! This module provides the `ChainedHashTable`, a dictionary from `i32`
//! keys to `String` values that resolves collisions by separate chaining.
//! Each bucket is a plain vector scanned linearly, and the whole bucket
//! array is rebuilt at a larger size once the ratio of keys to buckets
//! reaches the configured load factor.
//!
//! The `HtDict` is a dictionary implemented using Rust's `HashMap` type.
//! It serves as the reference behaviour the chained table is checked
//! against.

mod ht;
mod chained;

pub use self::ht::HtDict;
pub use self::chained::{ChainedHashTable, Iter};

/// The `Dict<K,V>` abstract data type.
pub trait Dict<K,V> {
  /// Returns the value associated with the given key, if present.
  fn get(&self, k: &K) -> Option<V>;

  /// Adds a new key-value pair to the dictionary. Returns the previous
  /// value, if present.
  fn put(&mut self, k: K, v: V) -> Option<V>;

  /// Removes the key from the dictionary. Returns the associated value,
  /// if present.
  fn remove(&mut self, k: &K) -> Option<V>;

  /// Predicate that tests if the key is present.
  fn contains_key(&self, k: &K) -> bool {
    self.get(k).is_some()
  }

  /// Predicate that tests if the dictionary is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of key-value pairs in the dictionary.
  fn size(&self) -> usize;
}
