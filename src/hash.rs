//! Bucket hashing
//!
//! Maps an integer key and a bucket count to a bucket index. The default
//! strategy runs the key's bytes through XXH3 before reducing, so runs of
//! consecutive or equally-spaced keys still spread across buckets.

use xxhash_rust::xxh3::xxh3_64;

/// Returns the bucket index of `key` in a table of `bucket_count` buckets.
///
/// The result is always in `[0, bucket_count)`. A zero bucket count is not a
/// valid table size and maps every key to 0.
pub fn hash(key: i32, bucket_count: usize) -> usize {
  if bucket_count == 0 {
    return 0;
  }

  (xxh3_64(&key.to_le_bytes()) % bucket_count as u64) as usize
}

/// Strategy used by a table to place keys into buckets.
pub trait BucketHasher {
  /// Returns an index in `[0, bucket_count)`; `bucket_count` is never zero.
  fn bucket(&self, key: i32, bucket_count: usize) -> usize;
}

/// The default `BucketHasher`, delegating to [`hash`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh3Hasher;

impl BucketHasher for Xxh3Hasher {
  fn bucket(&self, key: i32, bucket_count: usize) -> usize {
    hash(key, bucket_count)
  }
}

/// Places `key` at `key mod bucket_count` (Euclidean, so negative keys land
/// in range). Collisions are easy to predict, which makes it handy for
/// showing chaining at work.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuloHasher;

impl BucketHasher for ModuloHasher {
  fn bucket(&self, key: i32, bucket_count: usize) -> usize {
    (i64::from(key).rem_euclid(bucket_count as i64)) as usize
  }
}
