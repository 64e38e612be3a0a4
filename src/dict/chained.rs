use std::collections::HashSet;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::slice;
use log::{debug, trace, warn};
use crate::error::{Result, TableError};
use crate::hash::{BucketHasher, Xxh3Hasher};
use crate::options::{TableOptions, DEFAULT_LOAD_FACTOR};
use super::*;

type Pair = (i32, String);
type Bucket = Vec<Pair>;

/// A `Dict<i32,String>` using separate chaining.
///
/// Every key lives in the bucket chosen by the table's `BucketHasher` for
/// the current capacity. Before a new key is inserted, the table grows if
/// `size / capacity` has reached the load factor.
pub struct ChainedHashTable<H = Xxh3Hasher> {
  buckets: Vec<Bucket>,
  num_keys: usize,
  load_factor: f64,
  growth_coefficient: f64,
  hasher: H,
}

/// Allocates an empty vector able to hold `len` elements without
/// reallocating, reporting allocation failure instead of aborting.
fn try_with_capacity<T>(len: usize) -> Result<Vec<T>> {
  let mut v = Vec::new();
  v.try_reserve_exact(len)
    .map_err(|_| TableError::OutOfMemory { requested: len })?;
  Ok(v)
}

impl ChainedHashTable<Xxh3Hasher> {
  /// Creates a table with `capacity` empty buckets.
  ///
  /// Fails with `InvalidArgument` if `capacity <= 0` or `load_factor` is
  /// not in (0, 1].
  pub fn new(capacity: isize, load_factor: f64) -> Result<Self> {
    if capacity <= 0 {
      return invalid_arg!(
        "hash table capacity must be greater than zero, got {}", capacity);
    }

    Self::with_options(TableOptions::new(capacity as usize, load_factor))
  }

  /// Creates a table with the default load factor.
  pub fn with_capacity(capacity: isize) -> Result<Self> {
    Self::new(capacity, DEFAULT_LOAD_FACTOR)
  }

  pub fn with_options(options: TableOptions) -> Result<Self> {
    Self::with_options_and_hasher(options, Xxh3Hasher)
  }
}

impl<H> ChainedHashTable<H>
where H: BucketHasher {
  pub fn with_options_and_hasher(options: TableOptions, hasher: H) -> Result<Self> {
    options.validate()?;

    let mut buckets = try_with_capacity(options.capacity)?;
    buckets.resize_with(options.capacity, Vec::new);

    Ok(Self {
      buckets: buckets,
      num_keys: 0,
      load_factor: options.load_factor,
      growth_coefficient: options.growth_coefficient,
      hasher: hasher,
    })
  }

  /// Returns the index of the bucket `key` belongs to at the current
  /// capacity.
  pub fn bucket_of(&self, key: i32) -> usize {
    self.hasher.bucket(key, self.buckets.len())
  }

  /// Returns the value stored under `key`, scanning its bucket linearly.
  pub fn search(&self, key: i32) -> Option<&str> {
    self.buckets[self.bucket_of(key)]
      .iter()
      .find(|(k, _)| *k == key)
      .map(|(_, v)| v.as_str())
  }

  pub fn contains_key(&self, key: i32) -> bool {
    self.search(key).is_some()
  }

  /// Associates `value` with `key`, returning the previous value if the key
  /// was already present.
  ///
  /// # Panics
  ///
  /// Panics if the bucket array cannot be grown. Use `try_put` to handle
  /// that case.
  pub fn put<S: Into<String>>(&mut self, key: i32, value: S) -> Option<String> {
    match self.try_put(key, value) {
      Ok(previous) => previous,
      Err(err) => panic!("hash table growth failed: {}", err),
    }
  }

  /// Like `put`, but reports a failed growth step as `OutOfMemory`. On
  /// failure the table is left exactly as it was.
  pub fn try_put<S: Into<String>>(&mut self, key: i32, value: S) -> Result<Option<String>> {
    let value = value.into();
    let mut index = self.bucket_of(key);

    if let Some(pair) = self.buckets[index].iter_mut().find(|(k, _)| *k == key) {
      trace!("overwriting key {} in bucket {}", key, index);
      return Ok(Some(mem::replace(&mut pair.1, value)));
    }

    if self.current_load() >= self.load_factor {
      if let Err(err) = self.grow() {
        warn!("could not grow table of {} buckets: {}", self.buckets.len(), err);
        return Err(err);
      }
      index = self.bucket_of(key);
    }

    trace!("inserting key {} into bucket {}", key, index);
    self.buckets[index].push((key, value));
    self.num_keys += 1;
    Ok(None)
  }

  fn next_capacity(&self) -> usize {
    let old = self.buckets.len();
    // Float-to-int casts saturate; an oversized request fails to allocate.
    let grown = (old as f64 * self.growth_coefficient).ceil() as usize;
    grown.max(old.saturating_add(1))
  }

  /// Rebuilds the bucket array at the next capacity. Every allocation is
  /// made before any pair moves, so an error leaves the table untouched.
  fn grow(&mut self) -> Result<()> {
    let old_capacity = self.buckets.len();
    let new_capacity = self.next_capacity();

    let mut lengths: Vec<usize> = try_with_capacity(new_capacity)?;
    lengths.resize(new_capacity, 0);
    for bucket in self.buckets.iter() {
      for (key, _) in bucket.iter() {
        lengths[self.hasher.bucket(*key, new_capacity)] += 1;
      }
    }

    let mut buckets: Vec<Bucket> = try_with_capacity(new_capacity)?;
    for &len in lengths.iter() {
      buckets.push(try_with_capacity(len)?);
    }

    let old_buckets = mem::replace(&mut self.buckets, buckets);
    for (key, value) in old_buckets.into_iter().flatten() {
      let index = self.hasher.bucket(key, new_capacity);
      self.buckets[index].push((key, value));
    }

    debug!("grew table from {} to {} buckets holding {} keys",
           old_capacity, new_capacity, self.num_keys);
    Ok(())
  }
}

impl<H> ChainedHashTable<H> {
  /// Removes `key`, returning its value if it was present. The remaining
  /// pairs in the bucket keep their order.
  pub fn remove(&mut self, key: i32) -> Option<String>
  where H: BucketHasher {
    let index = self.hasher.bucket(key, self.buckets.len());
    let bucket = &mut self.buckets[index];
    let pos = bucket.iter().position(|(k, _)| *k == key)?;
    let (_, value) = bucket.remove(pos);
    self.num_keys -= 1;

    trace!("removed key {} from bucket {}", key, index);
    Some(value)
  }

  pub fn size(&self) -> usize {
    self.num_keys
  }

  /// Returns the number of buckets.
  pub fn capacity(&self) -> usize {
    self.buckets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.size() == 0
  }

  /// Returns the configured growth threshold.
  pub fn load_factor(&self) -> f64 {
    self.load_factor
  }

  pub fn growth_coefficient(&self) -> f64 {
    self.growth_coefficient
  }

  /// Returns the ratio of stored keys to buckets.
  pub fn current_load(&self) -> f64 {
    self.num_keys as f64 / self.buckets.len() as f64
  }

  /// Returns the length of every chain, in bucket order.
  pub fn chain_lengths(&self) -> Vec<usize> {
    self.buckets.iter().map(Vec::len).collect()
  }

  pub fn longest_chain(&self) -> usize {
    self.buckets.iter().map(Vec::len).max().unwrap_or(0)
  }

  pub fn keys(&self) -> HashSet<i32> {
    let mut keys = HashSet::with_capacity(self.num_keys);
    keys.extend(self.iter().map(|(k, _)| k));
    keys
  }

  /// Returns every value in bucket order, then chain order.
  pub fn values(&self) -> Vec<String> {
    self.iter().map(|(_, v)| v.to_string()).collect()
  }

  pub fn iter(&self) -> Iter<'_> {
    let empty: &[Pair] = &[];
    Iter {
      buckets: self.buckets.iter(),
      chain: empty.iter(),
    }
  }

  /// Removes every pair. The capacity is kept.
  pub fn clear(&mut self) {
    for bucket in self.buckets.iter_mut() {
      bucket.clear();
    }
    self.num_keys = 0;
  }
}

/// Iterator over the pairs of a `ChainedHashTable`, in bucket order, then
/// chain order.
pub struct Iter<'a> {
  buckets: slice::Iter<'a, Bucket>,
  chain: slice::Iter<'a, Pair>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = (i32, &'a str);

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some((k, v)) = self.chain.next() {
        return Some((*k, v.as_str()));
      }
      self.chain = self.buckets.next()?.iter();
    }
  }
}

impl<'a, H> IntoIterator for &'a ChainedHashTable<H> {
  type Item = (i32, &'a str);
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

impl<H, S> Extend<(i32, S)> for ChainedHashTable<H>
where H: BucketHasher, S: Into<String> {
  fn extend<I: IntoIterator<Item = (i32, S)>>(&mut self, iter: I) {
    for (k, v) in iter {
      self.put(k, v);
    }
  }
}

impl<S> FromIterator<(i32, S)> for ChainedHashTable<Xxh3Hasher>
where S: Into<String> {
  /// Collects into a table built from the default options.
  fn from_iter<I: IntoIterator<Item = (i32, S)>>(iter: I) -> Self {
    let mut table = ChainedHashTable {
      buckets: vec![Vec::new(); TableOptions::default().capacity],
      num_keys: 0,
      load_factor: TableOptions::default().load_factor,
      growth_coefficient: TableOptions::default().growth_coefficient,
      hasher: Xxh3Hasher,
    };
    table.extend(iter);
    table
  }
}

impl<H> fmt::Debug for ChainedHashTable<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

impl<H> Dict<i32,String> for ChainedHashTable<H>
where H: BucketHasher {
  fn get(&self, k: &i32) -> Option<String> {
    self.search(*k).map(str::to_owned)
  }

  fn put(&mut self, k: i32, v: String) -> Option<String> {
    ChainedHashTable::put(self, k, v)
  }

  fn remove(&mut self, k: &i32) -> Option<String> {
    ChainedHashTable::remove(self, *k)
  }

  fn contains_key(&self, k: &i32) -> bool {
    ChainedHashTable::contains_key(self, *k)
  }

  fn is_empty(&self) -> bool {
    ChainedHashTable::is_empty(self)
  }

  fn size(&self) -> usize {
    ChainedHashTable::size(self)
  }
}
