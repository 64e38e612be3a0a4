use std::collections::HashMap;
use std::hash::Hash;
use super::*;

/// A `Dict<K,V>` based on Rust's `HashMap`.
#[derive(Debug, Clone)]
pub struct HtDict<K,V> {
  ht: HashMap<K,V>,
}

impl<K,V> HtDict<K,V>
where K: Eq + Hash {
  /// Creates a new, empty `HtDict<K,V>`.
  pub fn new() -> Self {
    Self {
      ht: HashMap::new()
    }
  }
}

impl<K,V> Default for HtDict<K,V>
where K: Eq + Hash {
  fn default() -> Self {
    Self::new()
  }
}

impl<K,V> Dict<K,V> for HtDict<K,V>
where K: Eq + Hash, V: Clone {
  fn get(&self, k: &K) -> Option<V> {
    self.ht.get(k).cloned()
  }

  fn put(&mut self, k: K, v: V) -> Option<V> {
    self.ht.insert(k, v)
  }

  fn remove(&mut self, k: &K) -> Option<V> {
    self.ht.remove(k)
  }

  fn contains_key(&self, k: &K) -> bool {
    self.ht.contains_key(k)
  }

  fn is_empty(&self) -> bool {
    self.ht.is_empty()
  }

  fn size(&self) -> usize {
    self.ht.len()
  }
}
