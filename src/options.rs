//! Table configuration

use crate::error::Result;

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
pub const DEFAULT_GROWTH_COEFFICIENT: f64 = 2.0;

/// Construction parameters for a `ChainedHashTable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
  /// Initial number of buckets.
  pub capacity: usize,
  /// Ratio of keys to buckets at which the table grows, in (0, 1].
  pub load_factor: f64,
  /// Capacity multiplier applied on growth, strictly greater than 1.
  pub growth_coefficient: f64,
}

impl Default for TableOptions {
  fn default() -> Self {
    TableOptions {
      capacity: DEFAULT_CAPACITY,
      load_factor: DEFAULT_LOAD_FACTOR,
      growth_coefficient: DEFAULT_GROWTH_COEFFICIENT,
    }
  }
}

impl TableOptions {
  pub fn new(capacity: usize, load_factor: f64) -> Self {
    TableOptions {
      capacity,
      load_factor,
      ..Default::default()
    }
  }

  pub fn capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  pub fn load_factor(mut self, load_factor: f64) -> Self {
    self.load_factor = load_factor;
    self
  }

  pub fn growth_coefficient(mut self, growth_coefficient: f64) -> Self {
    self.growth_coefficient = growth_coefficient;
    self
  }

  /// Checks every parameter, reporting the first one out of range.
  pub fn validate(&self) -> Result<()> {
    if self.capacity == 0 {
      return invalid_arg!("hash table capacity must be greater than zero");
    }

    // NaN fails both comparisons, so test for the valid range instead.
    if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
      return invalid_arg!(
        "hash table load factor must be in range (0, 1], got {}",
        self.load_factor);
    }

    if !(self.growth_coefficient.is_finite() && self.growth_coefficient > 1.0) {
      return invalid_arg!(
        "hash table growth coefficient must be greater than 1, got {}",
        self.growth_coefficient);
    }

    Ok(())
  }
}
