//! Randomized operation logs for dictionary tests
//!
//! A `DictTester` drives a `Dict<i32,String>` with a random mix of
//! operations and records each one together with the result the
//! dictionary returned. `replay` then applies the log to a `HashMap`
//! model, asserting that every recorded result matches what the model
//! would have returned at that point.

use std::collections::HashMap;
use rand::Rng;
use rand::rngs::ThreadRng;
use crate::dict::Dict;

/// Represents an operation performed by a `Dict<K,V>`, with its result.
#[derive(Debug, Clone, PartialEq)]
pub enum DictOp<K,V> {
  Get(K, Option<V>),
  Put(K, V, Option<V>),
  Remove(K, Option<V>),
}

#[derive(Debug, Clone, Copy)]
enum DictTestOp {
  Get,
  Put,
  Remove,
}

/// Chooses an operation with the given probability weights.
fn choose_op<T: Copy>(rng: &mut ThreadRng, ops: &[(T, f64)]) -> T {
  let total: f64 = ops.iter().map(|&(_, p)| p).sum();
  let mut x = rng.gen::<f64>() * total;
  for &(op, p) in ops {
    if x < p {
      return op;
    }
    x -= p;
  }
  ops[ops.len() - 1].0
}

pub struct DictTester {
  ops: Vec<(DictTestOp, f64)>,
  key_range: i32,
}

impl DictTester {
  pub fn new(key_range: i32) -> Self {
    Self {
      ops: vec![(DictTestOp::Get,    0.3),
                (DictTestOp::Put,    0.5),
                (DictTestOp::Remove, 0.2)],
      key_range: key_range,
    }
  }

  fn gen_key(&self, rng: &mut ThreadRng) -> i32 {
    rng.gen_range(-self.key_range..self.key_range)
  }

  fn execute_op<D>(&self, dict: &mut D, rng: &mut ThreadRng) -> DictOp<i32,String>
  where D: Dict<i32,String> {
    let k = self.gen_key(rng);

    match choose_op(rng, &self.ops) {
      DictTestOp::Get => {
        let r = dict.get(&k);
        assert_eq!(dict.contains_key(&k), r.is_some());
        DictOp::Get(k, r)
      }
      DictTestOp::Put => {
        let v = format!("v{}", rng.gen::<u16>());
        let r = dict.put(k, v.clone());
        DictOp::Put(k, v, r)
      }
      DictTestOp::Remove => {
        let r = dict.remove(&k);
        DictOp::Remove(k, r)
      }
    }
  }

  /// Runs `n` random operations against `dict`, returning the log.
  pub fn run<D>(&self, dict: &mut D, rng: &mut ThreadRng, n: usize) -> Vec<DictOp<i32,String>>
  where D: Dict<i32,String> {
    (0..n).map(|_| self.execute_op(dict, rng)).collect()
  }
}

/// Replays `log` against a `HashMap`, checking every recorded result.
/// Returns the final model state.
pub fn replay(log: &[DictOp<i32,String>]) -> HashMap<i32,String> {
  let mut state = HashMap::new();

  for op in log {
    match op {
      DictOp::Get(k, r) => {
        assert_eq!(state.get(k), r.as_ref(), "get({}) diverged", k);
      }
      DictOp::Put(k, v, r) => {
        assert_eq!(state.insert(*k, v.clone()).as_ref(), r.as_ref(), "put({}) diverged", k);
      }
      DictOp::Remove(k, r) => {
        assert_eq!(state.remove(k).as_ref(), r.as_ref(), "remove({}) diverged", k);
      }
    }
  }

  state
}
