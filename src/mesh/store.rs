//! Index stores for mesh attributes.
//!
//! Both stores hand out stable zero-based indices in first-insertion order
//! and expose the accumulated values for serialization. [`DedupStore`] is
//! the normal path; [`AppendStore`] backs the writable-vertices option,
//! where equal positions must stay unshared so downstream mutation of one
//! vertex cannot alias another.

use std::collections::HashMap;
use std::hash::Hash;

/// A value → index registry. No removal; indices never shift.
pub trait IndexStore<T> {
    /// Register a value and return its zero-based index.
    fn add(&mut self, value: T) -> usize;
    /// Accumulated values in first-insertion order.
    fn values(&self) -> &[T];
}

/// Deduplicating store: structurally equal values share one index.
#[derive(Debug)]
pub struct DedupStore<T> {
    values: Vec<T>,
    index: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> DedupStore<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> Default for DedupStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> IndexStore<T> for DedupStore<T> {
    fn add(&mut self, value: T) -> usize {
        if let Some(&existing) = self.index.get(&value) {
            return existing;
        }
        let index = self.values.len();
        self.index.insert(value.clone(), index);
        self.values.push(value);
        index
    }

    fn values(&self) -> &[T] {
        &self.values
    }
}

/// Duplicating store: every add appends, equal values included.
#[derive(Debug)]
pub struct AppendStore<T> {
    values: Vec<T>,
}

impl<T> AppendStore<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T> Default for AppendStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IndexStore<T> for AppendStore<T> {
    fn add(&mut self, value: T) -> usize {
        let index = self.values.len();
        self.values.push(value);
        index
    }

    fn values(&self) -> &[T] {
        &self.values
    }
}
