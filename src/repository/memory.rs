//! In-memory record store

use indexmap::IndexMap;

use super::EntityStore;

/// Insertion-ordered in-memory store
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: IndexMap<u64, T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send> EntityStore<T> for MemoryStore<T> {
    fn insert(&mut self, id: u64, value: T) {
        self.records.insert(id, value);
    }

    fn get(&self, id: u64) -> Option<T> {
        self.records.get(&id).cloned()
    }

    fn remove(&mut self, id: u64) -> Option<T> {
        // shift_remove keeps the remaining records in insertion order
        self.records.shift_remove(&id)
    }

    fn update<F>(&mut self, id: u64, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let value = self.records.get_mut(&id)?;
        f(value);
        Some(value.clone())
    }

    fn values(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
