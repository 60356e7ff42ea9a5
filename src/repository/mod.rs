//! Repository layer: record stores and id sequences

pub mod ids;
pub mod memory;

pub use ids::IdGenerator;
pub use memory::MemoryStore;

use crate::models::{Book, Loan, Student};

/// Ordered id → record container.
///
/// Callers own id allocation, so `insert` is only ever handed a fresh id.
pub trait EntityStore<T>: Send {
    fn insert(&mut self, id: u64, value: T);

    fn get(&self, id: u64) -> Option<T>;

    /// Remove and return the prior value
    fn remove(&mut self, id: u64) -> Option<T>;

    /// Apply `f` to the value at `id` and return the result
    fn update<F>(&mut self, id: u64, f: F) -> Option<T>
    where
        F: FnOnce(&mut T);

    /// Snapshot of every record in insertion order
    fn values(&self) -> Vec<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stores and id sequences for every entity kind, built once at start-up
pub struct Repository {
    pub books: MemoryStore<Book>,
    pub book_ids: IdGenerator,
    pub students: MemoryStore<Student>,
    pub student_ids: IdGenerator,
    pub loans: MemoryStore<Loan>,
    pub loan_ids: IdGenerator,
}

impl Repository {
    /// Create an empty in-memory repository
    pub fn new() -> Self {
        Self {
            books: MemoryStore::new(),
            book_ids: IdGenerator::new(),
            students: MemoryStore::new(),
            student_ids: IdGenerator::new(),
            loans: MemoryStore::new(),
            loan_ids: IdGenerator::new(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
