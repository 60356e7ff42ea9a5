//! Generic record service shared by books, students and loans

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use super::clock::Clock;
use crate::{
    error::{AppError, AppResult},
    models::Record,
    repository::{EntityStore, IdGenerator, MemoryStore},
};

/// CRUD operations for one entity kind.
///
/// The store lock is held across id allocation and insertion, so concurrent
/// adds never share an id and updates never interleave.
pub struct RecordService<T: Record, S: EntityStore<T> = MemoryStore<T>> {
    store: Mutex<S>,
    ids: IdGenerator,
    clock: Arc<dyn Clock>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record, S: EntityStore<T>> RecordService<T, S> {
    pub fn new(store: S, ids: IdGenerator, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(store),
            ids,
            clock,
            _record: PhantomData,
        }
    }

    /// Create a record from `payload`
    pub fn add(&self, payload: T::Payload) -> T {
        let mut store = self.store.lock();
        let id = self.ids.next();
        let record = T::create(id, self.clock.now(), payload);
        store.insert(id, record.clone());
        tracing::debug!(kind = T::KIND, id, "record created");
        record
    }

    pub fn get(&self, id: u64) -> AppResult<T> {
        self.store
            .lock()
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("{} {} not found", T::KIND, id)))
    }

    /// All records, oldest first
    pub fn get_all(&self) -> Vec<T> {
        self.store.lock().values()
    }

    /// Overwrite the payload fields of an existing record
    pub fn update(&self, id: u64, payload: T::Payload) -> AppResult<T> {
        let mut store = self.store.lock();
        let record = store
            .update(id, |record| record.apply(payload, self.clock.now()))
            .ok_or_else(|| {
                AppError::not_found(format!("couldn't update {} {}: not found", T::KIND, id))
            })?;
        tracing::debug!(kind = T::KIND, id, "record updated");
        Ok(record)
    }

    /// Remove a record, returning it as it was before deletion
    pub fn delete(&self, id: u64) -> AppResult<T> {
        let record = self.store.lock().remove(id).ok_or_else(|| {
            AppError::not_found(format!("couldn't delete {} {}: not found", T::KIND, id))
        })?;
        tracing::debug!(kind = T::KIND, id, "record deleted");
        Ok(record)
    }

    /// Number of stored records
    pub fn count(&self) -> usize {
        self.store.lock().len()
    }
}
