//! Per-kind id sequences

use std::sync::atomic::{AtomicU64, Ordering};

/// First id handed out by a fresh sequence
pub const FIRST_ID: u64 = 1;

/// Strictly increasing id source. Ids are never reused, even after the
/// record that held one is deleted.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(FIRST_ID)
    }

    /// Resume a sequence, e.g. after reloading records from a persistent store.
    ///
    /// The sequence ends at `u64::MAX - 1`; asking for an id past that panics
    /// rather than wrapping back to ids already handed out.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next(&self) -> u64 {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .expect("id sequence exhausted")
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_starts_at_one() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
        assert_eq!(ids.next(), 3);
    }

    #[test]
    fn test_starting_at() {
        let ids = IdGenerator::starting_at(40);
        assert_eq!(ids.next(), 40);
        assert_eq!(ids.next(), 41);
    }

    #[test]
    #[should_panic(expected = "id sequence exhausted")]
    fn test_exhausted_sequence_does_not_wrap() {
        let ids = IdGenerator::starting_at(u64::MAX - 1);
        assert_eq!(ids.next(), u64::MAX - 1);
        ids.next();
    }

    #[test]
    fn test_unique_across_threads() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
