//! Data models for the record server

pub mod book;
pub mod loan;
pub mod student;

// Re-export commonly used types
pub use book::{Book, BookPayload};
pub use loan::{Loan, LoanPayload};
pub use student::{Student, StudentPayload};

/// A stored entity paired with the payload that creates and updates it.
///
/// The id and timestamps are owned by the record service; a payload only
/// ever carries the caller-supplied fields.
pub trait Record: Clone + Send + 'static {
    type Payload;

    /// Lower-case kind name used in error messages and logs
    const KIND: &'static str;

    /// Build a fresh record. `updated_at` starts out absent.
    fn create(id: u64, created_at: u64, payload: Self::Payload) -> Self;

    /// Overwrite the payload fields and stamp `updated_at`.
    fn apply(&mut self, payload: Self::Payload, updated_at: u64);
}
