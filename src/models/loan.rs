//! Loan (borrow) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

/// Loan linking a student to a book.
///
/// `student_id` and `book_id` are stored as given; they are not checked
/// against the student and book stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Loan {
    pub id: u64,
    pub student_id: u64,
    pub book_id: u64,
    pub loan_date: u64,
    pub created_at: u64,
    pub updated_at: Option<u64>,
}

/// Create/update loan request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoanPayload {
    /// Borrowing student ID
    pub student_id: u64,
    /// Borrowed book ID
    pub book_id: u64,
    pub loan_date: u64,
}

impl Record for Loan {
    type Payload = LoanPayload;

    const KIND: &'static str = "loan";

    fn create(id: u64, created_at: u64, payload: LoanPayload) -> Self {
        Self {
            id,
            student_id: payload.student_id,
            book_id: payload.book_id,
            loan_date: payload.loan_date,
            created_at,
            updated_at: None,
        }
    }

    fn apply(&mut self, payload: LoanPayload, updated_at: u64) {
        self.student_id = payload.student_id;
        self.book_id = payload.book_id;
        self.loan_date = payload.loan_date;
        self.updated_at = Some(updated_at);
    }
}
