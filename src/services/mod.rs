//! Business logic services

pub mod clock;
pub mod records;

use std::sync::Arc;

use crate::{
    models::{Book, Loan, Student},
    repository::Repository,
};

pub use clock::{Clock, SystemClock};
pub use records::RecordService;

pub type BookService = RecordService<Book>;
pub type StudentService = RecordService<Student>;
pub type LoanService = RecordService<Loan>;

/// Container for all services
pub struct Services {
    pub books: BookService,
    pub students: StudentService,
    pub loans: LoanService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        let Repository {
            books,
            book_ids,
            students,
            student_ids,
            loans,
            loan_ids,
        } = repository;

        Self {
            books: RecordService::new(books, book_ids, clock.clone()),
            students: RecordService::new(students, student_ids, clock.clone()),
            loans: RecordService::new(loans, loan_ids, clock),
        }
    }
}
