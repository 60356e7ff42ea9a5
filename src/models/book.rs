//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    /// Creation time (ns since the Unix epoch)
    pub created_at: u64,
    /// Time of the last update, absent if never updated
    pub updated_at: Option<u64>,
}

/// Create/update book request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
}

impl Record for Book {
    type Payload = BookPayload;

    const KIND: &'static str = "book";

    fn create(id: u64, created_at: u64, payload: BookPayload) -> Self {
        Self {
            id,
            title: payload.title,
            author: payload.author,
            created_at,
            updated_at: None,
        }
    }

    fn apply(&mut self, payload: BookPayload, updated_at: u64) {
        self.title = payload.title;
        self.author = payload.author;
        self.updated_at = Some(updated_at);
    }
}
