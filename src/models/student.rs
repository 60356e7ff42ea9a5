//! Student model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

/// Student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub created_at: u64,
    pub updated_at: Option<u64>,
}

/// Create/update student request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
}

impl Record for Student {
    type Payload = StudentPayload;

    const KIND: &'static str = "student";

    fn create(id: u64, created_at: u64, payload: StudentPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            created_at,
            updated_at: None,
        }
    }

    fn apply(&mut self, payload: StudentPayload, updated_at: u64) {
        self.name = payload.name;
        self.email = payload.email;
        self.updated_at = Some(updated_at);
    }
}
