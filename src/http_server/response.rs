//! # Response Types

use serde::Serialize;

/// Body returned by create endpoints alongside 201 Created
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}
