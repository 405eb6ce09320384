// src/models/account.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

/// Learner or instructor account, owned by the external account service.
/// The engine only checks existence; the completed-course set lives in its
/// own join table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub role: String,
}
