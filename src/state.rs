use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::engine::AssessmentEngine;
use crate::store::SqliteStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub engine: AssessmentEngine,
}

impl AppState {
    /// Wires the assessment engine against the SQLite-backed store.
    pub fn new(pool: SqlitePool) -> Self {
        let store = Arc::new(SqliteStore::new(pool.clone()));
        Self {
            pool,
            engine: AssessmentEngine::new(store),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for AssessmentEngine {
    fn from_ref(state: &AppState) -> Self {
        state.engine.clone()
    }
}
