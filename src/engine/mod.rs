// src/engine/mod.rs

mod assembler;
mod grader;
mod progress;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::store::EngineStore;

/// Score required for learner-facing pass/fail messaging.
pub const PASS_THRESHOLD: f64 = 50.0;

/// Score required for a submission to advance module completion. Identical
/// to [`PASS_THRESHOLD`] today; kept as its own constant so the two can
/// diverge without touching the grading path.
pub const COMPLETION_THRESHOLD: f64 = 50.0;

/// Number of questions in an adaptive learner quiz.
pub const LEARNER_QUIZ_SIZE: usize = 3;

/// The adaptive assessment engine: assembles quizzes, scores submissions,
/// keeps the per-(user, course) ledger consistent and cascades module
/// passes into course and account completion state.
///
/// The engine only talks to storage through the narrow [`EngineStore`]
/// contracts, so callers decide where the records actually live.
#[derive(Clone)]
pub struct AssessmentEngine {
    store: Arc<dyn EngineStore>,
    submission_locks: SubmissionLocks,
}

impl AssessmentEngine {
    pub fn new(store: Arc<dyn EngineStore>) -> Self {
        Self {
            store,
            submission_locks: SubmissionLocks::default(),
        }
    }
}

/// One async mutex per (user, course). The ledger update during submission
/// is a read-modify-write over shared rows; two interleaved submissions for
/// the same pair would silently lose an average update.
#[derive(Clone, Default)]
struct SubmissionLocks {
    inner: Arc<Mutex<HashMap<(i64, i64), Arc<tokio::sync::Mutex<()>>>>>,
}

impl SubmissionLocks {
    async fn acquire(&self, user_id: i64, course_id: i64) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            map.entry((user_id, course_id)).or_default().clone()
        };
        lock.lock_owned().await
    }
}
