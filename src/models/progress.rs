// src/models/progress.rs

use serde::Serialize;
use sqlx::{prelude::FromRow, types::Json};

/// Represents a row of the 'progress' table: the per-(user, course) ledger
/// of scores and completion state. Created when a learner enrolls.
///
/// Invariants maintained by the engine:
/// * `completed_modules` never decreases;
/// * `completion_percentage == completed_modules / num_modules * 100`;
/// * `quizzes_taken` counts distinct quizzes with at least one scored
///   submission (retakes do not increment it);
/// * `avg_score` is the mean of the current, non-superseded response scores
///   for the course;
/// * `quiz_grades[i]` holds the latest score for the module with order
///   `i + 1`, NULL when that module has no scored submission yet.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Progress {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub completed_modules: i64,
    pub completion_percentage: f64,
    pub quizzes_taken: i64,
    pub last_quiz_score: Option<f64>,
    pub avg_score: Option<f64>,
    pub quiz_grades: Json<Vec<Option<f64>>>,
}
