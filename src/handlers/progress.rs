// src/handlers/progress.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{engine::AssessmentEngine, error::AppError};

/// Returns the learner's ledger for a course: completion state, running
/// average and per-module grades.
pub async fn get_progress(
    State(engine): State<AssessmentEngine>,
    Path((user_id, course_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let progress = engine.progress_report(user_id, course_id).await?;

    Ok(Json(progress))
}
