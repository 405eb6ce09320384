// src/handlers/quiz.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    engine::AssessmentEngine,
    error::AppError,
    models::{
        quiz::{GenerateInstructorQuizRequest, GenerateLearnerQuizRequest, QuizView},
        response::SubmitResponseRequest,
    },
};

/// Issues a class-wide quiz drawn from a module's question bank.
///
/// Returns the quiz without the correct answers (hidden by the view DTO).
pub async fn generate_instructor_quiz(
    State(engine): State<AssessmentEngine>,
    Json(payload): Json<GenerateInstructorQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let quiz = engine
        .generate_instructor_quiz(
            payload.module_id,
            payload.question_count as usize,
            payload.type_filter,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(QuizView::from(quiz))))
}

/// Issues an adaptive quiz for a learner, gated by their running average.
pub async fn generate_learner_quiz(
    State(engine): State<AssessmentEngine>,
    Json(payload): Json<GenerateLearnerQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let quiz = engine
        .generate_learner_quiz(payload.user_id, payload.module_id)
        .await?;

    Ok((StatusCode::CREATED, Json(QuizView::from(quiz))))
}

/// Scores a submitted set of answers and returns per-question feedback.
pub async fn submit_response(
    State(engine): State<AssessmentEngine>,
    Json(payload): Json<SubmitResponseRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let feedback = engine
        .submit_response(payload.user_id, payload.quiz_id, payload.answers)
        .await?;

    Ok(Json(feedback))
}
