// src/models/response.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

/// One submitted answer: the question it targets and the selected option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: i64,
    pub selected_option: String,
}

/// Represents a row of the 'responses' table: the current scored submission
/// for a (user, quiz) pair. Retakes replace the row rather than append.
#[derive(Debug, Clone, FromRow)]
pub struct QuizResponse {
    pub id: i64,
    pub user_id: i64,
    pub quiz_id: i64,
    pub answers: Json<Vec<SubmittedAnswer>>,
    pub score: f64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Insert DTO for a scored submission.
#[derive(Debug)]
pub struct NewResponse {
    pub user_id: i64,
    pub quiz_id: i64,
    pub answers: Vec<SubmittedAnswer>,
    pub score: f64,
}

/// DTO for submitting answers to a quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitResponseRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(range(min = 1))]
    pub quiz_id: i64,
    #[validate(length(min = 1, message = "No answers submitted"))]
    pub answers: Vec<SubmittedAnswer>,
}

/// Per-question correctness feedback returned after scoring.
#[derive(Debug, Serialize)]
pub struct AnswerFeedback {
    pub question_id: i64,
    pub selected_option: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// The full scoring result for one submission.
#[derive(Debug, Serialize)]
pub struct ScoreFeedback {
    pub score: f64,
    pub passed: bool,
    pub recommendation: String,
    pub feedback: Vec<AnswerFeedback>,
}
