// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

use crate::models::question::{Difficulty, QuestionSnapshot, QuestionType};

/// Who a quiz was issued for: a class-wide instructor quiz (no owner) or a
/// personal adaptive learner quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum QuizKind {
    Instructor,
    Learner,
}

/// Represents a row of the 'quizzes' table. Immutable after creation; the
/// question snapshots are the scoring reference for every submission.
#[derive(Debug, Clone, FromRow)]
pub struct Quiz {
    pub id: i64,
    pub user_id: Option<i64>,
    pub module_id: i64,
    pub kind: QuizKind,
    pub questions: Json<Vec<QuestionSnapshot>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Insert DTO for a freshly assembled quiz.
#[derive(Debug)]
pub struct NewQuiz {
    pub user_id: Option<i64>,
    pub module_id: i64,
    pub kind: QuizKind,
    pub questions: Vec<QuestionSnapshot>,
}

/// Restricts instructor quiz assembly to one question type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeFilter {
    MultipleChoice,
    TrueFalse,
    #[default]
    Both,
}

impl TypeFilter {
    pub fn matches(self, question_type: QuestionType) -> bool {
        match self {
            TypeFilter::Both => true,
            TypeFilter::MultipleChoice => question_type == QuestionType::MultipleChoice,
            TypeFilter::TrueFalse => question_type == QuestionType::TrueFalse,
        }
    }
}

/// DTO for an instructor requesting a quiz over a module's bank.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateInstructorQuizRequest {
    #[validate(range(min = 1))]
    pub module_id: i64,
    #[validate(range(min = 1, max = 100))]
    pub question_count: u32,
    #[serde(default)]
    pub type_filter: TypeFilter,
}

/// DTO for a learner requesting an adaptive quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateLearnerQuizRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(range(min = 1))]
    pub module_id: i64,
}

/// DTO for sending a question to the client (excludes the answer).
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub content: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
}

/// DTO for sending an issued quiz to the client.
#[derive(Debug, Serialize)]
pub struct QuizView {
    pub id: i64,
    pub module_id: i64,
    pub kind: QuizKind,
    pub questions: Vec<QuestionView>,
}

impl From<Quiz> for QuizView {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            module_id: quiz.module_id,
            kind: quiz.kind,
            questions: quiz
                .questions
                .0
                .into_iter()
                .map(|q| QuestionView {
                    id: q.id,
                    question_type: q.question_type,
                    content: q.content,
                    options: q.options,
                    difficulty: q.difficulty,
                })
                .collect(),
        }
    }
}
