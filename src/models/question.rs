// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Difficulty tier of a question. Also used to gate which questions a
/// learner may receive (see the quiz assembler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Question type: multiple-choice with free-form options, or true-false
/// with a fixed pair of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
}

/// Represents a row of the 'questions' table. One bank per module.
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,
    pub module_id: i64,

    /// The text content of the question.
    pub content: String,

    /// List of options (e.g., ["Option A", "Option B"]).
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// The correct answer, matched verbatim against submitted options.
    pub answer: String,

    pub difficulty: Difficulty,
    pub question_type: QuestionType,
}

/// The copy of a question embedded in an issued quiz. Snapshots are taken
/// at issue time so later bank edits cannot change a quiz that has already
/// been taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSnapshot {
    pub id: i64,
    pub content: String,
    pub options: Vec<String>,
    pub answer: String,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
}

impl From<Question> for QuestionSnapshot {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            content: q.content,
            options: q.options.0,
            answer: q.answer,
            difficulty: q.difficulty,
            question_type: q.question_type,
        }
    }
}
