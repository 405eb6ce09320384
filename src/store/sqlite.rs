// src/store/sqlite.rs

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{SqlitePool, types::Json};

use crate::error::AppError;
use crate::models::{
    account::Account,
    course::{Course, CourseModule},
    progress::Progress,
    question::{Question, QuestionSnapshot},
    quiz::{NewQuiz, Quiz},
    response::{NewResponse, QuizResponse},
};
use crate::store::{CatalogStore, ProgressStore, QuizStore};

/// SQLite-backed implementation of the engine's store contracts.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteStore {
    async fn find_account(&self, user_id: i64) -> Result<Account, AppError> {
        sqlx::query_as::<_, Account>("SELECT id, username, role FROM accounts WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Account {} not found", user_id)))
    }

    async fn find_course(&self, course_id: i64) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT id, title, num_modules, completed_learners FROM courses WHERE id = ?",
        )
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course {} not found", course_id)))
    }

    async fn find_module(&self, module_id: i64) -> Result<CourseModule, AppError> {
        sqlx::query_as::<_, CourseModule>(
            "SELECT id, course_id, module_order, title FROM modules WHERE id = ?",
        )
        .bind(module_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Module {} not found", module_id)))
    }
}

#[async_trait]
impl QuizStore for SqliteStore {
    async fn question_bank(&self, module_id: i64) -> Result<Vec<Question>, AppError> {
        let bank = sqlx::query_as::<_, Question>(
            "SELECT id, module_id, content, options, answer, difficulty, question_type
             FROM questions
             WHERE module_id = ?
             ORDER BY id",
        )
        .bind(module_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bank)
    }

    async fn instructor_questions(
        &self,
        module_id: i64,
    ) -> Result<Vec<QuestionSnapshot>, AppError> {
        let rows = sqlx::query_scalar::<_, Json<Vec<QuestionSnapshot>>>(
            "SELECT questions FROM quizzes
             WHERE module_id = ? AND kind = 'instructor'
             ORDER BY id",
        )
        .bind(module_id)
        .fetch_all(&self.pool)
        .await?;

        let mut seen = HashSet::new();
        let mut pool = Vec::new();
        for Json(snapshots) in rows {
            for question in snapshots {
                if seen.insert(question.id) {
                    pool.push(question);
                }
            }
        }

        Ok(pool)
    }

    async fn insert_quiz(&self, quiz: NewQuiz) -> Result<Quiz, AppError> {
        let created_at = Utc::now();

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO quizzes (user_id, module_id, kind, questions, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(quiz.user_id)
        .bind(quiz.module_id)
        .bind(quiz.kind)
        .bind(Json(&quiz.questions))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert quiz: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(Quiz {
            id,
            user_id: quiz.user_id,
            module_id: quiz.module_id,
            kind: quiz.kind,
            questions: Json(quiz.questions),
            created_at,
        })
    }

    async fn find_quiz(&self, quiz_id: i64) -> Result<Quiz, AppError> {
        sqlx::query_as::<_, Quiz>(
            "SELECT id, user_id, module_id, kind, questions, created_at
             FROM quizzes
             WHERE id = ?",
        )
        .bind(quiz_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {} not found", quiz_id)))
    }

    async fn find_response(
        &self,
        user_id: i64,
        quiz_id: i64,
    ) -> Result<Option<QuizResponse>, AppError> {
        let response = sqlx::query_as::<_, QuizResponse>(
            "SELECT id, user_id, quiz_id, answers, score, submitted_at
             FROM responses
             WHERE user_id = ? AND quiz_id = ?",
        )
        .bind(user_id)
        .bind(quiz_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(response)
    }

    async fn delete_response(&self, response_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM responses WHERE id = ?")
            .bind(response_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn insert_response(&self, response: NewResponse) -> Result<QuizResponse, AppError> {
        let submitted_at = Utc::now();

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO responses (user_id, quiz_id, answers, score, submitted_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(response.user_id)
        .bind(response.quiz_id)
        .bind(Json(&response.answers))
        .bind(response.score)
        .bind(submitted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert response: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(QuizResponse {
            id,
            user_id: response.user_id,
            quiz_id: response.quiz_id,
            answers: Json(response.answers),
            score: response.score,
            submitted_at,
        })
    }
}

#[async_trait]
impl ProgressStore for SqliteStore {
    async fn find_progress(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Progress>, AppError> {
        let progress = sqlx::query_as::<_, Progress>(
            "SELECT id, user_id, course_id, completed_modules, completion_percentage,
                    quizzes_taken, last_quiz_score, avg_score, quiz_grades
             FROM progress
             WHERE user_id = ? AND course_id = ?",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(progress)
    }

    async fn save_progress(&self, progress: &Progress) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE progress
             SET completed_modules = ?, completion_percentage = ?, quizzes_taken = ?,
                 last_quiz_score = ?, avg_score = ?, quiz_grades = ?
             WHERE id = ?",
        )
        .bind(progress.completed_modules)
        .bind(progress.completion_percentage)
        .bind(progress.quizzes_taken)
        .bind(progress.last_quiz_score)
        .bind(progress.avg_score)
        .bind(&progress.quiz_grades)
        .bind(progress.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save progress: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(())
    }

    async fn course_completed(&self, user_id: i64, course_id: i64) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM completed_courses WHERE user_id = ? AND course_id = ?",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn record_course_completion(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<bool, AppError> {
        // Insert-if-absent; the counter only moves when the row is new, so
        // repeating the cascade can never double-count a learner.
        let inserted = sqlx::query(
            "INSERT INTO completed_courses (user_id, course_id, completed_at)
             VALUES (?, ?, ?)
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(course_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Ok(false);
        }

        sqlx::query("UPDATE courses SET completed_learners = completed_learners + 1 WHERE id = ?")
            .bind(course_id)
            .execute(&self.pool)
            .await?;

        Ok(true)
    }
}
