// src/store/mod.rs

pub mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{
    account::Account,
    course::{Course, CourseModule},
    progress::Progress,
    question::{Question, QuestionSnapshot},
    quiz::{NewQuiz, Quiz},
    response::{NewResponse, QuizResponse},
};

/// Read access to the externally owned catalog records: accounts, courses
/// and modules. The engine never writes these (the completed-course set and
/// the completed-learner counter go through [`ProgressStore`]).
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_account(&self, user_id: i64) -> Result<Account, AppError>;
    async fn find_course(&self, course_id: i64) -> Result<Course, AppError>;
    async fn find_module(&self, module_id: i64) -> Result<CourseModule, AppError>;
}

/// Question banks, issued quizzes and their responses.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// The module's full bank of candidate questions. Pure read.
    async fn question_bank(&self, module_id: i64) -> Result<Vec<Question>, AppError>;

    /// Distinct question snapshots previously issued in instructor quizzes
    /// for the module. Deduplicated by question id; the first snapshot wins.
    async fn instructor_questions(&self, module_id: i64)
    -> Result<Vec<QuestionSnapshot>, AppError>;

    async fn insert_quiz(&self, quiz: NewQuiz) -> Result<Quiz, AppError>;
    async fn find_quiz(&self, quiz_id: i64) -> Result<Quiz, AppError>;

    /// The current (non-superseded) response for a (user, quiz) pair.
    async fn find_response(
        &self,
        user_id: i64,
        quiz_id: i64,
    ) -> Result<Option<QuizResponse>, AppError>;

    async fn delete_response(&self, response_id: i64) -> Result<(), AppError>;
    async fn insert_response(&self, response: NewResponse) -> Result<QuizResponse, AppError>;
}

/// The per-(user, course) ledger rows and the completed-course set.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn find_progress(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Progress>, AppError>;

    async fn save_progress(&self, progress: &Progress) -> Result<(), AppError>;

    async fn course_completed(&self, user_id: i64, course_id: i64) -> Result<bool, AppError>;

    /// Adds the course to the learner's completed set and bumps the course's
    /// completed-learner counter. Returns `false` when the course was
    /// already recorded; the counter is left untouched in that case.
    async fn record_course_completion(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<bool, AppError>;
}

/// The full set of contracts the engine is wired against.
pub trait EngineStore: CatalogStore + QuizStore + ProgressStore {}

impl<T: CatalogStore + QuizStore + ProgressStore> EngineStore for T {}
