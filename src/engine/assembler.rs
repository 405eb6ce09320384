// src/engine/assembler.rs

use rand::seq::SliceRandom;

use crate::error::AppError;
use crate::models::question::{Difficulty, QuestionSnapshot};
use crate::models::quiz::{NewQuiz, Quiz, QuizKind, TypeFilter};

use super::{AssessmentEngine, LEARNER_QUIZ_SIZE};

impl AssessmentEngine {
    /// Assembles a class-wide quiz for an instructor: `count` questions
    /// drawn uniformly at random from the module's bank, optionally
    /// restricted to one question type.
    pub async fn generate_instructor_quiz(
        &self,
        module_id: i64,
        count: usize,
        type_filter: TypeFilter,
    ) -> Result<Quiz, AppError> {
        self.store.find_module(module_id).await?;

        let bank = self.store.question_bank(module_id).await?;
        let eligible: Vec<QuestionSnapshot> = bank
            .into_iter()
            .filter(|q| type_filter.matches(q.question_type))
            .map(QuestionSnapshot::from)
            .collect();

        if eligible.len() < count {
            return Err(AppError::InsufficientQuestions(format!(
                "Requested {} questions but only {} match the filter",
                count,
                eligible.len()
            )));
        }

        let questions = draw_sample(eligible, count);
        let quiz = self
            .store
            .insert_quiz(NewQuiz {
                user_id: None,
                module_id,
                kind: QuizKind::Instructor,
                questions,
            })
            .await?;

        tracing::info!(quiz_id = quiz.id, module_id, "instructor quiz issued");
        Ok(quiz)
    }

    /// Assembles an adaptive quiz for a learner: three questions drawn from
    /// the instructor-issued pool for the module, gated by the difficulty
    /// tier the learner's running average puts them in.
    pub async fn generate_learner_quiz(
        &self,
        user_id: i64,
        module_id: i64,
    ) -> Result<Quiz, AppError> {
        self.store.find_account(user_id).await?;
        let module = self.store.find_module(module_id).await?;

        // A learner must be enrolled before taking quizzes.
        let progress = self
            .store
            .find_progress(user_id, module.course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "User {} is not enrolled in course {}",
                    user_id, module.course_id
                ))
            })?;

        let avg_score = progress.avg_score.unwrap_or(0.0);
        let tiers = eligible_difficulties(avg_score);

        let pool: Vec<QuestionSnapshot> = self
            .store
            .instructor_questions(module_id)
            .await?
            .into_iter()
            .filter(|q| tiers.contains(&q.difficulty))
            .collect();

        if pool.len() < LEARNER_QUIZ_SIZE {
            return Err(AppError::InsufficientQuestions(format!(
                "Only {} questions available at this difficulty tier, {} required",
                pool.len(),
                LEARNER_QUIZ_SIZE
            )));
        }

        let questions = draw_sample(pool, LEARNER_QUIZ_SIZE);
        let quiz = self
            .store
            .insert_quiz(NewQuiz {
                user_id: Some(user_id),
                module_id,
                kind: QuizKind::Learner,
                questions,
            })
            .await?;

        tracing::info!(
            quiz_id = quiz.id,
            user_id,
            module_id,
            avg_score,
            "learner quiz issued"
        );
        Ok(quiz)
    }
}

/// Difficulty tiers widen as the running average improves: weak learners
/// only see easy material, strong learners stop seeing it.
fn eligible_difficulties(avg_score: f64) -> &'static [Difficulty] {
    if avg_score < 40.0 {
        &[Difficulty::Easy]
    } else if avg_score < 70.0 {
        &[Difficulty::Easy, Difficulty::Medium]
    } else {
        &[Difficulty::Medium, Difficulty::Hard]
    }
}

/// Uniform selection without replacement: Fisher-Yates partial shuffle over
/// the pool, then take the shuffled prefix.
fn draw_sample(mut pool: Vec<QuestionSnapshot>, count: usize) -> Vec<QuestionSnapshot> {
    let mut rng = rand::thread_rng();
    let (picked, _) = pool.partial_shuffle(&mut rng, count);
    picked.to_vec()
}
