// src/engine/grader.rs

use crate::error::AppError;
use crate::models::response::{AnswerFeedback, NewResponse, ScoreFeedback, SubmittedAnswer};

use super::{AssessmentEngine, PASS_THRESHOLD};

impl AssessmentEngine {
    /// Scores a submitted set of answers against the quiz's question
    /// snapshots, replaces any prior response for the (user, quiz) pair and
    /// applies the result to the learner's ledger.
    ///
    /// Validation is strict and happens before any write: an answer
    /// referencing a question that is not part of the quiz rejects the whole
    /// submission, leaving the response store and the ledger untouched.
    pub async fn submit_response(
        &self,
        user_id: i64,
        quiz_id: i64,
        answers: Vec<SubmittedAnswer>,
    ) -> Result<ScoreFeedback, AppError> {
        self.store.find_account(user_id).await?;
        let quiz = self.store.find_quiz(quiz_id).await?;

        if answers.is_empty() {
            return Err(AppError::BadRequest("No answers submitted".to_string()));
        }

        for answer in &answers {
            if !quiz.questions.iter().any(|q| q.id == answer.question_id) {
                return Err(AppError::BadRequest(format!(
                    "Question {} is not part of quiz {}",
                    answer.question_id, quiz_id
                )));
            }
        }

        // Exact-match scoring over every question in the quiz; unanswered
        // questions count as incorrect.
        let feedback: Vec<AnswerFeedback> = quiz
            .questions
            .iter()
            .map(|q| {
                let selected_option = answers
                    .iter()
                    .find(|a| a.question_id == q.id)
                    .map(|a| a.selected_option.clone());
                let is_correct = selected_option.as_deref() == Some(q.answer.as_str());
                AnswerFeedback {
                    question_id: q.id,
                    selected_option,
                    correct_answer: q.answer.clone(),
                    is_correct,
                }
            })
            .collect();

        let correct = feedback.iter().filter(|f| f.is_correct).count();
        let score = score_percentage(correct, quiz.questions.len());
        let passed = score >= PASS_THRESHOLD;

        let module = self.store.find_module(quiz.module_id).await?;
        let course = self.store.find_course(module.course_id).await?;

        // Everything from the ledger read to the final save happens under
        // the (user, course) submission lock; concurrent retakes must not
        // interleave their read-modify-write.
        let _guard = self.submission_locks.acquire(user_id, course.id).await;

        let mut progress = self
            .store
            .find_progress(user_id, course.id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "User {} is not enrolled in course {}",
                    user_id, course.id
                ))
            })?;

        // A prior response for this pair marks a retake: it is superseded,
        // not appended to.
        let previous = self.store.find_response(user_id, quiz_id).await?;
        if let Some(prior) = &previous {
            self.store.delete_response(prior.id).await?;
        }
        self.store
            .insert_response(NewResponse {
                user_id,
                quiz_id,
                answers,
                score,
            })
            .await?;

        self.apply_submission(
            &mut progress,
            &module,
            &course,
            score,
            previous.as_ref().map(|r| r.score),
        )
        .await?;

        tracing::info!(
            user_id,
            quiz_id,
            score,
            retake = previous.is_some(),
            "response scored"
        );

        Ok(ScoreFeedback {
            score,
            passed,
            recommendation: recommendation(passed).to_string(),
            feedback,
        })
    }
}

fn score_percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * correct as f64 / total as f64
}

fn recommendation(passed: bool) -> &'static str {
    if passed {
        "Great work! You are ready to move on to the next module."
    } else {
        "Review the module material and retake the quiz when you are ready."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_exact_percentage() {
        assert_eq!(score_percentage(3, 5), 60.0);
        assert_eq!(score_percentage(0, 4), 0.0);
        assert_eq!(score_percentage(4, 4), 100.0);
        assert_eq!(score_percentage(1, 3), 100.0 / 3.0);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        assert_eq!(score_percentage(0, 0), 0.0);
    }

    #[test]
    fn recommendation_keyed_on_pass() {
        assert!(recommendation(true).contains("move on"));
        assert!(recommendation(false).contains("Review"));
    }
}
