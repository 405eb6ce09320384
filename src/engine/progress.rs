// src/engine/progress.rs

use crate::error::AppError;
use crate::models::course::{Course, CourseModule};
use crate::models::progress::Progress;

use super::{AssessmentEngine, COMPLETION_THRESHOLD};

impl AssessmentEngine {
    /// The learner's ledger for a course, as stored.
    pub async fn progress_report(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Progress, AppError> {
        self.store.find_course(course_id).await?;
        self.store
            .find_progress(user_id, course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "User {} is not enrolled in course {}",
                    user_id, course_id
                ))
            })
    }

    /// Applies one scored submission to the ledger and, when the module was
    /// passed, advances completion state. Callers hold the (user, course)
    /// submission lock.
    pub(super) async fn apply_submission(
        &self,
        progress: &mut Progress,
        module: &CourseModule,
        course: &Course,
        score: f64,
        previous_score: Option<f64>,
    ) -> Result<(), AppError> {
        apply_score(progress, module.module_order, course.num_modules, score, previous_score);

        // One-way ratchet: a pass advances completion to the module's order,
        // but re-failing an earlier module never regresses it.
        if score >= COMPLETION_THRESHOLD && module.module_order > progress.completed_modules {
            progress.completed_modules = module.module_order;
            progress.completion_percentage =
                completion_percentage(progress.completed_modules, course.num_modules);

            if progress.completion_percentage >= 100.0
                && !self.store.course_completed(progress.user_id, course.id).await?
                && self
                    .store
                    .record_course_completion(progress.user_id, course.id)
                    .await?
            {
                tracing::info!(
                    user_id = progress.user_id,
                    course_id = course.id,
                    "course completed"
                );
            }
        }

        self.store.save_progress(progress).await
    }
}

/// Ledger arithmetic for one scored submission.
///
/// The average stays the exact mean of the current (non-superseded) response
/// scores without storing the full history: a retake swaps the superseded
/// score out of the running total, a first attempt extends it.
fn apply_score(
    progress: &mut Progress,
    module_order: i64,
    num_modules: i64,
    score: f64,
    previous_score: Option<f64>,
) {
    // Lazily size the per-module grade list to the course's module count.
    let grades = &mut progress.quiz_grades.0;
    if grades.len() != num_modules as usize {
        grades.resize(num_modules as usize, None);
    }

    // Module order is 1-based; order 0 marks a module off the sequential
    // path and records no grade.
    if module_order >= 1 && (module_order as usize) <= grades.len() {
        grades[module_order as usize - 1] = Some(score);
    }

    let avg = progress.avg_score.unwrap_or(0.0);
    let taken = progress.quizzes_taken;

    let (new_total, denom) = match previous_score {
        // Retake: the superseded score leaves the mean, the new one enters;
        // the quiz count is unchanged.
        Some(previous) => (avg * taken as f64 - previous + score, taken),
        // First scored submission for this quiz.
        None => (avg * taken as f64 + score, taken + 1),
    };

    progress.avg_score = Some(if denom <= 0 {
        score
    } else {
        new_total / denom as f64
    });

    if previous_score.is_none() {
        progress.quizzes_taken = taken + 1;
    }
    progress.last_quiz_score = Some(score);
}

fn completion_percentage(completed_modules: i64, num_modules: i64) -> f64 {
    if num_modules <= 0 {
        return 0.0;
    }
    completed_modules as f64 / num_modules as f64 * 100.0
}
