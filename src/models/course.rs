// src/models/course.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

/// Course aggregate, owned by the external course service. The engine reads
/// `num_modules` and increments `completed_learners` through the store.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub num_modules: i64,
    pub completed_learners: i64,
}

/// A module inside a course. `module_order` is 1-based; 0 marks a module
/// that is off the sequential completion path.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseModule {
    pub id: i64,
    pub course_id: i64,
    pub module_order: i64,
    pub title: String,
}
