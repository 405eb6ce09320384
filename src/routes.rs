// src/routes.rs

use axum::{
    Router, http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{progress, quiz};
use crate::state::AppState;

/// Assembles the main application router.
///
/// * Merges the quiz and progress sub-routers.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool + engine).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let quiz_routes = Router::new()
        .route("/instructor", post(quiz::generate_instructor_quiz))
        .route("/learner", post(quiz::generate_learner_quiz))
        .route("/submit", post(quiz::submit_response));

    let progress_routes = Router::new().route("/{user_id}/{course_id}", get(progress::get_progress));

    Router::new()
        .nest("/api/quiz", quiz_routes)
        .nest("/api/progress", progress_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
