// ARCHITECTURE: API Module - HTTP surface of the course AI service
//
// ROUTES:
//   GET  /health                              - liveness and inference mode
//   POST /api/ai/generate-lesson              - lesson content (lesson.rs)
//   POST /api/ai/enhance/{course_id}          - suggestions for a course (enhance.rs, auth)
//   POST /api/ai/generate-course-structure    - course outline (course_structure.rs)
//
// Every handler answers `{success:true, data}`; errors go through AppError.

pub mod course_structure;
pub mod enhance;
pub mod health;
pub mod lesson;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    middleware,
    routing::{get, post},
};
use serde::Serialize;

use crate::courses::CourseRepository;
use crate::errors::AppError;
use crate::generation::TextGenerator;
use crate::security::{ApiKeyAuth, require_user};

/// Placeholder for request fields that were not supplied.
pub const UNDEFINED_FIELD: &str = "undefined";

/// Shared, read-only handler dependencies.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<TextGenerator>,
    pub courses: Arc<dyn CourseRepository>,
    pub auth: Arc<ApiKeyAuth>,
}

impl AppState {
    pub fn new(
        generator: TextGenerator,
        courses: Arc<dyn CourseRepository>,
        auth: ApiKeyAuth,
    ) -> Self {
        Self {
            generator: Arc::new(generator),
            courses,
            auth: Arc::new(auth),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/ai/enhance/{course_id}", post(enhance::enhance_content))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.auth),
            require_user,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/ai/generate-lesson", post(lesson::generate_lesson_content))
        .route(
            "/api/ai/generate-course-structure",
            post(course_structure::generate_course_structure),
        )
        .merge(protected)
        .with_state(state)
}

/// Malformed bodies are caller errors, reported before any generation happens.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

pub(crate) fn field_or_undefined(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNDEFINED_FIELD)
}
