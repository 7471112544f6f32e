use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};

use super::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let inference = if state.generator.has_remote_client() {
        "remote"
    } else {
        "template"
    };

    let response = json!({
        "status": "healthy",
        "service": "course-ai-server",
        "version": env!("CARGO_PKG_VERSION"),
        "inference": inference,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    (StatusCode::OK, Json(response))
}
