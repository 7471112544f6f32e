use axum::{
    Extension,
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::{ApiResponse, AppState};
use crate::courses::Lesson;
use crate::errors::AppError;
use crate::security::RequestUser;

pub const ENHANCEMENT_MESSAGE: &str = "Content enhancement suggestions generated";

/// Suggestion for one lesson. Only the first lesson of the first module is
/// ever addressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementSuggestion {
    pub module_index: usize,
    pub lesson_index: usize,
    pub suggested_improvements: String,
    #[serde(rename = "rawAIResponse")]
    pub raw_ai_response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancementData {
    pub suggestions: Vec<EnhancementSuggestion>,
}

pub fn enhancement_prompt(lesson: &Lesson) -> String {
    format!(
        "Analyze this lesson on \"{}\" with description \"{}\".\n\
         Provide 3 specific improvements that could make this lesson more engaging and effective.\n\
         Also suggest 2 additional resources (like articles or videos) that would complement this lesson.",
        lesson.title, lesson.content
    )
}

pub async fn enhance_content(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Extension(user): Extension<RequestUser>,
) -> Result<Json<ApiResponse<EnhancementData>>, AppError> {
    let request_id = Uuid::new_v4();
    tracing::info!(
        request_id = %request_id,
        course_id = %course_id,
        user_id = %user.id,
        "Received content enhancement request"
    );

    let course = state
        .courses
        .find_by_id(&course_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course not found with id of {course_id}")))?;

    if !course.is_owned_by(&user.id) {
        return Err(AppError::Unauthorized(format!(
            "User {} is not authorized to enhance this course",
            user.id
        )));
    }

    let lesson = course
        .first_lesson()
        .ok_or_else(|| AppError::BadRequest("No content to enhance in this course".to_string()))?;

    let generated = state.generator.generate_text(&enhancement_prompt(lesson)).await;

    let suggestion = EnhancementSuggestion {
        module_index: 0,
        lesson_index: 0,
        suggested_improvements: generated.clone(),
        raw_ai_response: generated,
    };

    tracing::info!(request_id = %request_id, "Enhancement suggestions generated");

    Ok(Json(
        ApiResponse::ok(EnhancementData {
            suggestions: vec![suggestion],
        })
        .with_message(ENHANCEMENT_MESSAGE),
    ))
}
