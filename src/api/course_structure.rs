use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApiResponse, AppState, field_or_undefined, json_body};
use crate::errors::AppError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStructureRequest {
    pub topic: Option<String>,
    pub target_audience: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseStructure {
    pub title: String,
    pub description: String,
    pub modules: Vec<ModuleOutline>,
    /// Generated outline text, returned for inspection only.
    #[serde(rename = "rawAIResponse")]
    pub raw_ai_response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOutline {
    pub title: String,
    pub description: String,
    pub prerequisites: Vec<String>,
    pub difficulty: String,
    /// Minutes.
    pub estimated_time: u32,
    pub lessons: Vec<LessonOutline>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonOutline {
    pub topic: String,
    pub order: u32,
}

pub fn course_structure_prompt(topic: &str, target_audience: &str, difficulty: &str) -> String {
    format!(
        "Generate a complete course structure for a {difficulty} level course about {topic} designed for {target_audience}.\n\
         The structure should include a course title, description, and 3-5 modules.\n\
         For each module, include: title, description, prerequisites, difficulty level, estimated time in minutes, and 2-3 lessons with topics."
    )
}

/// Fixed two-module outline. The generated text is attached verbatim and is
/// not parsed into modules.
pub fn build_course_structure(
    topic: &str,
    target_audience: &str,
    difficulty: &str,
    generated: String,
) -> CourseStructure {
    let lesson = |name: String, order: u32| LessonOutline { topic: name, order };

    CourseStructure {
        title: format!("Complete {topic} Course for {target_audience}"),
        description: format!(
            "Comprehensive course on {topic} designed specifically for {target_audience} at {difficulty} level."
        ),
        modules: vec![
            ModuleOutline {
                title: format!("Introduction to {topic}"),
                description: format!("Learn the fundamentals of {topic}"),
                prerequisites: vec![],
                difficulty: difficulty.to_string(),
                estimated_time: 120,
                lessons: vec![
                    lesson(format!("{topic} Basics"), 1),
                    lesson(format!("{topic} History and Evolution"), 2),
                ],
                order: 1,
            },
            ModuleOutline {
                title: format!("Advanced {topic} Concepts"),
                description: format!("Deepen your understanding of {topic}"),
                prerequisites: vec![format!("Introduction to {topic}")],
                difficulty: difficulty.to_string(),
                estimated_time: 180,
                lessons: vec![
                    lesson(format!("{topic} in Practice"), 1),
                    lesson(format!("{topic} Case Studies"), 2),
                ],
                order: 2,
            },
        ],
        raw_ai_response: generated,
    }
}

pub async fn generate_course_structure(
    State(state): State<AppState>,
    payload: Result<Json<CourseStructureRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CourseStructure>>, AppError> {
    let request = json_body(payload)?;
    let request_id = Uuid::new_v4();
    let topic = field_or_undefined(&request.topic);
    let target_audience = field_or_undefined(&request.target_audience);
    let difficulty = field_or_undefined(&request.difficulty);

    tracing::info!(
        request_id = %request_id,
        topic = %topic,
        target_audience = %target_audience,
        difficulty = %difficulty,
        "Received request to generate course structure"
    );

    let generated = state
        .generator
        .generate_text(&course_structure_prompt(topic, target_audience, difficulty))
        .await;

    Ok(Json(ApiResponse::ok(build_course_structure(
        topic,
        target_audience,
        difficulty,
        generated,
    ))))
}
