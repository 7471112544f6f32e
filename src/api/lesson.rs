use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApiResponse, AppState, field_or_undefined, json_body};
use crate::errors::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateLessonRequest {
    pub topic: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub title: String,
    pub description: String,
    pub learning_outcomes: Vec<String>,
    pub key_concepts: Vec<String>,
    pub activities: Vec<String>,
}

pub fn lesson_prompt(topic: &str, difficulty: &str) -> String {
    format!(
        "Generate a structured lesson about {topic} at a {difficulty} difficulty level.\n\
         Include the following sections: title, description, learning outcomes, key concepts, and activities."
    )
}

/// Best-effort split of generated text into lesson fields.
///
/// Sections are separated by a blank line and read positionally: title,
/// description, learning outcomes, key concepts, activities. Each missing or
/// empty section gets its own default; blank input gets the full fallback set.
pub fn parse_lesson_content(generated: &str, topic: &str, difficulty: &str) -> LessonContent {
    if generated.trim().is_empty() {
        return fallback_lesson_content(topic, difficulty);
    }

    let sections: Vec<&str> = generated.split("\n\n").collect();

    let text_section = |index: usize| {
        sections
            .get(index)
            .filter(|section| !section.is_empty())
            .map(|section| section.to_string())
    };

    let list_section = |index: usize| {
        sections
            .get(index)
            .map(|section| {
                section
                    .split('\n')
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|items| !items.is_empty())
    };

    LessonContent {
        title: text_section(0).unwrap_or_else(|| format!("Introduction to {topic}")),
        description: text_section(1).unwrap_or_else(|| {
            format!("This lesson covers the fundamentals of {topic} at a {difficulty} level.")
        }),
        learning_outcomes: list_section(2).unwrap_or_else(|| {
            vec![
                format!("Understand the basic concepts of {topic}"),
                format!("Apply {topic} principles to solve problems"),
            ]
        }),
        key_concepts: list_section(3).unwrap_or_else(|| {
            vec![
                format!("Core principles of {topic}"),
                format!("{topic} best practices"),
            ]
        }),
        activities: list_section(4).unwrap_or_else(|| {
            vec![
                format!("Interactive quiz on {topic}"),
                format!("Hands-on project implementing {topic}"),
            ]
        }),
    }
}

pub fn fallback_lesson_content(topic: &str, difficulty: &str) -> LessonContent {
    LessonContent {
        title: format!("Introduction to {topic}"),
        description: format!("This lesson covers the fundamentals of {topic} at a {difficulty} level."),
        learning_outcomes: vec![
            format!("Understand the basic concepts of {topic}"),
            format!("Apply {topic} principles to solve problems"),
            format!("Analyze and evaluate {topic} implementations"),
        ],
        key_concepts: vec![
            format!("Core principles of {topic}"),
            format!("{topic} best practices"),
            format!("Modern approaches to {topic}"),
        ],
        activities: vec![
            format!("Interactive quiz on {topic}"),
            format!("Hands-on project implementing {topic}"),
            format!("Group discussion about {topic} applications"),
        ],
    }
}

pub async fn generate_lesson_content(
    State(state): State<AppState>,
    payload: Result<Json<GenerateLessonRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LessonContent>>, AppError> {
    let request = json_body(payload)?;
    let request_id = Uuid::new_v4();
    let topic = field_or_undefined(&request.topic);
    let difficulty = field_or_undefined(&request.difficulty);

    tracing::info!(
        request_id = %request_id,
        topic = %topic,
        difficulty = %difficulty,
        "Received lesson content request"
    );

    let generated = state
        .generator
        .generate_text(&lesson_prompt(topic, difficulty))
        .await;
    let content = parse_lesson_content(&generated, topic, difficulty);

    tracing::info!(request_id = %request_id, "Lesson content generated");

    Ok(Json(ApiResponse::ok(content)))
}
