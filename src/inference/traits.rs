use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::Result;

/// Answer span returned by an extractive question-answering model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub answer: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

/// Remote inference operations used by the text generator.
///
/// Constructed once at startup and shared read-only between requests, so
/// implementations must be `Send + Sync`. Tests substitute their own
/// implementation to simulate remote success or failure.
#[async_trait]
pub trait InferenceClient: Send + Sync + Debug {
    /// Ask `question` against a fixed `context` paragraph.
    async fn question_answering(&self, question: &str, context: &str) -> Result<QuestionAnswer>;

    /// Sentence embedding of `input`.
    async fn feature_extraction(&self, input: &str) -> Result<Vec<f32>>;

    fn name(&self) -> &str;
}
