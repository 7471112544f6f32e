// ARCHITECTURE: Text Generation Adapter
//
// Strategy chain for one prompt:
//   1. no client configured      -> template output
//   2. question answering        -> answer text
//   3. QA failed: embedding call -> template output (embedding is not used)
//   4. any error in 2-3          -> template output
//
// `generate_text` is the only place remote failures are absorbed. Callers
// always receive text and never learn whether it came from the remote model.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::mock::generate_mock_content;
use crate::error::{Error, Result};
use crate::inference::InferenceClient;

/// Background paragraph the question-answering model extracts answers from.
pub const COURSE_CREATION_CONTEXT: &str = "Course creation involves developing educational content, learning objectives, assessments, and structured lessons. Effective courses should be engaging, well-organized, and provide clear learning outcomes. Topics can include programming, business, science, arts, and various professional skills.";

#[derive(Debug, Clone, Default)]
pub struct TextGenerator {
    client: Option<Arc<dyn InferenceClient>>,
}

impl TextGenerator {
    pub fn new(client: Option<Arc<dyn InferenceClient>>) -> Self {
        Self { client }
    }

    /// Generator that never calls a remote service.
    pub fn offline() -> Self {
        Self { client: None }
    }

    pub fn has_remote_client(&self) -> bool {
        self.client.is_some()
    }

    /// Resolve `prompt` to text. Never fails.
    pub async fn generate_text(&self, prompt: &str) -> String {
        let Some(client) = self.client.as_deref() else {
            debug!("Inference client not initialized, using template output");
            return generate_mock_content(prompt);
        };

        match Self::generate_remote(client, prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!(client = client.name(), "Error generating text: {}", e);
                info!("Using fallback response due to API error");
                generate_mock_content(prompt)
            }
        }
    }

    async fn generate_remote(client: &dyn InferenceClient, prompt: &str) -> Result<String> {
        match client
            .question_answering(prompt, COURSE_CREATION_CONTEXT)
            .await
        {
            Ok(response) => Ok(response.answer),
            Err(qa_error) => {
                warn!(
                    "Question answering failed, trying feature extraction approach: {}",
                    qa_error
                );

                let embedding = client.feature_extraction(prompt).await?;
                if embedding.is_empty() {
                    return Err(Error::InvalidResponse("empty embedding".to_string()));
                }
                debug!(dimension = embedding.len(), "Feature extraction succeeded");

                Ok(generate_mock_content(prompt))
            }
        }
    }
}
