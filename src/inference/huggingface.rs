// ================================================================================================
// HOSTED INFERENCE CLIENT - HUGGING FACE INFERENCE API
// ================================================================================================
//
// Thin reqwest wrapper over `POST {base_url}/models/{model}`.
// No client-side timeout or retry: latency is bounded by the remote side.
//
// ================================================================================================

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

use super::traits::{InferenceClient, QuestionAnswer};
use crate::config::InferenceConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    http_client: HttpClient,
    base_url: String,
    access_token: String,
    qa_model: String,
    embedding_model: String,
}

/// Feature extraction returns one vector per input sentence, or one per
/// token for models without a pooling layer.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeatureExtractionOutput {
    Pooled(Vec<f32>),
    PerToken(Vec<Vec<f32>>),
}

impl HuggingFaceClient {
    pub fn new(config: &InferenceConfig, access_token: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("course-ai-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            qa_model: config.qa_model.clone(),
            embedding_model: config.embedding_model.clone(),
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    async fn post_model<T: DeserializeOwned>(&self, model: &str, body: &Value) -> Result<T> {
        let url = self.model_url(model);
        debug!(model = %model, "Calling hosted inference API");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::api(status, error_message(status, &text)));
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::InvalidResponse(format!("{model}: {e}")))
    }
}

// Error bodies look like {"error": "..."}; fall back to the raw text.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string())
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn question_answering(&self, question: &str, context: &str) -> Result<QuestionAnswer> {
        let body = json!({
            "inputs": {
                "question": question,
                "context": context,
            }
        });
        self.post_model(&self.qa_model, &body).await
    }

    async fn feature_extraction(&self, input: &str) -> Result<Vec<f32>> {
        let body = json!({ "inputs": input });
        let output: FeatureExtractionOutput = self.post_model(&self.embedding_model, &body).await?;

        match output {
            FeatureExtractionOutput::Pooled(vector) => Ok(vector),
            FeatureExtractionOutput::PerToken(rows) => rows
                .into_iter()
                .next()
                .ok_or_else(|| Error::InvalidResponse("empty embedding".to_string())),
        }
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}
