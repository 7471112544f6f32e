pub mod huggingface;
pub mod traits;

pub use huggingface::HuggingFaceClient;
pub use traits::{InferenceClient, QuestionAnswer};

use std::sync::Arc;

use crate::config::InferenceConfig;

/// Create the process-wide inference client.
///
/// Returns `None` when no access token is configured or the HTTP client
/// cannot be built; the text generator then serves template output only.
pub fn build_inference_client(config: &InferenceConfig) -> Option<Arc<dyn InferenceClient>> {
    let token = config.access_token.as_deref()?;

    match HuggingFaceClient::new(config, token) {
        Ok(client) => {
            tracing::info!(
                base_url = %config.api_base_url,
                qa_model = %config.qa_model,
                embedding_model = %config.embedding_model,
                "Hugging Face client initialized successfully"
            );
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::error!("Error initializing Hugging Face client: {}", e);
            None
        }
    }
}
