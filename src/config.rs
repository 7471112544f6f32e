use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_HF_API_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_QA_MODEL: &str = "deepset/roberta-base-squad2";
pub const DEFAULT_EMBEDDING_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub inference: InferenceConfig,
    pub auth: AuthConfig,
    pub courses: CourseStoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Hosted inference token. `None` leaves the remote client uninitialized.
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub api_base_url: String,
    pub qa_model: String,
    pub embedding_model: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// API key -> user id.
    #[serde(skip_serializing)]
    pub api_keys: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseStoreConfig {
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            server: ServerConfig {
                host: non_blank("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: non_blank("PORT")
                    .and_then(|port| port.trim().parse().ok())
                    .unwrap_or(5000),
                log_level: non_blank("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
            inference: InferenceConfig {
                access_token: non_blank("HF_ACCESS_TOKEN").map(|token| token.trim().to_string()),
                api_base_url: non_blank("HF_API_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_HF_API_BASE_URL.to_string()),
                qa_model: non_blank("HF_QA_MODEL")
                    .unwrap_or_else(|| DEFAULT_QA_MODEL.to_string()),
                embedding_model: non_blank("HF_EMBEDDING_MODEL")
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            },
            auth: AuthConfig {
                api_keys: non_blank("API_KEYS")
                    .map(|raw| parse_api_keys(&raw))
                    .unwrap_or_default(),
            },
            courses: CourseStoreConfig {
                seed_path: non_blank("COURSES_SEED_PATH").map(PathBuf::from),
            },
        }
    }
}

// FORMAT: "key1=user1,key2=user2"; malformed pairs are skipped
fn parse_api_keys(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .filter_map(|pair| {
            let (key, user) = pair.split_once('=')?;
            let (key, user) = (key.trim(), user.trim());
            if key.is_empty() || user.is_empty() {
                tracing::warn!("Ignoring malformed API_KEYS entry");
                return None;
            }
            Some((key.to_string(), user.to_string()))
        })
        .collect()
}
