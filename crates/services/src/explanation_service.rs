use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use dsa_core::model::Difficulty;
use reqwest::Client;
use serde::Serialize;

use crate::error::ExplanationError;

/// Cached when the endpoint answers without generated text.
pub const COULD_NOT_RETRIEVE: &str = "Could not retrieve explanation.";

/// Cached when the request or its decoding fails.
pub const FAILED_TO_FETCH: &str = "Failed to fetch explanation. Please try again.";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Prompt asking for a short conceptual explanation that does not solve the problem.
#[must_use]
pub fn build_prompt(name: &str, difficulty: Difficulty) -> String {
    format!(
        "Provide a concise, high-level explanation (around 2-3 sentences) of the core concept or \
         approach for the Data Structures and Algorithms problem named \"{name}\". Its difficulty \
         is \"{difficulty}\". Focus on explaining *what* the problem is about and the general \
         *idea* behind solving it, without giving away the direct solution."
    )
}

/// Remote text generation seam.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt.
    ///
    /// # Errors
    ///
    /// Returns `ExplanationError::EmptyResponse` when the reply carries no
    /// text, or `ExplanationError::Http` on transport/decoding failures.
    async fn generate(&self, prompt: &str) -> Result<String, ExplanationError>;
}

#[derive(Clone, Debug)]
pub struct ExplanationConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl ExplanationConfig {
    /// Read `DSA_AI_API_KEY`, `DSA_AI_BASE_URL` and `DSA_AI_MODEL`.
    ///
    /// A missing key is sent as an empty key.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = env::var("DSA_AI_API_KEY").unwrap_or_default();
        let base_url = env::var("DSA_AI_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = env::var("DSA_AI_MODEL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());
        Self {
            base_url,
            api_key: api_key.trim().to_string(),
            model,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: ExplanationConfig,
}

impl GeminiClient {
    #[must_use]
    pub fn new(config: ExplanationConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ExplanationError> {
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "explanation endpoint returned an error status");
        }

        // Any JSON body without generated text (error objects included) is an empty reply.
        let body: serde_json::Value = response.json().await?;
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(serde_json::Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
            .ok_or(ExplanationError::EmptyResponse)
    }
}

/// Fetches explanations and folds every failure into a displayable text.
#[derive(Clone)]
pub struct ExplanationService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl ExplanationService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_generator(Arc::new(GeminiClient::new(ExplanationConfig::from_env())))
    }

    #[must_use]
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { generator: None }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Request an explanation for one problem.
    ///
    /// # Errors
    ///
    /// Returns `ExplanationError` when disabled or when generation fails.
    pub async fn try_explain(
        &self,
        name: &str,
        difficulty: Difficulty,
    ) -> Result<String, ExplanationError> {
        let generator = self.generator.as_ref().ok_or(ExplanationError::Disabled)?;
        tracing::debug!(problem = name, %difficulty, "requesting explanation");
        generator.generate(&build_prompt(name, difficulty)).await
    }

    /// Request an explanation, returning the text to cache either way.
    pub async fn explain(&self, name: &str, difficulty: Difficulty) -> String {
        match self.try_explain(name, difficulty).await {
            Ok(text) => text,
            Err(ExplanationError::EmptyResponse) => {
                tracing::warn!(problem = name, "explanation response had no text");
                COULD_NOT_RETRIEVE.to_string()
            }
            Err(err) => {
                tracing::warn!(problem = name, error = %err, "explanation request failed");
                FAILED_TO_FETCH.to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}
