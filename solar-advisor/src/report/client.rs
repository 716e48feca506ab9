//! HTTP client for the generative text service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solar_model::chat::ChatMessage;
use std::time::{Duration, Instant};

use crate::config::AiServiceConfig;
use crate::error::ServiceError;
use crate::report::schema::Schema;

/// The one seam to the text-generation service. Report generation and chat
/// only talk to this trait, so tests can swap in a canned implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single prompt and get back the raw JSON text conforming to `schema`.
    async fn generate_json(&self, prompt: &str, schema: &Schema) -> Result<String, ServiceError>;

    /// Send an ordered chat transcript and get back the reply text.
    async fn chat(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
    ) -> Result<String, ServiceError>;
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Schema,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

fn json_request<'a>(prompt: &'a str, schema: &'a Schema) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part { text: prompt }],
        }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json",
            response_schema: schema,
        }),
    }
}

fn chat_request<'a>(
    system_instruction: &'a str,
    history: &'a [ChatMessage],
) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: history
            .iter()
            .map(|message| Content {
                role: Some(message.sender.service_role()),
                parts: vec![Part {
                    text: &message.text,
                }],
            })
            .collect(),
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part {
                text: system_instruction,
            }],
        }),
        generation_config: None,
    }
}

/// Concatenated text of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, ServiceError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ServiceError::EmptyResponse);
    }
    Ok(text)
}

/// `generateContent` client for Gemini-compatible endpoints.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a client from configuration, reading the API key from the
    /// environment variable the configuration names.
    pub fn from_config(config: &AiServiceConfig) -> Result<Self, ServiceError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ServiceError::MissingApiKey(config.api_key_env.clone()))?;

        Self::new(
            config.endpoint.as_str(),
            config.model.as_str(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    async fn send(&self, request: &GenerateContentRequest<'_>) -> Result<String, ServiceError> {
        let started = Instant::now();
        tracing::debug!(model = %self.model, contents = request.contents.len(), "sending generateContent request");

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "AI service rejected request");
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = extract_text(parsed)?;
        tracing::info!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_len = text.len(),
            "AI service replied"
        );
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_json(&self, prompt: &str, schema: &Schema) -> Result<String, ServiceError> {
        self.send(&json_request(prompt, schema)).await
    }

    async fn chat(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
    ) -> Result<String, ServiceError> {
        self.send(&chat_request(system_instruction, history)).await
    }
}
