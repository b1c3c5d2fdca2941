use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{build_prompt, require_content, Summarizer, SummarizerConfig};
use crate::error::{NotesError, Result};

/// Google Gemini `generateContent` client.
pub struct GeminiSummarizer {
    client: Client,
    config: SummarizerConfig,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
    status: Option<String>,
}

impl GeminiSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                NotesError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!(
            model = %config.model,
            base_url = %config.base_url,
            timeout_secs = config.timeout_seconds,
            "Initializing Gemini summarizer"
        );

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(SummarizerConfig::from_env())
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, content: &str) -> Result<String> {
        let content = require_content(Some(content))?;

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| NotesError::Provider("API key not configured".to_string()))?;

        let prompt = build_prompt(content);
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            content_len = content.len(),
            "Requesting summary"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<GeminiErrorResponse>(&body) {
                Ok(parsed) => match parsed.error.status {
                    Some(kind) => format!("{} ({})", parsed.error.message, kind),
                    None => parsed.error.message,
                },
                Err(_) if body.is_empty() => "no response body".to_string(),
                Err(_) => body,
            };
            tracing::warn!(status = %status, error = %message, "Gemini request failed");
            return Err(NotesError::Provider(format!(
                "Gemini API error {}: {}",
                status.as_u16(),
                message
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = parsed
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!("prompt blocked: {}", r))
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(NotesError::Provider(format!(
                "Gemini returned no summary ({})",
                reason
            )));
        }

        Ok(text)
    }
}
