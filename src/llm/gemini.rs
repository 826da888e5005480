//! Google Gemini provider implementation

use super::types::{ContentBlock, LlmRequest, LlmResponse, MessageRole, Usage};
use super::{LlmError, LlmService};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini service implementation
pub struct GeminiService {
    client: Client,
    api_key: String,
    endpoint: String,
    model_id: String,
}

impl GeminiService {
    pub fn new(
        api_key: String,
        model: impl Into<String>,
        base_url: Option<&str>,
    ) -> Result<Self, LlmError> {
        let model_id = model.into();
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/'),
            model_id
        );

        // No explicit timeout: the network stack's own limits apply
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint,
            model_id,
        })
    }

    #[cfg(test)]
    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn translate_request(request: &LlmRequest) -> GeminiRequest {
        let system_instruction = if request.system.is_empty() {
            None
        } else {
            Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(
                    request
                        .system
                        .iter()
                        .map(|s| s.text.as_str())
                        .collect::<Vec<_>>()
                        .join("\n\n"),
                )],
            })
        };

        let contents = request
            .messages
            .iter()
            .filter_map(|msg| {
                let role = match msg.role {
                    MessageRole::User => "user",
                };
                let parts: Vec<GeminiPart> = msg
                    .content
                    .iter()
                    .filter_map(|block| match block {
                        ContentBlock::Text { text } => Some(GeminiPart::text(text.clone())),
                        // Reasoning is never sent back to the model
                        ContentBlock::Thinking { .. } => None,
                    })
                    .collect();
                (!parts.is_empty()).then(|| GeminiContent {
                    role: Some(role.to_string()),
                    parts,
                })
            })
            .collect();

        let generation_config = request
            .thinking_budget
            .map(|budget| GeminiGenerationConfig {
                thinking_config: GeminiThinkingConfig {
                    thinking_budget: budget,
                },
            });

        GeminiRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    /// Missing candidates or parts yield an empty response rather than an error:
    /// the service technically succeeded, it just said nothing.
    pub(crate) fn normalize_response(resp: GeminiResponse) -> LlmResponse {
        let usage = resp
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u64::from(u.prompt_token_count),
                output_tokens: u64::from(u.candidates_token_count),
                thinking_tokens: u64::from(u.thoughts_token_count),
            })
            .unwrap_or_default();

        let Some(candidate) = resp.candidates.into_iter().next() else {
            if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
                tracing::warn!(block_reason = %reason, "Gemini returned no candidates");
            }
            return LlmResponse {
                content: vec![],
                finish_reason: None,
                usage,
            };
        };

        let content = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| match (part.text, part.thought) {
                (Some(text), Some(true)) => Some(ContentBlock::Thinking { text }),
                (Some(text), _) if !text.is_empty() => Some(ContentBlock::Text { text }),
                _ => None,
            })
            .collect();

        LlmResponse {
            content,
            finish_reason: candidate.finish_reason,
            usage,
        }
    }
}

#[async_trait]
impl LlmService for GeminiService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let gemini_request = Self::translate_request(request);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {e}"))
                } else {
                    LlmError::unknown(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(classify_error_body(status.as_u16(), &body));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            LlmError::unknown(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        Ok(Self::normalize_response(gemini_response))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// Turn a non-success body into a classified error, preferring the API's own message
pub(crate) fn classify_error_body(status: u16, body: &str) -> LlmError {
    match serde_json::from_str::<GeminiErrorResponse>(body) {
        Ok(error_resp) => LlmError::from_status(status, error_resp.error.message),
        Err(_) => LlmError::unknown(format!("HTTP {status} error: {body}")),
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl GeminiPart {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            thought: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiGenerationConfig {
    pub thinking_config: GeminiThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiThinkingConfig {
    pub thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    pub usage_metadata: Option<GeminiUsageMetadata>,
    #[serde(default)]
    pub prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct GeminiUsageMetadata {
    pub prompt_token_count: u32,
    pub candidates_token_count: u32,
    pub thoughts_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiPromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}
