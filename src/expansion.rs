//! Prompt expansion client
//!
//! Wraps exactly one outbound completion call per expansion: the fixed
//! system instruction plus the caller's input, no retries, no caching.

use crate::config::Config;
use crate::llm::{GeminiService, LlmError, LlmRequest, LlmService, LoggingService};
use crate::system_instruction::SYSTEM_INSTRUCTION;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Returned when the service succeeds but says nothing
pub const EMPTY_EXPANSION_FALLBACK: &str = "Failed to expand prompt.";

const MISSING_KEY_MESSAGE: &str = "API Key is not configured.";

#[derive(Debug, Clone, Error)]
pub enum ExpansionError {
    /// No credential available; a setup fault, not an input fault
    #[error("{0}")]
    Configuration(String),
    /// Network or service failure; carries the upstream message verbatim
    #[error(transparent)]
    Upstream(#[from] LlmError),
}

/// Turns a short description into an expanded prompt
#[async_trait]
pub trait Expander: Send + Sync {
    async fn expand(&self, input: &str) -> Result<String, ExpansionError>;
}

#[async_trait]
impl<T: Expander + ?Sized> Expander for Arc<T> {
    async fn expand(&self, input: &str) -> Result<String, ExpansionError> {
        (**self).expand(input).await
    }
}

/// Production expander backed by an LLM service
pub struct ExpansionClient {
    service: Option<Arc<dyn LlmService>>,
    thinking_budget: u32,
}

impl ExpansionClient {
    pub fn new(service: Option<Arc<dyn LlmService>>, thinking_budget: u32) -> Self {
        Self {
            service,
            thinking_budget,
        }
    }

    /// Builds the Gemini-backed client. A missing key yields a client whose
    /// every call fails with a configuration error.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let service = match &config.api_key {
            Some(key) => {
                let gemini =
                    GeminiService::new(key.clone(), config.model.clone(), config.base_url.as_deref())?;
                let logged: Arc<dyn LlmService> = Arc::new(LoggingService::new(Arc::new(gemini)));
                Some(logged)
            }
            None => {
                tracing::warn!("No API key configured. Set GEMINI_API_KEY or API_KEY.");
                None
            }
        };
        Ok(Self::new(service, config.thinking_budget))
    }

    pub fn build_request(&self, input: &str) -> LlmRequest {
        LlmRequest::single_turn(SYSTEM_INSTRUCTION, input).with_thinking_budget(self.thinking_budget)
    }
}

#[async_trait]
impl Expander for ExpansionClient {
    async fn expand(&self, input: &str) -> Result<String, ExpansionError> {
        let service = self
            .service
            .as_ref()
            .ok_or_else(|| ExpansionError::Configuration(MISSING_KEY_MESSAGE.to_string()))?;

        let response = service.complete(&self.build_request(input)).await?;
        let text = response.text();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            tracing::warn!(model = %service.model_id(), "Empty expansion payload, using fallback");
            return Ok(EMPTY_EXPANSION_FALLBACK.to_string());
        }
        Ok(trimmed.to_string())
    }
}
