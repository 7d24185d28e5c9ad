//! Insight generation backed by the Messages API.

use async_trait::async_trait;

use super::client::AnthropicClient;
use super::config::{ClientConfig, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use super::types::{ApiMessage, ApiRequest};
use crate::config::Config;
use crate::error::{AnthropicError, CollaboratorError};
use crate::traits::InsightGenerator;

/// Collaborator name used in errors and logs.
pub const COLLABORATOR: &str = "insight";

/// Characters of aggregated text sent to the model.
pub const MAX_PROMPT_CHARS: usize = 500;

/// System prompt for insight requests.
pub const INSIGHT_SYSTEM_PROMPT: &str = "You are a professional psychologist conducting a personality assessment. Provide brief, insightful responses about personality traits based on user answers. Keep responses under 50 words and focus on positive insights.";

/// User prompt for `aggregated_text`, cut to [`MAX_PROMPT_CHARS`].
#[must_use]
pub fn insight_prompt(aggregated_text: &str) -> String {
    let excerpt: String = aggregated_text.chars().take(MAX_PROMPT_CHARS).collect();
    format!("Analyze these personality responses for traits: {excerpt}...")
}

fn to_collaborator_error(error: AnthropicError) -> CollaboratorError {
    match error {
        AnthropicError::Timeout { timeout_ms } => CollaboratorError::Timeout {
            collaborator: COLLABORATOR.into(),
            timeout_ms,
        },
        AnthropicError::UnexpectedResponse { message } => CollaboratorError::Malformed {
            collaborator: COLLABORATOR.into(),
            message,
        },
        other => CollaboratorError::Unavailable {
            collaborator: COLLABORATOR.into(),
            message: other.to_string(),
        },
    }
}

/// [`InsightGenerator`] calling Claude.
#[derive(Debug)]
pub struct AnthropicInsightGenerator {
    client: AnthropicClient,
    model: String,
}

impl AnthropicInsightGenerator {
    /// Wrap a client.
    #[must_use]
    pub fn new(client: AnthropicClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// The model requested.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl InsightGenerator for AnthropicInsightGenerator {
    async fn generate_insight(&self, aggregated_text: &str) -> Result<String, CollaboratorError> {
        let request = ApiRequest::new(
            &self.model,
            DEFAULT_MAX_TOKENS,
            vec![ApiMessage::user(insight_prompt(aggregated_text))],
        )
        .with_system(INSIGHT_SYSTEM_PROMPT)
        .with_temperature(DEFAULT_TEMPERATURE);

        let completion = self
            .client
            .complete(request)
            .await
            .map_err(to_collaborator_error)?;

        tracing::debug!(
            model = %self.model,
            output_tokens = completion.usage.output_tokens,
            "Insight generated"
        );
        Ok(completion.text)
    }
}

/// Generator that always reports itself disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledInsight;

#[async_trait]
impl InsightGenerator for DisabledInsight {
    async fn generate_insight(&self, _aggregated_text: &str) -> Result<String, CollaboratorError> {
        Err(CollaboratorError::Disabled {
            collaborator: COLLABORATOR.into(),
        })
    }
}

/// The generator selected by configuration.
#[derive(Debug)]
pub enum InsightBackend {
    /// Claude.
    Anthropic(AnthropicInsightGenerator),
    /// No insight.
    Disabled(DisabledInsight),
}

impl InsightBackend {
    /// Anthropic when `ANTHROPIC_API_KEY` is set, otherwise disabled.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Unavailable`] if the HTTP client cannot
    /// be created.
    pub fn from_config(config: &Config) -> Result<Self, CollaboratorError> {
        let Some(key) = &config.anthropic_api_key else {
            return Ok(Self::Disabled(DisabledInsight));
        };
        let client_config = ClientConfig::default()
            .with_timeout_ms(config.request_timeout_ms)
            .with_max_retries(config.max_retries);
        let client = AnthropicClient::new(key.clone(), client_config).map_err(to_collaborator_error)?;
        Ok(Self::Anthropic(AnthropicInsightGenerator::new(
            client,
            config.model.clone(),
        )))
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Anthropic(_) => "anthropic",
            Self::Disabled(_) => "none",
        }
    }
}

#[async_trait]
impl InsightGenerator for InsightBackend {
    async fn generate_insight(&self, aggregated_text: &str) -> Result<String, CollaboratorError> {
        match self {
            Self::Anthropic(generator) => generator.generate_insight(aggregated_text).await,
            Self::Disabled(generator) => generator.generate_insight(aggregated_text).await,
        }
    }
}
