//! Anthropic API client with retry logic.
//!
//! This module provides:
//! - HTTP client for the Anthropic Messages API
//! - Retry logic with exponential backoff
//! - Request validation

#![allow(clippy::missing_errors_doc)]

use std::time::{Duration, Instant};

use reqwest::Client;

use super::config::ClientConfig;
use super::types::{ApiRequest, ApiResponse, Completion};
use crate::config::SecretString;
use crate::error::AnthropicError;

/// Maximum number of messages per request.
pub const MAX_MESSAGES: usize = 50;
/// Maximum content length per message (50KB).
pub const MAX_CONTENT_LENGTH: usize = 50_000;

/// Anthropic API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Seconds to wait on a 429 without a usable `retry-after` header.
const DEFAULT_RETRY_AFTER_SECONDS: u64 = 60;

/// Anthropic API client.
#[derive(Debug)]
pub struct AnthropicClient {
    client: Client,
    api_key: SecretString,
    config: ClientConfig,
}

impl AnthropicClient {
    /// Create a new Anthropic client.
    pub fn new(api_key: impl Into<SecretString>, config: ClientConfig) -> Result<Self, AnthropicError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client =
            Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| AnthropicError::Network {
                    message: format!("Failed to create HTTP client: {e}"),
                })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create a client with default configuration.
    pub fn with_api_key(api_key: impl Into<SecretString>) -> Result<Self, AnthropicError> {
        Self::new(api_key, ClientConfig::default())
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a completion request with retry logic.
    pub async fn complete(&self, request: ApiRequest) -> Result<Completion, AnthropicError> {
        Self::validate_request(&request)?;
        self.execute_with_retry(&request).await
    }

    /// Validate request size limits.
    fn validate_request(request: &ApiRequest) -> Result<(), AnthropicError> {
        if request.messages.is_empty() {
            return Err(AnthropicError::InvalidRequest {
                message: "Request has no messages".to_string(),
            });
        }

        if request.messages.len() > MAX_MESSAGES {
            return Err(AnthropicError::InvalidRequest {
                message: format!(
                    "Too many messages: {} > {MAX_MESSAGES}",
                    request.messages.len()
                ),
            });
        }

        for msg in &request.messages {
            let content_len = msg.content.len();
            if content_len > MAX_CONTENT_LENGTH {
                return Err(AnthropicError::InvalidRequest {
                    message: format!("Message too large: {content_len} > {MAX_CONTENT_LENGTH}"),
                });
            }
        }

        Ok(())
    }

    /// Execute request with retry logic.
    async fn execute_with_retry(&self, request: &ApiRequest) -> Result<Completion, AnthropicError> {
        let mut last_error = None;
        let mut delay = self.config.retry_delay_ms;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(attempt, delay_ms = delay, "Retrying Anthropic request");
                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay = delay.saturating_mul(2);
            }

            match self.execute_once(request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if !e.is_retryable() {
                        return Err(e);
                    }
                    tracing::warn!(error = %e, attempt, "Retryable error occurred");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AnthropicError::Network {
            message: "Unknown error after retries".to_string(),
        }))
    }

    /// Execute a single request attempt.
    async fn execute_once(&self, request: &ApiRequest) -> Result<Completion, AnthropicError> {
        let url = format!("{}/messages", self.config.base_url);
        let start = Instant::now();

        tracing::debug!(
            url = %url,
            model = %request.model,
            max_tokens = request.max_tokens,
            timeout_ms = self.config.timeout_ms,
            "Starting Anthropic API request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let elapsed_ms = elapsed_ms(start);
                if e.is_timeout() {
                    tracing::error!(
                        url = %url,
                        elapsed_ms,
                        timeout_ms = self.config.timeout_ms,
                        "Anthropic API request timed out"
                    );
                    AnthropicError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                } else {
                    tracing::error!(url = %url, elapsed_ms, error = %e, "Anthropic API request failed");
                    AnthropicError::Network {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = elapsed_ms(start),
            "Anthropic API response received"
        );

        match status.as_u16() {
            401 => return Err(AnthropicError::AuthenticationFailed),
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS);
                return Err(AnthropicError::RateLimited {
                    retry_after_seconds: retry_after,
                });
            }
            529 => {
                return Err(AnthropicError::ModelOverloaded {
                    model: request.model.clone(),
                })
            }
            _ => {}
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnthropicError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: ApiResponse =
            response
                .json()
                .await
                .map_err(|e| AnthropicError::UnexpectedResponse {
                    message: format!("Failed to parse response: {e}"),
                })?;

        Self::parse_response(&body)
    }

    /// Reduce an API response to its text.
    fn parse_response(response: &ApiResponse) -> Result<Completion, AnthropicError> {
        let text = response.text();
        if text.trim().is_empty() {
            return Err(AnthropicError::UnexpectedResponse {
                message: "No content in response".to_string(),
            });
        }

        Ok(Completion {
            text,
            usage: response.usage,
        })
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
