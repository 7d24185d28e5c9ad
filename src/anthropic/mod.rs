//! Anthropic API client.
//!
//! This module provides:
//! - Direct Claude API integration for the Messages endpoint
//! - Retry logic with exponential backoff
//! - [`InsightBackend`], the [`InsightGenerator`](crate::traits::InsightGenerator)
//!   used by the assessor
//!
//! # Example
//!
//! ```
//! use persona_assessment::anthropic::{insight_prompt, ApiMessage, ApiRequest, DEFAULT_MODEL};
//!
//! let request = ApiRequest::new(DEFAULT_MODEL, 200, vec![ApiMessage::user(insight_prompt("i plan"))]);
//! assert_eq!(request.messages.len(), 1);
//! assert!(request.messages[0].content.starts_with("Analyze these personality responses"));
//! ```

mod client;
mod config;
mod insight;
mod types;

pub use client::{AnthropicClient, MAX_CONTENT_LENGTH, MAX_MESSAGES};
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_RETRY_DELAY_MS, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_MS,
};
pub use insight::{
    insight_prompt, AnthropicInsightGenerator, DisabledInsight, InsightBackend, COLLABORATOR,
    INSIGHT_SYSTEM_PROMPT, MAX_PROMPT_CHARS,
};
pub use types::{ApiMessage, ApiRequest, ApiResponse, ApiUsage, Completion, ContentBlock};
