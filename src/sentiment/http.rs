//! Sentiment estimator backed by a hosted text-classification endpoint.
//!
//! Speaks the Hugging Face inference format:
//!
//! ```text
//! POST {url}            {"inputs": ["first answer", "second answer"]}
//! 200 OK                [[{"label": "POSITIVE", "score": 0.98}, ...], ...]
//! ```
//!
//! A flat `[{"label": ..., "score": ...}, ...]` body (one entry per input)
//! is accepted too. When an input has several candidate labels the highest
//! scoring one is kept.

#![allow(clippy::missing_errors_doc)]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::SecretString;
use crate::error::CollaboratorError;
use crate::traits::{SentimentEstimator, SentimentJudgment, SentimentLabel};

use super::COLLABORATOR;

/// Characters of each response sent to the model.
pub const MAX_INPUT_CHARS: usize = 512;

/// Default endpoint: DistilBERT fine-tuned on SST-2.
pub const DEFAULT_SENTIMENT_URL: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";

/// Settings for [`HttpSentimentEstimator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSentimentConfig {
    /// Endpoint URL.
    pub url: String,
    /// Bearer token, if the endpoint needs one.
    pub token: Option<SecretString>,
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// Retries on 429/5xx and network errors.
    pub max_retries: u32,
    /// Initial backoff, doubled per retry.
    pub retry_delay_ms: u64,
}

impl Default for HttpSentimentConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SENTIMENT_URL.to_string(),
            token: None,
            timeout_ms: 30_000,
            max_retries: 3,
            retry_delay_ms: 1_000,
        }
    }
}

impl HttpSentimentConfig {
    /// Set the endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the retry count.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the initial retry delay.
    #[must_use]
    pub const fn with_retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a [String],
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<RawLabel>>),
    Flat(Vec<RawLabel>),
}

/// Outcome of a single attempt; `Retry` carries the error to report if
/// retries run out.
enum Attempt {
    Done(Result<Vec<SentimentJudgment>, CollaboratorError>),
    Retry(CollaboratorError),
}

/// Hosted sentiment classifier.
#[derive(Debug)]
pub struct HttpSentimentEstimator {
    client: Client,
    config: HttpSentimentConfig,
}

impl HttpSentimentEstimator {
    /// Create an estimator.
    pub fn new(config: HttpSentimentConfig) -> Result<Self, CollaboratorError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| unavailable(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Endpoint in use.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }

    async fn attempt(&self, inputs: &[String]) -> Attempt {
        let mut request = self
            .client
            .post(&self.config.url)
            .json(&ClassifyRequest { inputs });
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token.expose());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Attempt::Retry(CollaboratorError::Timeout {
                    collaborator: COLLABORATOR.into(),
                    timeout_ms: self.config.timeout_ms,
                })
            }
            Err(e) => return Attempt::Retry(unavailable(e.to_string())),
        };

        let status = response.status();
        if status.as_u16() == 429 || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Attempt::Retry(unavailable(format!("status {status}: {body}")));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Attempt::Done(Err(unavailable(format!("status {status}: {body}"))));
        }

        let body: ClassifyResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => return Attempt::Done(Err(malformed(format!("failed to parse response: {e}")))),
        };
        Attempt::Done(to_judgments(body, inputs.len()))
    }
}

fn unavailable(message: impl Into<String>) -> CollaboratorError {
    CollaboratorError::Unavailable {
        collaborator: COLLABORATOR.into(),
        message: message.into(),
    }
}

fn malformed(message: impl Into<String>) -> CollaboratorError {
    CollaboratorError::Malformed {
        collaborator: COLLABORATOR.into(),
        message: message.into(),
    }
}

fn truncate_input(text: &str) -> String {
    text.chars().take(MAX_INPUT_CHARS).collect()
}

fn to_judgment(raw: &RawLabel) -> Result<SentimentJudgment, CollaboratorError> {
    let label = SentimentLabel::parse(&raw.label)
        .ok_or_else(|| malformed(format!("unknown label {:?}", raw.label)))?;
    let judgment = SentimentJudgment::new(label, raw.score);
    if judgment.is_well_formed() {
        Ok(judgment)
    } else {
        Err(malformed(format!("score {} outside [0, 1]", raw.score)))
    }
}

fn to_judgments(
    body: ClassifyResponse,
    expected: usize,
) -> Result<Vec<SentimentJudgment>, CollaboratorError> {
    let judgments = match body {
        ClassifyResponse::Flat(items) => items.iter().map(to_judgment).collect::<Result<Vec<_>, _>>()?,
        ClassifyResponse::Nested(groups) => groups
            .iter()
            .map(|candidates| {
                candidates
                    .iter()
                    .max_by(|a, b| a.score.total_cmp(&b.score))
                    .ok_or_else(|| malformed("empty candidate list"))
                    .and_then(to_judgment)
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    if judgments.len() != expected {
        return Err(malformed(format!(
            "expected {expected} judgments, got {}",
            judgments.len()
        )));
    }
    Ok(judgments)
}

#[async_trait]
impl SentimentEstimator for HttpSentimentEstimator {
    async fn judge(&self, responses: &[String]) -> Result<Vec<SentimentJudgment>, CollaboratorError> {
        if responses.is_empty() {
            return Ok(Vec::new());
        }
        let inputs: Vec<String> = responses.iter().map(|r| truncate_input(r)).collect();

        let mut delay = self.config.retry_delay_ms;
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(attempt, delay_ms = delay, "Retrying sentiment request");
                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay = delay.saturating_mul(2);
            }

            match self.attempt(&inputs).await {
                Attempt::Done(result) => return result,
                Attempt::Retry(e) => {
                    tracing::warn!(error = %e, attempt, "Retryable sentiment error");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| unavailable("unknown error after retries")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn estimator(server: &MockServer, retries: u32) -> HttpSentimentEstimator {
        let config = HttpSentimentConfig::default()
            .with_url(format!("{}/classify", server.uri()))
            .with_token(SecretString::new("hf-test"))
            .with_timeout_ms(5_000)
            .with_max_retries(retries)
            .with_retry_delay_ms(1);
        HttpSentimentEstimator::new(config).unwrap()
    }

    fn responses(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_nested_response_keeps_top_label() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify"))
            .and(header("authorization", "Bearer hf-test"))
            .and(body_json(json!({"inputs": ["great day", "awful day"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                [{"label": "POSITIVE", "score": 0.98}, {"label": "NEGATIVE", "score": 0.02}],
                [{"label": "POSITIVE", "score": 0.003}, {"label": "NEGATIVE", "score": 0.997}]
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let judgments = estimator(&server, 0)
            .judge(&responses(&["great day", "awful day"]))
            .await
            .unwrap();
        assert_eq!(
            judgments,
            vec![
                SentimentJudgment::positive(0.98),
                SentimentJudgment::negative(0.997)
            ]
        );
    }

    #[tokio::test]
    async fn test_flat_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"label": "LABEL_0", "score": 0.7}])),
            )
            .mount(&server)
            .await;

        let judgments = estimator(&server, 0).judge(&responses(&["meh"])).await.unwrap();
        assert_eq!(judgments, vec![SentimentJudgment::negative(0.7)]);
    }

    #[tokio::test]
    async fn test_inputs_are_truncated() {
        let server = MockServer::start().await;
        let long = "a".repeat(MAX_INPUT_CHARS + 100);
        Mock::given(method("POST"))
            .and(body_json(json!({"inputs": ["a".repeat(MAX_INPUT_CHARS)]})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([[{"label": "POSITIVE", "score": 0.5}]])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = estimator(&server, 0).judge(&[long]).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_count_mismatch_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([[{"label": "POSITIVE", "score": 0.9}]])),
            )
            .mount(&server)
            .await;

        let err = estimator(&server, 0)
            .judge(&responses(&["one", "two"]))
            .await
            .unwrap_err();
        assert!(matches!(err, CollaboratorError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_unknown_label_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"label": "NEUTRAL", "score": 0.9}])),
            )
            .mount(&server)
            .await;

        let err = estimator(&server, 0).judge(&responses(&["x"])).await.unwrap_err();
        assert!(matches!(err, CollaboratorError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_model_loading_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("loading"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([[{"label": "POSITIVE", "score": 0.9}]])),
            )
            .mount(&server)
            .await;

        let judgments = estimator(&server, 2).judge(&responses(&["ok"])).await.unwrap();
        assert_eq!(judgments.len(), 1);
    }

    #[tokio::test]
    async fn test_client_error_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .expect(1)
            .mount(&server)
            .await;

        let err = estimator(&server, 3).judge(&responses(&["x"])).await.unwrap_err();
        assert!(matches!(err, CollaboratorError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_empty_input_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let judgments = estimator(&server, 0).judge(&[]).await.unwrap();
        assert!(judgments.is_empty());
    }
}
