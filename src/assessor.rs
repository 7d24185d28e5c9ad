//! End-to-end assessment: collaborators, engine, rendering.
//!
//! The [`Assessor`] owns the two optional collaborators and the clock. Both
//! collaborators are best effort: a disabled one is skipped quietly, a
//! failing or slow one is logged and the assessment continues on keyword
//! evidence alone.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::anthropic::{InsightBackend, DEFAULT_RETRY_DELAY_MS};
use crate::config::Config;
use crate::engine::{self, aggregate, Analysis, PersonalityReport};
use crate::error::{AssessmentError, CollaboratorError};
use crate::report::{render_markdown, ExportRecord, RenderContext};
use crate::sentiment::{HttpSentimentConfig, SentimentBackend};
use crate::session::AssessmentSession;
use crate::traits::{
    InsightGenerator, RandomSource, RealTimeProvider, SentimentEstimator, SentimentJudgment,
    TimeProvider,
};

/// Result of one assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Scores and classification.
    pub analysis: Analysis,
    /// Structured report.
    pub report: PersonalityReport,
    /// Report rendered as Markdown.
    pub markdown: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl Assessment {
    /// Export record for `session`.
    #[must_use]
    pub fn to_record(&self, session: &AssessmentSession) -> ExportRecord {
        ExportRecord::new(
            session.name.clone(),
            session.age.clone(),
            self.generated_at,
            session.questions.clone(),
            session.responses.slots().to_vec(),
            self.analysis.clone(),
            self.report.clone(),
            self.markdown.clone(),
        )
    }
}

/// Runs assessments against a fixed set of collaborators.
#[derive(Debug)]
pub struct Assessor<S, I, T> {
    sentiment: S,
    insight: I,
    time: T,
    timeout: Duration,
}

/// Time one collaborator call may take across all of its attempts.
///
/// Covers `max_retries + 1` attempts of `attempt_timeout_ms` each plus the
/// doubling backoff between them.
#[must_use]
pub fn call_budget_ms(attempt_timeout_ms: u64, max_retries: u32, retry_delay_ms: u64) -> u64 {
    let attempts = u64::from(max_retries).saturating_add(1);
    let backoff = 1_u64
        .checked_shl(max_retries)
        .map_or(u64::MAX, |factor| factor - 1);
    attempt_timeout_ms
        .saturating_mul(attempts)
        .saturating_add(retry_delay_ms.saturating_mul(backoff))
}

/// Assessor wired from configuration.
pub type ConfiguredAssessor = Assessor<SentimentBackend, InsightBackend, RealTimeProvider>;

impl ConfiguredAssessor {
    /// Build collaborators from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if an HTTP client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, CollaboratorError> {
        let sentiment = SentimentBackend::from_config(config)?;
        let insight = InsightBackend::from_config(config)?;
        tracing::info!(
            sentiment = sentiment.name(),
            insight = insight.name(),
            "Collaborators configured"
        );
        let retry_delay_ms = HttpSentimentConfig::default()
            .retry_delay_ms
            .max(DEFAULT_RETRY_DELAY_MS);
        Ok(Self::new(
            sentiment,
            insight,
            RealTimeProvider,
            call_budget_ms(config.request_timeout_ms, config.max_retries, retry_delay_ms),
        ))
    }
}

impl<S, I, T> Assessor<S, I, T>
where
    S: SentimentEstimator,
    I: InsightGenerator,
    T: TimeProvider,
{
    /// Create an assessor; each collaborator call, retries included, is
    /// capped at `timeout_ms`.
    #[must_use]
    pub const fn new(sentiment: S, insight: I, time: T, timeout_ms: u64) -> Self {
        Self {
            sentiment,
            insight,
            time,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Assess the answered responses of `session`.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidInput`] when the session has no
    /// non-blank answer, or the session's own validation error.
    pub async fn assess<R>(
        &self,
        session: &AssessmentSession,
        rng: &mut R,
    ) -> Result<Assessment, AssessmentError>
    where
        R: RandomSource + ?Sized,
    {
        session.validate()?;
        let responses = session.responses.answered();
        let judged: Vec<String> = responses
            .iter()
            .filter(|r| !r.trim().is_empty())
            .cloned()
            .collect();
        if judged.is_empty() {
            return Err(AssessmentError::invalid_input("no answered questions"));
        }

        tracing::info!(
            session_id = %session.id,
            answered = responses.len(),
            questions = session.questions.len(),
            "Assessment started"
        );

        let judgments = self.judge(&judged).await;
        // Insight only moves scores alongside sentiment.
        let insight = if judgments.is_some() {
            self.insight_for(&responses).await
        } else {
            None
        };

        let analysis = engine::analyze(&responses, judgments.as_deref(), insight.as_deref())?;
        let report =
            engine::generate_report(&analysis, &session.name, &session.age, &responses, rng);
        let generated_at = self.time.now();
        let markdown = render_markdown(
            &report,
            &RenderContext {
                name: &session.name,
                age: &session.age,
                generated_at,
            },
        );

        tracing::info!(
            session_id = %session.id,
            personality = %analysis.classification.personality,
            risk = %report.risk_level,
            "Assessment complete"
        );

        Ok(Assessment {
            analysis,
            report,
            markdown,
            generated_at,
        })
    }

    async fn judge(&self, responses: &[String]) -> Option<Vec<SentimentJudgment>> {
        let result = self
            .bounded(crate::sentiment::COLLABORATOR, self.sentiment.judge(responses))
            .await;
        settle(result)
    }

    async fn insight_for(&self, responses: &[String]) -> Option<String> {
        let text = aggregate(responses.iter().map(String::as_str));
        let result = self
            .bounded(
                crate::anthropic::COLLABORATOR,
                self.insight.generate_insight(&text),
            )
            .await;
        settle(result)
    }

    async fn bounded<F, V>(&self, collaborator: &str, call: F) -> Result<V, CollaboratorError>
    where
        F: Future<Output = Result<V, CollaboratorError>> + Send,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or_else(|_| {
                Err(CollaboratorError::Timeout {
                    collaborator: collaborator.to_string(),
                    timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                })
            })
    }
}

fn settle<V>(result: Result<V, CollaboratorError>) -> Option<V> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_disabled() => {
            tracing::debug!(error = %e, "Collaborator skipped");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Collaborator failed, continuing without it");
            None
        }
    }
}
