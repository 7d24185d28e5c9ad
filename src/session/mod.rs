//! Assessment session bookkeeping.
//!
//! An [`AssessmentSession`] holds everything the engine needs for one run:
//! who is answering, the questions drawn for them and their answers. It is
//! passed explicitly to the assessor; there is no ambient session state.

mod intake;
mod interview;
mod questions;

pub use intake::{
    follow_up_prompt, validate_intake, FollowUpTopic, Intake, MAX_AGE, MIN_AGE, SHORT_ANSWER_WORDS,
};
pub use interview::Interview;
pub use questions::{daily_questions, date_seed, DAILY_QUESTION_COUNT, QUESTION_BANK};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AssessmentError;

/// Answers indexed by question position.
///
/// Each slot is either unanswered or holds exactly one current answer;
/// answering again overwrites. Serialized as a JSON array with `null` for
/// unanswered slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    slots: Vec<Option<String>>,
}

impl ResponseSet {
    /// Empty set sized for `question_count` questions.
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            slots: vec![None; question_count],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Record (or overwrite) the answer for question `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::QuestionOutOfRange`] for an index past
    /// the last question.
    pub fn answer(&mut self, index: usize, text: impl Into<String>) -> Result<(), AssessmentError> {
        let count = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(AssessmentError::QuestionOutOfRange { index, count })?;
        *slot = Some(text.into());
        Ok(())
    }

    /// Current answer for question `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(Option::as_deref)
    }

    /// Every slot in question order, `None` where unanswered.
    #[must_use]
    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Answered responses in question order.
    #[must_use]
    pub fn answered(&self) -> Vec<String> {
        self.slots.iter().flatten().cloned().collect()
    }

    /// Number of answered slots.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether every slot has an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

/// One respondent's assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSession {
    /// Session identifier.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Respondent name.
    pub name: String,
    /// Respondent age, as entered.
    pub age: String,
    /// When the session started.
    #[serde(default = "Utc::now")]
    pub started_at: DateTime<Utc>,
    /// Questions in the order asked.
    pub questions: Vec<String>,
    /// Answers, one slot per question.
    pub responses: ResponseSet,
}

impl AssessmentSession {
    /// Start a session for a validated intake.
    #[must_use]
    pub fn new(intake: Intake, questions: Vec<String>, started_at: DateTime<Utc>) -> Self {
        let responses = ResponseSet::new(questions.len());
        Self {
            id: Uuid::new_v4(),
            name: intake.name,
            age: intake.age,
            started_at,
            questions,
            responses,
        }
    }

    /// Record an answer.
    ///
    /// # Errors
    ///
    /// See [`ResponseSet::answer`].
    pub fn record(&mut self, index: usize, text: impl Into<String>) -> Result<(), AssessmentError> {
        self.responses.answer(index, text)
    }

    /// Check invariants of a session loaded from outside.
    ///
    /// # Errors
    ///
    /// Returns [`AssessmentError::InvalidIntake`] when the name or age would
    /// fail [`validate_intake`] and [`AssessmentError::QuestionOutOfRange`]
    /// when there are more answers than questions.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        validate_intake(&self.name, &self.age)?;
        if self.responses.len() > self.questions.len() {
            return Err(AssessmentError::QuestionOutOfRange {
                index: self.responses.len() - 1,
                count: self.questions.len(),
            });
        }
        Ok(())
    }
}
