//! Intake validation and follow-up prompts for short answers.

use crate::error::AssessmentError;

/// Youngest accepted age.
pub const MIN_AGE: u32 = 13;

/// Oldest accepted age.
pub const MAX_AGE: u32 = 120;

/// Answers with at most this many words get a follow-up prompt.
pub const SHORT_ANSWER_WORDS: usize = 3;

/// Validated intake fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intake {
    /// Trimmed name.
    pub name: String,
    /// Trimmed age text.
    pub age: String,
}

/// Validate the name and age entered before the questions.
///
/// # Errors
///
/// Returns [`AssessmentError::InvalidIntake`] for a blank name, a blank or
/// non-numeric age, or an age outside `13..=120`.
pub fn validate_intake(name: &str, age: &str) -> Result<Intake, AssessmentError> {
    let name = name.trim();
    let age = age.trim();

    if name.is_empty() {
        return Err(invalid("name", "name is required"));
    }
    if age.is_empty() {
        return Err(invalid("age", "age is required"));
    }

    let parsed: u32 = age
        .parse()
        .map_err(|_| invalid("age", "please enter a valid age (numbers only)"))?;
    if !(MIN_AGE..=MAX_AGE).contains(&parsed) {
        return Err(invalid(
            "age",
            format!("please enter a valid age between {MIN_AGE} and {MAX_AGE}"),
        ));
    }

    Ok(Intake {
        name: name.to_string(),
        age: age.to_string(),
    })
}

fn invalid(field: &str, reason: impl Into<String>) -> AssessmentError {
    AssessmentError::InvalidIntake {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Topic of a question, used to pick a follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpTopic {
    /// Stress and pressure.
    Stress,
    /// Decision making.
    Decision,
    /// Social situations.
    Social,
    /// Challenges and problems.
    Challenge,
    /// Goals and plans.
    Goals,
    /// Anything else.
    Default,
}

impl FollowUpTopic {
    /// Classify a question by its wording. Earlier topics win.
    #[must_use]
    pub fn of_question(question: &str) -> Self {
        let q = question.to_lowercase();
        let any = |words: &[&str]| words.iter().any(|w| q.contains(w));
        if any(&["stress", "pressure", "overwhelm"]) {
            Self::Stress
        } else if any(&["decision", "choose", "decide"]) {
            Self::Decision
        } else if any(&["social", "people", "friend", "party"]) {
            Self::Social
        } else if any(&["challenge", "difficult", "problem"]) {
            Self::Challenge
        } else if any(&["goal", "ambition", "future", "plan"]) {
            Self::Goals
        } else {
            Self::Default
        }
    }

    /// Follow-up question for this topic.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Stress => "Can you tell me more about what specific techniques work best for you?",
            Self::Decision => "What factors do you usually consider when making this type of decision?",
            Self::Social => "How do you feel in those situations? What do you enjoy most about them?",
            Self::Challenge => "Can you share a specific example of how you handled this?",
            Self::Goals => "What motivates you most when working toward this type of goal?",
            Self::Default => "Can you elaborate a bit more on your thoughts about this?",
        }
    }
}

/// Follow-up prompt for a short answer, `None` when the answer is long enough.
#[must_use]
pub fn follow_up_prompt(question: &str, answer: &str) -> Option<&'static str> {
    if answer.split_whitespace().count() > SHORT_ANSWER_WORDS {
        return None;
    }
    Some(FollowUpTopic::of_question(question).prompt())
}
