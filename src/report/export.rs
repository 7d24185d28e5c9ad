//! JSON export of a finished assessment.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{Analysis, PersonalityReport};
use crate::error::ExportError;

/// Timestamp layout used in the record and its file name.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Keep alphanumerics, space, `-` and `_`; trim; spaces become `_`.
///
/// ```
/// use persona_assessment::report::safe_name;
///
/// assert_eq!(safe_name(" Ana María/O'Neil "), "Ana_MaríaONeil");
/// ```
#[must_use]
pub fn safe_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

/// Everything saved for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Respondent name, unmodified.
    pub name: String,
    /// Respondent age, as entered.
    pub age: String,
    /// Generation time in [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    /// Questions asked.
    pub questions: Vec<String>,
    /// One entry per question, `null` where unanswered.
    pub responses: Vec<Option<String>>,
    /// Scores and classification behind the report.
    pub analysis: Analysis,
    /// Structured report.
    pub report: PersonalityReport,
    /// Rendered Markdown.
    pub rendered: String,
}

impl ExportRecord {
    /// Assemble a record stamped with `generated_at`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        generated_at: DateTime<Utc>,
        questions: Vec<String>,
        responses: Vec<Option<String>>,
        analysis: Analysis,
        report: PersonalityReport,
        rendered: String,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            timestamp: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            questions,
            responses,
            analysis,
            report,
            rendered,
        }
    }

    /// `{safe_name}_age{age}_{timestamp}.json`, with the age filtered like
    /// the name.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}_age{}_{}.json",
            safe_name(&self.name),
            safe_name(&self.age),
            self.timestamp
        )
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the record into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the directory or file cannot be
    /// written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let json = self.to_json()?;
        fs::create_dir_all(dir).map_err(|e| io_error(dir, &e))?;
        let path = dir.join(self.file_name());
        fs::write(&path, json).map_err(|e| io_error(&path, &e))?;
        tracing::info!(path = %path.display(), "Assessment record saved");
        Ok(path)
    }

    /// Load a record written by [`ExportRecord::write_to`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be read and
    /// [`ExportError::Serialize`] if it is not a valid record.
    pub fn read_from(path: &Path) -> Result<Self, ExportError> {
        let text = fs::read_to_string(path).map_err(|e| io_error(path, &e))?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn io_error(path: &Path, err: &std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::engine::{analyze, generate_report};
    use crate::traits::SeededRandom;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use test_case::test_case;

    fn record() -> ExportRecord {
        let questions = vec!["How do you plan?".to_string(), "What drains you?".to_string()];
        let responses = vec!["I compete hard and crush the weak".to_string()];
        let analysis = analyze(&responses, None, None).unwrap();
        let report = generate_report(&analysis, "Jo Ann", "29", &responses, &mut SeededRandom::new(3));
        ExportRecord::new(
            "Jo Ann",
            "29",
            Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            questions,
            vec![responses.into_iter().next(), None],
            analysis,
            report,
            "# rendered".to_string(),
        )
    }

    #[test_case("Jo Ann", "Jo_Ann" ; "space")]
    #[test_case("  Bob  ", "Bob" ; "trimmed")]
    #[test_case("a/b\\c:d", "abcd" ; "path separators")]
    #[test_case("x-y_z", "x-y_z" ; "dash underscore")]
    #[test_case("../..", "" ; "dots only")]
    fn test_safe_name(input: &str, expected: &str) {
        assert_eq!(safe_name(input), expected);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(record().file_name(), "Jo_Ann_age29_2026-01-02_03-04-05.json");
    }

    #[test]
    fn test_path_like_age_stays_in_results_dir() {
        let dir = TempDir::new().unwrap();
        let results = dir.path().join("results");
        let mut rec = record();
        rec.age = "../../escape".to_string();

        assert_eq!(rec.file_name(), "Jo_Ann_ageescape_2026-01-02_03-04-05.json");
        let path = rec.write_to(&results).unwrap();
        assert_eq!(path.parent(), Some(results.as_path()));
    }

    #[test]
    fn test_responses_align_with_questions() {
        let rec = record();
        assert_eq!(rec.responses.len(), rec.questions.len());
        let value: serde_json::Value = serde_json::from_str(&rec.to_json().unwrap()).unwrap();
        assert!(value["responses"][1].is_null());
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("results");
        let original = record();

        let path = original.write_to(&nested).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());

        let loaded = ExportRecord::read_from(&path).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.report.primary_type, original.report.primary_type);
    }

    #[test]
    fn test_json_carries_type_tag() {
        let rec = record();
        let value: serde_json::Value = serde_json::from_str(&rec.to_json().unwrap()).unwrap();
        assert_eq!(value["report"]["primary_type"], rec.report.primary_type.name());
        assert_eq!(value["timestamp"], "2026-01-02_03-04-05");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ExportRecord::read_from(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = ExportRecord::read_from(&path).unwrap_err();
        assert!(matches!(err, ExportError::Serialize { .. }));
    }
}
