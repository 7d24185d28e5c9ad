//! Line-based interview over any async reader and writer.

use std::io;

use chrono::{DateTime, Utc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::{follow_up_prompt, validate_intake, AssessmentSession, Intake};

/// Prompts on `writer`, reads answers from `reader`.
pub struct Interview<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Interview<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create an interview over the given streams.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Release the streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Ask for name and age until both validate.
    ///
    /// # Errors
    ///
    /// Returns an I/O error, or [`io::ErrorKind::UnexpectedEof`] if input
    /// ends first.
    pub async fn intake(&mut self) -> io::Result<Intake> {
        loop {
            let name = self.ask("What's your name?").await?;
            let age = self.ask("What's your age?").await?;
            match validate_intake(&name, &age) {
                Ok(intake) => return Ok(intake),
                Err(e) => self.say(&format!("{e}. Let's try again.")).await?,
            }
        }
    }

    /// Run the whole interview.
    ///
    /// Blank answers are asked again. An answer of three words or fewer
    /// gets one follow-up, whose reply is appended to the answer.
    ///
    /// # Errors
    ///
    /// Returns an I/O error, or [`io::ErrorKind::UnexpectedEof`] if input
    /// ends before the last question is answered.
    pub async fn run(
        &mut self,
        questions: Vec<String>,
        started_at: DateTime<Utc>,
    ) -> io::Result<AssessmentSession> {
        let intake = self.intake().await?;
        self.say(&format!(
            "\nHi {}! You'll answer {} questions. There are no right or wrong answers.",
            intake.name,
            questions.len()
        ))
        .await?;

        let mut session = AssessmentSession::new(intake, questions, started_at);
        let total = session.questions.len();

        for index in 0..total {
            let question = session.questions[index].clone();
            self.say(&format!("\nQuestion {} of {total}", index + 1)).await?;

            let mut answer = self.ask(&question).await?;
            while answer.is_empty() {
                answer = self.ask("Please share an answer to continue.").await?;
            }

            if let Some(prompt) = follow_up_prompt(&question, &answer) {
                let more = self.ask(prompt).await?;
                if !more.is_empty() {
                    answer = format!("{answer} {more}");
                }
            }

            session
                .record(index, answer)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        }

        tracing::info!(session_id = %session.id, answered = total, "Interview finished");
        Ok(session)
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    async fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.write_all(b"\n> ").await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the interview finished",
            ));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn questions() -> Vec<String> {
        vec![
            "How do you handle stress?".to_string(),
            "What is your favorite book?".to_string(),
        ]
    }

    async fn run(input: &str) -> (io::Result<AssessmentSession>, String) {
        let mut interview = Interview::new(input.as_bytes(), Vec::new());
        let result = interview.run(questions(), Utc::now()).await;
        let (_, out) = interview.into_inner();
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_full_interview_with_follow_up() {
        let input = "Ada\n36\nI go running\nlong runs by the river\nI love reading historical novels about science\n";
        let (result, out) = run(input).await;
        let session = result.unwrap();

        assert_eq!(session.name, "Ada");
        assert_eq!(session.age, "36");
        assert_eq!(
            session.responses.get(0),
            Some("I go running long runs by the river")
        );
        assert_eq!(
            session.responses.get(1),
            Some("I love reading historical novels about science")
        );
        assert!(out.contains("Question 1 of 2"));
        assert!(out.contains("what specific techniques work best for you"));
    }

    #[tokio::test]
    async fn test_invalid_age_reprompts() {
        let input = "Ada\n9\nAda\n36\nI breathe slowly and go outside\nAnything by Le Guin honestly fits me\n";
        let (result, out) = run(input).await;
        let session = result.unwrap();
        assert_eq!(session.age, "36");
        assert!(out.contains("Let's try again"));
    }

    #[tokio::test]
    async fn test_blank_answer_asked_again() {
        let input = "Ada\n36\n\n   \nI breathe slowly and go outside\nAnything by Le Guin honestly fits me\n";
        let (result, out) = run(input).await;
        assert!(result.unwrap().responses.is_complete());
        assert!(out.contains("Please share an answer"));
    }

    #[tokio::test]
    async fn test_empty_follow_up_keeps_answer() {
        let input = "Ada\n36\nyoga\n\nAnything by Le Guin honestly fits me\n";
        let (result, _) = run(input).await;
        assert_eq!(result.unwrap().responses.get(0), Some("yoga"));
    }

    #[tokio::test]
    async fn test_eof_is_error() {
        let (result, _) = run("Ada\n36\n").await;
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
