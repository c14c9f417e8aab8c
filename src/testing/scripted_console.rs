use std::collections::VecDeque;

use crate::domain::{AppError, ValidationError};
use crate::ports::{ConsolePort, Question};

/// Console that replays canned answers and records everything shown.
///
/// Mirrors the terminal contract: an empty answer takes the default and an
/// answer failing the validator is recorded and the next one is tried.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    output: Vec<String>,
    warnings: Vec<String>,
    asked: Vec<String>,
    rejections: Vec<ValidationError>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Prompt texts, one per question asked.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn rejections(&self) -> &[ValidationError] {
        &self.rejections
    }
}

impl ConsolePort for ScriptedConsole {
    fn say(&mut self, message: &str) {
        self.output.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn ask(&mut self, question: &Question<'_>) -> Result<String, AppError> {
        self.asked.push(question.prompt_text());
        loop {
            let Some(answer) = self.answers.pop_front() else {
                return Err(AppError::Prompt {
                    what: question.label.to_string(),
                    details: "no scripted answer left".to_string(),
                });
            };
            let resolved = question.resolve(answer);
            match question.check(&resolved) {
                Ok(()) => return Ok(resolved),
                Err(err) => self.rejections.push(err),
            }
        }
    }
}
