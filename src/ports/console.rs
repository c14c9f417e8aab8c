use crate::domain::{AppError, ValidationError};

/// Pure check applied to a resolved answer; failure means "ask again".
pub type AnswerValidator = fn(&str) -> Result<(), ValidationError>;

/// One interactive question.
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    pub label: &'a str,
    /// Answer used when the response is empty.
    pub default: Option<&'a str>,
    /// Suppress echo of typed characters.
    pub hidden: bool,
    pub validator: Option<AnswerValidator>,
}

impl<'a> Question<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label, default: None, hidden: false, validator: None }
    }

    pub fn with_default(mut self, default: &'a str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn validate_with(mut self, validator: AnswerValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Prompt text with the default in brackets, e.g. `Database User [root]`.
    pub fn prompt_text(&self) -> String {
        match self.default {
            Some(default) => format!("{} [{}]", self.label, default),
            None => self.label.to_string(),
        }
    }

    /// Substitute the default for an empty response.
    pub fn resolve(&self, answer: String) -> String {
        match self.default {
            Some(default) if answer.is_empty() => default.to_string(),
            _ => answer,
        }
    }

    /// Run the validator, if any, against a resolved answer.
    pub fn check(&self, resolved: &str) -> Result<(), ValidationError> {
        match self.validator {
            Some(validate) => validate(resolved),
            None => Ok(()),
        }
    }
}

/// Operator-facing input/output channel.
///
/// `ask` returns the resolved answer: an empty response yields the default,
/// and an answer that fails the validator is asked for again rather than
/// returned.
pub trait ConsolePort {
    /// Write an informational line.
    fn say(&mut self, message: &str);

    /// Write a non-fatal warning.
    fn warn(&mut self, message: &str);

    /// Ask a question and return the resolved, validated answer.
    fn ask(&mut self, question: &Question<'_>) -> Result<String, AppError>;
}
