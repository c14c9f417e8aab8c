use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Password};

use crate::domain::AppError;
use crate::ports::{ConsolePort, Question};

/// Interactive console on the controlling terminal.
///
/// Lines go to stdout, warnings to stderr. Hidden questions use a password
/// prompt that does not echo typed characters.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }

    fn ask_visible(&self, question: &Question<'_>) -> Result<String, DialoguerError> {
        let q = *question;
        Input::<String>::new()
            .with_prompt(question.prompt_text())
            .allow_empty(question.default.is_some())
            .validate_with(move |input: &String| q.check(&q.resolve(input.clone())))
            .interact_text()
    }

    fn ask_hidden(&self, question: &Question<'_>) -> Result<String, DialoguerError> {
        let q = *question;
        Password::new()
            .with_prompt(question.prompt_text())
            .allow_empty_password(question.default.is_some())
            .validate_with(move |input: &String| q.check(&q.resolve(input.clone())))
            .interact()
    }
}

impl ConsolePort for TerminalConsole {
    fn say(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn ask(&mut self, question: &Question<'_>) -> Result<String, AppError> {
        let answer = if question.hidden {
            self.ask_hidden(question)
        } else {
            self.ask_visible(question)
        };

        match answer {
            Ok(value) => Ok(question.resolve(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Prompt {
                    what: question.label.to_string(),
                    details: "cancelled".to_string(),
                })
            }
            Err(err) => Err(AppError::Prompt {
                what: question.label.to_string(),
                details: err.to_string(),
            }),
        }
    }
}
