use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Prompter;

#[derive(Debug)]
enum Answer {
    Text(String),
    Confirm(bool),
    Select(usize),
    Cancel,
}

/// Replays queued answers in order and panics on any unexpected prompt.
///
/// `text` answers both `input` and `password`.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    prompts: Mutex<Vec<String>>,
    defaults: Mutex<Vec<Option<String>>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, value: &str) -> Self {
        self.push(Answer::Text(value.to_string()))
    }

    pub fn confirm(self, value: bool) -> Self {
        self.push(Answer::Confirm(value))
    }

    pub fn select(self, index: usize) -> Self {
        self.push(Answer::Select(index))
    }

    /// The next prompt behaves as if the user pressed Esc.
    pub fn cancel(self) -> Self {
        self.push(Answer::Cancel)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Defaults offered to each `input` prompt.
    pub fn defaults(&self) -> Vec<Option<String>> {
        self.defaults.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn push(self, answer: Answer) -> Self {
        self.answers.lock().unwrap().push_back(answer);
        self
    }

    fn next(&self, prompt: &str) -> Result<Answer, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.answers.lock().unwrap().pop_front() {
            Some(Answer::Cancel) => Err(AppError::Cancelled),
            Some(answer) => Ok(answer),
            None => panic!("unexpected prompt: {}", prompt),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        self.defaults.lock().unwrap().push(default.map(str::to_string));
        match self.next(prompt)? {
            Answer::Text(value) if value.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Answer::Text(value) => Ok(value),
            other => panic!("expected text for '{}', got {:?}", prompt, other),
        }
    }

    fn password(&self, prompt: &str) -> Result<String, AppError> {
        match self.next(prompt)? {
            Answer::Text(value) => Ok(value),
            other => panic!("expected text for '{}', got {:?}", prompt, other),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, AppError> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected confirm for '{}', got {:?}", prompt, other),
        }
    }

    fn select(&self, prompt: &str, items: &[String], _default: usize) -> Result<usize, AppError> {
        match self.next(prompt)? {
            Answer::Select(index) => {
                assert!(index < items.len(), "selection {} out of range for '{}'", index, prompt);
                Ok(index)
            }
            other => panic!("expected select for '{}', got {:?}", prompt, other),
        }
    }
}
