use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn map_prompt_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => AppError::Cancelled,
        err => AppError::Prompt(err.to_string()),
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(map_prompt_error)
    }

    fn password(&self, prompt: &str) -> Result<String, AppError> {
        Password::new().with_prompt(prompt).interact().map_err(map_prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(map_prompt_error)?
            .ok_or(AppError::Cancelled)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(map_prompt_error)?
            .ok_or(AppError::Cancelled)
    }
}
