use crate::domain::AppError;

/// Port for interactive questions.
///
/// Implementations return [`AppError::Cancelled`] when the user aborts.
pub trait Prompter {
    /// Free text, optionally pre-filled with a default.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError>;

    /// Hidden text.
    fn password(&self, prompt: &str) -> Result<String, AppError>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Pick one item; returns its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError>;
}
