use std::io;

use thiserror::Error;

/// Library-wide error type for mili-release operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project name is empty or otherwise unusable.
    #[error("Invalid project name '{0}': a non-empty name is required")]
    InvalidProjectName(String),

    /// Store input could not be normalized to a `*.myshopify.com` domain.
    #[error("Invalid Shopify store '{0}': expected a store name or <store>.myshopify.com")]
    InvalidStore(String),

    /// Repository path is not in `owner/repo` form.
    #[error("Invalid repository '{0}': expected the form owner/repo")]
    InvalidRepoPath(String),

    /// GitHub repository does not exist or is not visible to the current user.
    #[error("Repository '{0}' not found")]
    RepoNotFound(String),

    /// The user aborted an interactive prompt or declined a required step.
    #[error("Setup cancelled by user")]
    Cancelled,

    /// Terminal prompt failed for a reason other than cancellation.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Any other external CLI failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// Required external CLI is not available on this machine.
    #[error("{0} is not installed")]
    ToolNotInstalled(String),

    /// Local branch could not be reconciled with its remote counterpart.
    #[error("Failed to sync with remote branch '{branch}'")]
    BranchSync { branch: String },

    /// No cached credentials exist for the store.
    #[error("No cached configuration for store '{0}'")]
    StoreNotCached(String),

    /// An embedded template is missing or failed to render.
    #[error("Template error in {path}: {details}")]
    Template { path: String, details: String },

    /// Path escapes the project root.
    #[error("Path '{0}' escapes the project root")]
    PathTraversal(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn tool_error<T: Into<String>, E: Into<String>>(tool: T, error: E) -> Self {
        AppError::ExternalToolError { tool: tool.into(), error: error.into() }
    }

    /// Coarse `io::ErrorKind` classification.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidProjectName(_)
            | AppError::InvalidStore(_)
            | AppError::InvalidRepoPath(_)
            | AppError::PathTraversal(_)
            | AppError::Template { .. }
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::RepoNotFound(_)
            | AppError::StoreNotCached(_)
            | AppError::ToolNotInstalled(_) => io::ErrorKind::NotFound,
            AppError::Cancelled => io::ErrorKind::Interrupted,
            AppError::Prompt(_)
            | AppError::GitError { .. }
            | AppError::ExternalToolError { .. }
            | AppError::BranchSync { .. } => io::ErrorKind::Other,
        }
    }
}
