use std::fmt;

use serde_json::Value;

use super::AppError;

/// Placeholder written into the README until a repository is connected.
pub const PLACEHOLDER_REPO_URL: &str = "https://github.com/USERNAME/REPO.git";

/// A GitHub repository in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    owner: String,
    name: String,
}

impl RepoPath {
    pub fn new(owner: &str, name: &str) -> Result<Self, AppError> {
        Self::parse(&format!("{}/{}", owner, name))
    }

    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        let invalid = || AppError::InvalidRepoPath(input.to_string());

        let (owner, name) = trimmed.split_once('/').ok_or_else(invalid)?;
        let valid_part =
            |part: &str| !part.is_empty() && !part.contains('/') && !part.contains(char::is_whitespace);
        if !valid_part(owner) || !valid_part(name) {
            return Err(invalid());
        }

        Ok(Self { owner: owner.to_string(), name: name.to_string() })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn remote_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.name)
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// How the local project is attached to GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoStrategy {
    /// Create a new private repository named after the package.
    Create,
    /// Connect to a repository that already exists.
    Connect(RepoPath),
}

/// Target branch when connecting to an existing repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchStrategy {
    New(String),
    Existing(String),
}

/// Summary of the head commit of a remote branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBranchInfo {
    pub message: String,
    pub author: String,
    pub date: String,
}

impl RemoteBranchInfo {
    /// Parse the response of `gh api repos/<owner>/<repo>/branches/<branch>`.
    pub fn from_api_json(content: &str) -> Result<Self, AppError> {
        let json: Value = serde_json::from_str(content).map_err(|e| AppError::ParseError {
            what: "branch JSON response".into(),
            details: e.to_string(),
        })?;

        let commit = &json["commit"]["commit"];
        let field = |value: &Value| value.as_str().unwrap_or("unknown").to_string();

        Ok(Self {
            message: field(&commit["message"]),
            author: field(&commit["author"]["name"]),
            date: field(&commit["author"]["date"]),
        })
    }

    /// First line of the commit message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
