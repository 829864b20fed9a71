use crate::domain::AppError;

/// Port over the local `git` binary.
///
/// Every method runs in the project root the adapter was created for.
pub trait GitPort {
    /// Initialize a repository (no-op for git if one already exists).
    fn init(&self) -> Result<(), AppError>;

    /// Stage every change in the working tree.
    fn add_all(&self) -> Result<(), AppError>;

    /// Create a commit with the given message.
    fn commit(&self, message: &str) -> Result<(), AppError>;

    /// Check whether a local branch exists.
    fn branch_exists(&self, branch: &str) -> bool;

    /// Checkout a branch, optionally creating it.
    fn checkout(&self, branch: &str, create: bool) -> Result<(), AppError>;

    /// Push a branch to `origin` and set it as upstream.
    fn push_upstream(&self, branch: &str) -> Result<(), AppError>;

    /// Fetch a single branch from a remote.
    fn fetch(&self, remote: &str, branch: &str) -> Result<(), AppError>;

    /// Rebase the current branch onto `upstream`.
    fn rebase(&self, upstream: &str) -> Result<(), AppError>;

    /// Abort an in-progress rebase.
    fn rebase_abort(&self) -> Result<(), AppError>;

    /// Merge `upstream` into the current branch, allowing unrelated histories.
    fn merge(&self, upstream: &str) -> Result<(), AppError>;

    /// URL of a remote, or `None` when it is not configured.
    fn remote_url(&self, remote: &str) -> Option<String>;

    /// Add a new remote.
    fn add_remote(&self, remote: &str, url: &str) -> Result<(), AppError>;

    /// Point an existing remote at a new URL.
    fn set_remote_url(&self, remote: &str, url: &str) -> Result<(), AppError>;
}
