use crate::domain::{AppError, RemoteBranchInfo, RepoPath};

/// Port over the GitHub CLI (`gh`).
pub trait GitHubPort {
    /// Check whether `gh` can be executed.
    fn is_installed(&self) -> bool;

    /// Install `gh` with the platform package manager.
    fn install_cli(&self) -> Result<(), AppError>;

    /// Check whether `gh` holds a valid login.
    fn is_authenticated(&self) -> bool;

    /// Run the interactive browser login.
    fn authenticate(&self) -> Result<(), AppError>;

    /// Login name of the authenticated user.
    fn current_user(&self) -> Result<String, AppError>;

    /// Check whether a repository is visible to the authenticated user.
    fn repo_exists(&self, repo: &RepoPath) -> bool;

    /// Create a repository owned by the authenticated user.
    fn create_repo(&self, name: &str, private: bool) -> Result<(), AppError>;

    /// Check whether branch protection rules exist for a branch.
    fn is_branch_protected(&self, repo: &RepoPath, branch: &str) -> bool;

    /// Head commit of a remote branch, `None` when the branch does not exist.
    fn remote_branch_info(&self, repo: &RepoPath, branch: &str) -> Option<RemoteBranchInfo>;

    /// Create or update an Actions secret.
    fn set_secret(&self, repo: &RepoPath, key: &str, value: &str) -> Result<(), AppError>;
}
