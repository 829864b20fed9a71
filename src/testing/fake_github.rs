use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::{AppError, RemoteBranchInfo, RepoPath};
use crate::ports::GitHubPort;

/// Installed and logged in as `octocat` unless told otherwise.
pub struct FakeGitHub {
    installed: Mutex<bool>,
    authenticated: Mutex<bool>,
    auth_attempts: Mutex<usize>,
    repos: Mutex<HashSet<String>>,
    protected: Mutex<HashSet<String>>,
    branch_info: Mutex<Option<RemoteBranchInfo>>,
    failing_secrets: Mutex<HashSet<String>>,
    created: Mutex<Vec<(String, bool)>>,
    secrets: Mutex<Vec<(String, String)>>,
}

impl Default for FakeGitHub {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self {
            installed: Mutex::new(true),
            authenticated: Mutex::new(true),
            auth_attempts: Mutex::new(0),
            repos: Mutex::new(HashSet::new()),
            protected: Mutex::new(HashSet::new()),
            branch_info: Mutex::new(None),
            failing_secrets: Mutex::new(HashSet::new()),
            created: Mutex::new(Vec::new()),
            secrets: Mutex::new(Vec::new()),
        }
    }

    pub fn set_installed(&self, installed: bool) {
        *self.installed.lock().unwrap() = installed;
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        *self.authenticated.lock().unwrap() = authenticated;
    }

    pub fn add_repo(&self, path: &str) {
        self.repos.lock().unwrap().insert(path.to_string());
    }

    pub fn protect(&self, branch: &str) {
        self.protected.lock().unwrap().insert(branch.to_string());
    }

    pub fn set_branch_info(&self, info: RemoteBranchInfo) {
        *self.branch_info.lock().unwrap() = Some(info);
    }

    pub fn fail_secret(&self, key: &str) {
        self.failing_secrets.lock().unwrap().insert(key.to_string());
    }

    pub fn auth_attempts(&self) -> usize {
        *self.auth_attempts.lock().unwrap()
    }

    /// `(name, private)` for each created repository.
    pub fn created_repos(&self) -> Vec<(String, bool)> {
        self.created.lock().unwrap().clone()
    }

    /// `(key, value)` for each uploaded secret.
    pub fn secrets(&self) -> Vec<(String, String)> {
        self.secrets.lock().unwrap().clone()
    }
}

impl GitHubPort for FakeGitHub {
    fn is_installed(&self) -> bool {
        *self.installed.lock().unwrap()
    }

    fn install_cli(&self) -> Result<(), AppError> {
        self.set_installed(true);
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        *self.authenticated.lock().unwrap()
    }

    fn authenticate(&self) -> Result<(), AppError> {
        *self.auth_attempts.lock().unwrap() += 1;
        self.set_authenticated(true);
        Ok(())
    }

    fn current_user(&self) -> Result<String, AppError> {
        Ok("octocat".into())
    }

    fn repo_exists(&self, repo: &RepoPath) -> bool {
        self.repos.lock().unwrap().contains(&repo.to_string())
    }

    fn create_repo(&self, name: &str, private: bool) -> Result<(), AppError> {
        self.created.lock().unwrap().push((name.to_string(), private));
        self.add_repo(&format!("octocat/{}", name));
        Ok(())
    }

    fn is_branch_protected(&self, _repo: &RepoPath, branch: &str) -> bool {
        self.protected.lock().unwrap().contains(branch)
    }

    fn remote_branch_info(&self, _repo: &RepoPath, _branch: &str) -> Option<RemoteBranchInfo> {
        self.branch_info.lock().unwrap().clone()
    }

    fn set_secret(&self, _repo: &RepoPath, key: &str, value: &str) -> Result<(), AppError> {
        if self.failing_secrets.lock().unwrap().contains(key) {
            return Err(AppError::tool_error("gh", format!("secret {} rejected", key)));
        }
        self.secrets.lock().unwrap().push((key.to_string(), value.to_string()));
        Ok(())
    }
}
