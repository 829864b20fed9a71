use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::GitPort;

#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let command_line = format!("git {}", args.join(" "));
        debug!(command = %command_line, root = %self.root.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::GitError { command: command_line.clone(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: command_line,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitPort for GitCommandAdapter {
    fn init(&self) -> Result<(), AppError> {
        self.run(&["init"])?;
        Ok(())
    }

    fn add_all(&self) -> Result<(), AppError> {
        self.run(&["add", "."])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), AppError> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    fn branch_exists(&self, branch: &str) -> bool {
        let reference = format!("refs/heads/{}", branch);
        self.run(&["show-ref", "--verify", "--quiet", &reference]).is_ok()
    }

    fn checkout(&self, branch: &str, create: bool) -> Result<(), AppError> {
        let args = if create { vec!["checkout", "-b", branch] } else { vec!["checkout", branch] };
        self.run(&args)?;
        Ok(())
    }

    fn push_upstream(&self, branch: &str) -> Result<(), AppError> {
        self.run(&["push", "-u", "origin", branch])?;
        Ok(())
    }

    fn fetch(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.run(&["fetch", remote, branch])?;
        Ok(())
    }

    fn rebase(&self, upstream: &str) -> Result<(), AppError> {
        self.run(&["rebase", upstream])?;
        Ok(())
    }

    fn rebase_abort(&self) -> Result<(), AppError> {
        self.run(&["rebase", "--abort"])?;
        Ok(())
    }

    fn merge(&self, upstream: &str) -> Result<(), AppError> {
        self.run(&["merge", "--allow-unrelated-histories", "--no-edit", upstream])?;
        Ok(())
    }

    fn remote_url(&self, remote: &str) -> Option<String> {
        self.run(&["remote", "get-url", remote]).ok().filter(|url| !url.is_empty())
    }

    fn add_remote(&self, remote: &str, url: &str) -> Result<(), AppError> {
        self.run(&["remote", "add", remote, url])?;
        Ok(())
    }

    fn set_remote_url(&self, remote: &str, url: &str) -> Result<(), AppError> {
        self.run(&["remote", "set-url", remote, url])?;
        Ok(())
    }
}
