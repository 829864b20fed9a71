use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::domain::{AppError, RemoteBranchInfo, RepoPath};
use crate::ports::GitHubPort;

const DEBIAN_KEYRING_SETUP: &str = "curl -fsSL https://cli.github.com/packages/githubcli-archive-keyring.gpg | sudo dd of=/usr/share/keyrings/githubcli-archive-keyring.gpg";
const DEBIAN_SOURCE_SETUP: &str = "echo \"deb [arch=$(dpkg --print-architecture) signed-by=/usr/share/keyrings/githubcli-archive-keyring.gpg] https://cli.github.com/packages stable main\" | sudo tee /etc/apt/sources.list.d/github-cli.list > /dev/null";
const HOMEBREW_INSTALL: &str =
    "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

/// Operating system families with a known `gh` install routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallTarget {
    MacOs,
    Debian,
    Fedora,
    Windows,
}

impl InstallTarget {
    /// Detect the install routine for the running machine.
    pub fn detect() -> Option<Self> {
        Self::from_os(std::env::consts::OS, Path::new("/etc"))
    }

    fn from_os(os: &str, etc: &Path) -> Option<Self> {
        match os {
            "macos" => Some(InstallTarget::MacOs),
            "windows" => Some(InstallTarget::Windows),
            "linux" if etc.join("debian_version").exists() => Some(InstallTarget::Debian),
            "linux" if etc.join("fedora-release").exists() => Some(InstallTarget::Fedora),
            _ => None,
        }
    }

    /// Shell pipelines run in order by the installer.
    pub fn steps(&self, has_homebrew: bool) -> Vec<String> {
        match self {
            InstallTarget::MacOs => {
                let mut steps = Vec::new();
                if !has_homebrew {
                    steps.push(HOMEBREW_INSTALL.to_string());
                }
                steps.push("brew install gh".to_string());
                steps
            }
            InstallTarget::Debian => vec![
                DEBIAN_KEYRING_SETUP.to_string(),
                DEBIAN_SOURCE_SETUP.to_string(),
                "sudo apt update && sudo apt install gh -y".to_string(),
            ],
            InstallTarget::Fedora => vec!["sudo dnf install gh -y".to_string()],
            InstallTarget::Windows => vec!["winget install --id GitHub.cli".to_string()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitHubCommandAdapter {
    root: PathBuf,
    program: String,
}

impl GitHubCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root, program: "gh".to_string() }
    }

    #[cfg(test)]
    fn with_program(root: PathBuf, program: &str) -> Self {
        Self { root, program: program.to_string() }
    }

    fn run_gh(&self, args: &[&str]) -> Result<String, AppError> {
        self.run_gh_with_input(args, None)
    }

    /// Run `gh`, optionally feeding `input` on stdin. Only `args` are logged.
    fn run_gh_with_input(&self, args: &[&str], input: Option<&str>) -> Result<String, AppError> {
        debug!(command = %format!("gh {}", args.join(" ")), stdin = input.is_some(), "running gh");

        let output = self
            .spawn_gh(args, input)
            .map_err(|e| AppError::tool_error("gh", format!("Failed to execute gh CLI: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::tool_error("gh", format!("gh command failed: {}", stderr.trim())));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn spawn_gh(&self, args: &[&str], input: Option<&str>) -> std::io::Result<Output> {
        let mut command = Command::new(&self.program);
        command.args(args).current_dir(&self.root);
        let Some(input) = input else {
            return command.output();
        };

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
        }
        child.wait_with_output()
    }

    fn succeeds(&self, program: &str, args: &[&str]) -> bool {
        Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn run_attached(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        debug!(command = %format!("{} {}", program, args.join(" ")), "running attached");

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|e| AppError::tool_error(program, format!("Failed to execute: {}", e)))?;

        if !status.success() {
            return Err(AppError::tool_error(program, format!("exited with {}", status)));
        }
        Ok(())
    }

    fn run_shell(&self, script: &str) -> Result<(), AppError> {
        if cfg!(windows) {
            self.run_attached("cmd", &["/C", script])
        } else {
            self.run_attached("sh", &["-c", script])
        }
    }
}

impl GitHubPort for GitHubCommandAdapter {
    fn is_installed(&self) -> bool {
        self.succeeds(&self.program, &["--version"])
    }

    fn install_cli(&self) -> Result<(), AppError> {
        let target = InstallTarget::detect().ok_or_else(|| {
            AppError::ToolNotInstalled(format!(
                "gh (no installer for operating system '{}')",
                std::env::consts::OS
            ))
        })?;

        let has_homebrew = target == InstallTarget::MacOs && self.succeeds("brew", &["--version"]);
        for step in target.steps(has_homebrew) {
            self.run_shell(&step)?;
        }
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.succeeds(&self.program, &["auth", "status"])
    }

    fn authenticate(&self) -> Result<(), AppError> {
        self.run_attached(&self.program, &["auth", "login", "-w", "-p", "https", "-s", "repo,workflow"])
    }

    fn current_user(&self) -> Result<String, AppError> {
        let login = self.run_gh(&["api", "user", "-q", ".login"])?;
        if login.is_empty() {
            return Err(AppError::ParseError {
                what: "GitHub login".into(),
                details: "gh returned an empty login".into(),
            });
        }
        Ok(login)
    }

    fn repo_exists(&self, repo: &RepoPath) -> bool {
        self.succeeds(&self.program, &["repo", "view", &repo.to_string()])
    }

    fn create_repo(&self, name: &str, private: bool) -> Result<(), AppError> {
        let visibility = if private { "--private" } else { "--public" };
        self.run_gh(&["repo", "create", name, visibility])?;
        Ok(())
    }

    fn is_branch_protected(&self, repo: &RepoPath, branch: &str) -> bool {
        let endpoint = format!("repos/{}/branches/{}/protection", repo, branch);
        self.run_gh(&["api", &endpoint]).is_ok()
    }

    fn remote_branch_info(&self, repo: &RepoPath, branch: &str) -> Option<RemoteBranchInfo> {
        let endpoint = format!("repos/{}/branches/{}", repo, branch);
        let output = self.run_gh(&["api", &endpoint]).ok()?;
        RemoteBranchInfo::from_api_json(&output).ok()
    }

    /// The value goes to `gh` on stdin so it never appears in argv or logs.
    fn set_secret(&self, repo: &RepoPath, key: &str, value: &str) -> Result<(), AppError> {
        let repo = repo.to_string();
        self.run_gh_with_input(&["secret", "set", key, "--repo", &repo], Some(value))?;
        Ok(())
    }
}
