//! GitHub step of `init`: CLI readiness, repository strategy, first push, secrets.

use crate::app::commands::branch_sync::{PushOutcome, push_with_recovery};
use crate::app::commands::scaffold::update_readme_repo_url;
use crate::app::{Toolchain, output};
use crate::domain::{
    AppError, BranchStrategy, RepoPath, RepoStrategy, Settings, StoreAccess, ThemeInfo,
};
use crate::ports::{GitHubPort, GitPort, Prompter, RepositoryFilesystem};

pub const INITIAL_COMMIT_MESSAGE: &str = "feat: Initial theme setup";
pub const STORE_SECRET: &str = "SHOPIFY_FLAG_STORE";
pub const TOKEN_SECRET: &str = "SHOPIFY_CLI_THEME_TOKEN";
pub const THEME_ID_SECRET: &str = "SHOPIFY_THEME_ID";

const REMOTE: &str = "origin";

/// Inputs the GitHub step needs from earlier steps.
pub struct GitHubRequest<'a> {
    pub package_name: &'a str,
    pub access: &'a StoreAccess,
    pub preview_theme: Option<&'a ThemeInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubOutcome {
    pub repo: RepoPath,
    pub created: bool,
    pub branch: String,
    pub push: PushOutcome,
    pub secrets: Vec<String>,
}

/// Run the GitHub step.
///
/// Returns `Ok(None)` when `gh` is unavailable or the user declines to
/// install or log in; manual secret instructions are printed instead.
pub fn execute<W: RepositoryFilesystem>(
    workspace: &W,
    prompter: &dyn Prompter,
    tools: &Toolchain<'_>,
    settings: &Settings,
    request: &GitHubRequest<'_>,
    warnings: &mut Vec<String>,
) -> Result<Option<GitHubOutcome>, AppError> {
    if !ensure_cli_ready(prompter, tools.github, warnings)? {
        print_manual_secrets(request);
        return Ok(None);
    }

    let strategy = choose_repo_strategy(prompter, tools.github)?;
    let (repo, created) = match strategy {
        RepoStrategy::Create => {
            let owner = tools.github.current_user()?;
            let repo = RepoPath::new(&owner, request.package_name)?;
            tools.github.create_repo(request.package_name, settings.private_repos)?;
            output::success(&format!("Created repository {}", repo));
            (repo, true)
        }
        RepoStrategy::Connect(repo) => (repo, false),
    };

    configure_remote(tools.git, &repo.remote_url())?;
    if update_readme_repo_url(workspace, &repo.remote_url())? {
        output::success("Updated README with repository URL");
    }

    tools.git.add_all()?;
    tools.git.commit(INITIAL_COMMIT_MESSAGE)?;

    let (branch, push) = if created {
        checkout(tools.git, &settings.default_branch)?;
        tools.git.push_upstream(&settings.default_branch)?;
        (settings.default_branch.clone(), PushOutcome::Pushed)
    } else {
        push_to_connected_repo(prompter, tools, &repo, settings)?
    };
    output::success(&format!("Pushed '{}' to {}", branch, repo));

    let secrets = upload_secrets(tools.github, &repo, request, warnings);

    Ok(Some(GitHubOutcome { repo, created, branch, push, secrets }))
}

/// Make sure `gh` is installed and logged in, offering to fix either.
fn ensure_cli_ready(
    prompter: &dyn Prompter,
    github: &dyn GitHubPort,
    warnings: &mut Vec<String>,
) -> Result<bool, AppError> {
    if !github.is_installed() {
        if !prompter.confirm("GitHub CLI (gh) is not installed. Install it now?", true)? {
            return Ok(false);
        }
        if let Err(e) = github.install_cli() {
            output::push_warning(warnings, format!("GitHub CLI installation failed: {}", e));
            return Ok(false);
        }
        if !github.is_installed() {
            output::push_warning(
                warnings,
                "GitHub CLI still not found after installation; open a new terminal and retry"
                    .to_string(),
            );
            return Ok(false);
        }
        output::success("Installed GitHub CLI");
    }

    if !github.is_authenticated() {
        if !prompter.confirm("GitHub CLI is not logged in. Log in now?", true)? {
            return Ok(false);
        }
        if let Err(e) = github.authenticate() {
            output::push_warning(warnings, format!("GitHub login failed: {}", e));
            return Ok(false);
        }
    }

    Ok(true)
}

fn choose_repo_strategy(
    prompter: &dyn Prompter,
    github: &dyn GitHubPort,
) -> Result<RepoStrategy, AppError> {
    let items =
        vec!["Create a new repository".to_string(), "Connect to an existing repository".to_string()];
    if prompter.select("How do you want to set up the GitHub repository?", &items, 0)? == 0 {
        return Ok(RepoStrategy::Create);
    }

    loop {
        let input = prompter.input("Existing repository (owner/repo)", None)?;
        let repo = match RepoPath::parse(&input) {
            Ok(repo) => repo,
            Err(e) => {
                output::warn(&e.to_string());
                continue;
            }
        };
        if github.repo_exists(&repo) {
            return Ok(RepoStrategy::Connect(repo));
        }
        output::warn(&format!(
            "Repository '{}' not found or not accessible. Check the name and your permissions.",
            repo
        ));
    }
}

fn configure_remote(git: &dyn GitPort, url: &str) -> Result<(), AppError> {
    match git.remote_url(REMOTE) {
        Some(existing) if existing == url => Ok(()),
        Some(_) => git.set_remote_url(REMOTE, url),
        None => git.add_remote(REMOTE, url),
    }
}

fn checkout(git: &dyn GitPort, branch: &str) -> Result<(), AppError> {
    git.checkout(branch, !git.branch_exists(branch))
}

fn push_to_connected_repo(
    prompter: &dyn Prompter,
    tools: &Toolchain<'_>,
    repo: &RepoPath,
    settings: &Settings,
) -> Result<(String, PushOutcome), AppError> {
    match choose_branch_strategy(prompter, settings)? {
        BranchStrategy::New(branch) => push_new_branch(tools.git, &branch),
        BranchStrategy::Existing(branch) => {
            if confirm_existing_branch(prompter, tools.github, repo, &branch)? {
                checkout(tools.git, &branch)?;
                let outcome = push_with_recovery(tools.git, &branch)?;
                return Ok((branch, outcome));
            }

            output::info("Push cancelled. Consider working on a new branch instead.");
            if !prompter.confirm("Create a new branch instead?", true)? {
                return Err(AppError::Cancelled);
            }
            let branch = prompter.input("New branch name", Some(&settings.default_branch))?;
            push_new_branch(tools.git, branch.trim())
        }
    }
}

fn choose_branch_strategy(
    prompter: &dyn Prompter,
    settings: &Settings,
) -> Result<BranchStrategy, AppError> {
    let items = vec![
        "Create a new branch".to_string(),
        "Push to an existing branch (e.g. main)".to_string(),
    ];
    let choice = prompter.select("How do you want to push your changes?", &items, 0)?;
    if choice == 0 {
        let branch = prompter.input("New branch name", Some(&settings.default_branch))?;
        Ok(BranchStrategy::New(branch.trim().to_string()))
    } else {
        let branch = prompter.input("Existing branch name", Some(&settings.release_branch))?;
        Ok(BranchStrategy::Existing(branch.trim().to_string()))
    }
}

fn push_new_branch(git: &dyn GitPort, branch: &str) -> Result<(String, PushOutcome), AppError> {
    checkout(git, branch)?;
    let outcome = push_with_recovery(git, branch)?;
    Ok((branch.to_string(), outcome))
}

/// Show protection status and last commit, then require explicit consent.
fn confirm_existing_branch(
    prompter: &dyn Prompter,
    github: &dyn GitHubPort,
    repo: &RepoPath,
    branch: &str,
) -> Result<bool, AppError> {
    if github.is_branch_protected(repo, branch) {
        output::warn(&format!("Branch '{}' is protected.", branch));
        output::detail("Direct pushes may be rejected or require review.");
        output::detail("Pushing to a production branch can trigger a release.");
    }
    if let Some(info) = github.remote_branch_info(repo, branch) {
        output::info(&format!("Last commit on '{}':", branch));
        output::detail(&format!("{} ({}, {})", info.subject(), info.author, info.date));
    }

    prompter.confirm(
        &format!("Are you absolutely sure you want to push to '{}'? This may affect production!", branch),
        false,
    )
}

fn upload_secrets(
    github: &dyn GitHubPort,
    repo: &RepoPath,
    request: &GitHubRequest<'_>,
    warnings: &mut Vec<String>,
) -> Vec<String> {
    let mut secrets = vec![
        (STORE_SECRET, request.access.store.domain()),
        (TOKEN_SECRET, request.access.token.clone()),
    ];
    if let Some(theme) = request.preview_theme {
        secrets.push((THEME_ID_SECRET, theme.id.to_string()));
    }

    let mut uploaded = Vec::new();
    for (key, value) in secrets {
        match github.set_secret(repo, key, &value) {
            Ok(()) => {
                output::success(&format!("Set secret {}", key));
                uploaded.push(key.to_string());
            }
            Err(e) => output::push_warning(warnings, format!("Could not set secret {}: {}", key, e)),
        }
    }
    uploaded
}

fn print_manual_secrets(request: &GitHubRequest<'_>) {
    output::info("Skipping GitHub setup. Add these repository secrets manually:");
    output::detail(&format!("{}={}", STORE_SECRET, request.access.store.domain()));
    output::detail(&format!("{}=<your theme access token>", TOKEN_SECRET));
    if let Some(theme) = request.preview_theme {
        output::detail(&format!("{}={}", THEME_ID_SECRET, theme.id));
    }
}
