//! Push with divergence recovery: plain push, then rebase, then merge.

use tracing::debug;

use crate::app::output;
use crate::domain::AppError;
use crate::ports::GitPort;

const REMOTE: &str = "origin";

/// How the branch finally reached the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    Rebased,
    Merged,
}

/// Push `branch` to `origin`, reconciling with the remote branch when the
/// first push is rejected.
pub fn push_with_recovery(git: &dyn GitPort, branch: &str) -> Result<PushOutcome, AppError> {
    match git.push_upstream(branch) {
        Ok(()) => return Ok(PushOutcome::Pushed),
        Err(e) => debug!(error = %e, branch, "initial push rejected"),
    }

    output::info(&format!("Remote '{}' has diverged, syncing...", branch));
    let upstream = format!("{}/{}", REMOTE, branch);
    if let Err(e) = git.fetch(REMOTE, branch) {
        debug!(error = %e, "fetch failed");
        return Err(sync_failed(branch));
    }

    if git.rebase(&upstream).is_ok() {
        return push_again(git, branch, PushOutcome::Rebased);
    }

    debug!(upstream = %upstream, "rebase failed, falling back to merge");
    if let Err(e) = git.rebase_abort() {
        debug!(error = %e, "rebase --abort failed");
    }
    if let Err(e) = git.merge(&upstream) {
        debug!(error = %e, "merge failed");
        return Err(sync_failed(branch));
    }
    push_again(git, branch, PushOutcome::Merged)
}

fn push_again(
    git: &dyn GitPort,
    branch: &str,
    outcome: PushOutcome,
) -> Result<PushOutcome, AppError> {
    match git.push_upstream(branch) {
        Ok(()) => {
            let how = if outcome == PushOutcome::Rebased { "rebase" } else { "merge" };
            output::success(&format!("Synced with remote '{}' via {}", branch, how));
            Ok(outcome)
        }
        Err(e) => {
            debug!(error = %e, "push after sync failed");
            Err(sync_failed(branch))
        }
    }
}

fn sync_failed(branch: &str) -> AppError {
    output::warn(&format!("Could not sync with remote branch '{}'. Resolve it manually:", branch));
    for line in manual_steps(branch) {
        output::detail(&line);
    }
    AppError::BranchSync { branch: branch.to_string() }
}

pub fn manual_steps(branch: &str) -> Vec<String> {
    vec![
        format!("git pull {} {} --allow-unrelated-histories", REMOTE, branch),
        "# resolve any conflicts, then".to_string(),
        "git add .".to_string(),
        "git commit -m \"chore: merge remote changes\"".to_string(),
        format!("git push -u {} {}", REMOTE, branch),
    ]
}
