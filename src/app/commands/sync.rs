//! `sync`: refresh release workflows and configuration in an existing project.

use crate::app::commands::scaffold::{self, RELEASE_FILES, ScaffoldReport};
use crate::app::{AppContext, output};
use crate::domain::AppError;
use crate::ports::{Prompter, RepositoryFilesystem, TemplateStore};

const GITHUB_DIR: &str = ".github";

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Pre-answered "delete the existing .github directory?" question.
    pub clean_github: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub removed_github: bool,
    pub files: ScaffoldReport,
}

/// Execute the sync command.
pub fn execute<W, T>(
    ctx: &AppContext<W, T>,
    prompter: &dyn Prompter,
    options: SyncOptions,
) -> Result<SyncReport, AppError>
where
    W: RepositoryFilesystem,
    T: TemplateStore,
{
    let workspace = ctx.workspace();
    let mut report = SyncReport::default();

    if workspace.is_dir(GITHUB_DIR) {
        let remove = match options.clean_github {
            Some(answer) => answer,
            None => prompter.confirm(
                "Remove the existing .github directory before syncing? Recommended to avoid duplicate workflows",
                true,
            )?,
        };
        if remove {
            workspace.remove_dir_all(GITHUB_DIR)?;
            output::success("Removed existing .github directory");
            report.removed_github = true;
        } else {
            output::warn("Keeping .github; older workflows may run alongside the synced ones");
        }
    }

    let files =
        scaffold::render_files(ctx.templates(), &RELEASE_FILES, &scaffold::release_context(ctx.settings()))?;
    scaffold::write_files(workspace, &files, &mut report.files)?;

    Ok(report)
}

/// Follow-up commands printed after a successful sync.
pub fn next_steps() -> Vec<&'static str> {
    vec![
        "git add .github release.config.js commitlint.config.js",
        "git commit -m \"chore: sync release workflows\"",
        "git push",
    ]
}
