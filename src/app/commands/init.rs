//! `init`: answers, scaffold, tooling, theme, GitHub.

use crate::app::commands::answers::{self, AnswerOptions, Answers};
use crate::app::commands::github_setup::{self, GitHubOutcome, GitHubRequest};
use crate::app::commands::scaffold::{self, ScaffoldReport};
use crate::app::commands::theme_setup::{self, ThemeOutcome};
use crate::app::commands::tooling::{self, ToolingReport};
use crate::app::{AppContext, Toolchain, output};
use crate::domain::{AppError, ProjectName, StoreAccess};
use crate::ports::{CredentialStore, Prompter, RepositoryFilesystem, TemplateStore};

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub answers: AnswerOptions,
    pub github: bool,
    pub install: bool,
    pub theme: bool,
}

impl InitOptions {
    /// All steps enabled, nothing pre-filled.
    pub fn interactive() -> Self {
        Self { answers: AnswerOptions::default(), github: true, install: true, theme: true }
    }
}

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub project: ProjectName,
    pub access: StoreAccess,
    pub token_saved: bool,
    pub scaffold: ScaffoldReport,
    pub tooling: ToolingReport,
    pub theme: Option<ThemeOutcome>,
    pub github: Option<GitHubOutcome>,
    pub warnings: Vec<String>,
}

/// Execute the init command.
pub fn execute<W, T>(
    ctx: &AppContext<W, T>,
    prompter: &dyn Prompter,
    credentials: &dyn CredentialStore,
    tools: &Toolchain<'_>,
    options: &InitOptions,
) -> Result<InitOutcome, AppError>
where
    W: RepositoryFilesystem,
    T: TemplateStore,
{
    let mut warnings = Vec::new();

    output::step("📋 Project details");
    let Answers { project, access, token_saved, .. } =
        answers::collect(prompter, credentials, &options.answers)?;

    output::step("📁 Creating project structure");
    let scaffold = scaffold::execute(ctx, &project, &access)?;
    for backup in &scaffold.backups {
        output::warn(&format!("Existing file backed up to {}", backup));
    }
    output::success(&format!(
        "Wrote {} file(s), {} unchanged",
        scaffold.written(),
        scaffold.unchanged.len()
    ));

    output::step("🔧 Setting up tooling");
    let tooling = tooling::execute(tools, options.install, &mut warnings);

    let theme = if options.theme {
        output::step("🎨 Setting up Shopify theme");
        let root = ctx.workspace().resolve_path("");
        theme_setup::execute(prompter, tools.shopify, &access, &project, &root, &mut warnings)?
    } else {
        None
    };

    let github = if options.github
        && prompter.confirm("Set up a GitHub repository and release secrets?", true)?
    {
        output::step("🐙 Setting up GitHub");
        let package_name = project.package_name();
        let request = GitHubRequest {
            package_name: &package_name,
            access: &access,
            preview_theme: theme.as_ref().and_then(ThemeOutcome::preview_theme),
        };
        github_setup::execute(
            ctx.workspace(),
            prompter,
            tools,
            ctx.settings(),
            &request,
            &mut warnings,
        )?
    } else {
        None
    };

    Ok(InitOutcome {
        project,
        access,
        token_saved,
        scaffold,
        tooling,
        theme,
        github,
        warnings,
    })
}
