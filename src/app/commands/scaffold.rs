//! Project scaffolding: theme directories, templated configuration, `.env`.
//!
//! Existing files are never silently replaced. When the rendered content
//! differs from what is on disk the old file is copied to `<path>.backup`
//! first; identical files are left alone.

use minijinja::{Value, context};
use serde_json::Value as JsonValue;
use sha2::{Digest, Sha256};

use crate::app::AppContext;
use crate::domain::{AppError, PLACEHOLDER_REPO_URL, ProjectName, Settings, StoreAccess};
use crate::ports::{RepositoryFilesystem, ScaffoldFile, TemplateStore};

/// Standard Online Store 2.0 theme directories.
pub const THEME_DIRECTORIES: [&str; 7] =
    ["assets", "config", "layout", "locales", "sections", "snippets", "templates"];

pub const SUPPORT_DIRECTORIES: [&str; 2] = [".github/workflows", ".husky"];

pub const ENV_FILE: &str = ".env";
pub const README_FILE: &str = "README.md";
pub const PACKAGE_JSON: &str = "package.json";
pub const COMMIT_MSG_HOOK: &str = ".husky/commit-msg";
pub const BACKUP_SUFFIX: &str = ".backup";

/// Template name to project path, for every file written by `init`.
pub const PROJECT_FILES: [(&str, &str); 7] = [
    ("release.config.js", "release.config.js"),
    ("commitlint.config.js", "commitlint.config.js"),
    ("gitignore", ".gitignore"),
    ("README.md", README_FILE),
    ("workflows/release.yml", ".github/workflows/release.yml"),
    ("workflows/theme-preview.yml", ".github/workflows/theme-preview.yml"),
    ("husky/commit-msg", COMMIT_MSG_HOOK),
];

/// Subset of [`PROJECT_FILES`] refreshed by `sync`.
pub const RELEASE_FILES: [(&str, &str); 4] = [
    ("workflows/release.yml", ".github/workflows/release.yml"),
    ("workflows/theme-preview.yml", ".github/workflows/theme-preview.yml"),
    ("release.config.js", "release.config.js"),
    ("commitlint.config.js", "commitlint.config.js"),
];

/// What happened to each path during a scaffold or sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub directories: Vec<String>,
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
    pub backups: Vec<String>,
}

impl ScaffoldReport {
    pub fn written(&self) -> usize {
        self.created.len() + self.updated.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

/// Template variables for a project.
pub fn project_context(
    project: &ProjectName,
    store_domain: &str,
    repo_url: &str,
    settings: &Settings,
) -> Value {
    context! {
        client_name => project.as_str(),
        store_domain => store_domain,
        repo_name => project.package_name(),
        repo_url => repo_url,
        ..release_context(settings)
    }
}

/// Template variables for release tooling only; no project identity needed.
pub fn release_context(settings: &Settings) -> Value {
    let manager = settings.package_manager;
    context! {
        default_branch => &settings.default_branch,
        release_branch => &settings.release_branch,
        package_manager => manager.program(),
        install_command => manager.ci_install_command(),
        exec_command => manager.exec_command(),
        hook_runner => manager.hook_runner(),
    }
}

/// Render `package.json`, setting `name` and `description` from the project.
pub fn render_package_json<T: TemplateStore>(
    templates: &T,
    project: &ProjectName,
    context: &Value,
) -> Result<String, AppError> {
    let rendered = templates.render(PACKAGE_JSON, context)?;
    let mut manifest: JsonValue =
        serde_json::from_str(&rendered).map_err(|e| AppError::ParseError {
            what: PACKAGE_JSON.into(),
            details: e.to_string(),
        })?;

    let object = manifest.as_object_mut().ok_or_else(|| AppError::ParseError {
        what: PACKAGE_JSON.into(),
        details: "expected a JSON object".into(),
    })?;
    object.insert("name".into(), JsonValue::String(project.package_name()));
    object.insert(
        "description".into(),
        JsonValue::String(format!("{} Shopify theme", project.as_str())),
    );

    let mut content = serde_json::to_string_pretty(&manifest).map_err(|e| {
        AppError::ParseError { what: PACKAGE_JSON.into(), details: e.to_string() }
    })?;
    content.push('\n');
    Ok(content)
}

/// Render a table of templates into files.
pub fn render_files<T: TemplateStore>(
    templates: &T,
    files: &[(&str, &str)],
    context: &Value,
) -> Result<Vec<ScaffoldFile>, AppError> {
    files
        .iter()
        .map(|(template, path)| {
            Ok(ScaffoldFile::new(*path, templates.render(template, context)?))
        })
        .collect()
}

pub fn env_file(access: &StoreAccess) -> ScaffoldFile {
    ScaffoldFile::private(
        ENV_FILE,
        format!(
            "SHOPIFY_FLAG_STORE={}\nSHOPIFY_CLI_THEME_TOKEN={}\n",
            access.store.domain(),
            access.token
        ),
    )
}

/// Write the full project skeleton into the workspace root.
pub fn execute<W, T>(
    ctx: &AppContext<W, T>,
    project: &ProjectName,
    access: &StoreAccess,
) -> Result<ScaffoldReport, AppError>
where
    W: RepositoryFilesystem,
    T: TemplateStore,
{
    let workspace = ctx.workspace();
    let mut report = ScaffoldReport::default();

    for dir in THEME_DIRECTORIES {
        if workspace.is_dir(dir) {
            continue;
        }
        workspace.create_dir_all(dir)?;
        workspace.write_file(&format!("{}/.gitkeep", dir), "")?;
        report.directories.push(dir.to_string());
    }
    for dir in SUPPORT_DIRECTORIES {
        if !workspace.is_dir(dir) {
            workspace.create_dir_all(dir)?;
            report.directories.push(dir.to_string());
        }
    }

    let context =
        project_context(project, &access.store.domain(), PLACEHOLDER_REPO_URL, ctx.settings());
    let mut files =
        vec![ScaffoldFile::new(PACKAGE_JSON, render_package_json(ctx.templates(), project, &context)?)];
    files.extend(render_files(ctx.templates(), &PROJECT_FILES, &context)?);
    files.push(env_file(access));

    write_files(workspace, &files, &mut report)?;
    workspace.set_executable(COMMIT_MSG_HOOK)?;

    Ok(report)
}

/// Write each file with the backup policy, recording outcomes in `report`.
pub fn write_files<W: RepositoryFilesystem>(
    workspace: &W,
    files: &[ScaffoldFile],
    report: &mut ScaffoldReport,
) -> Result<(), AppError> {
    for file in files {
        match write_with_backup(workspace, file)? {
            WriteOutcome::Created => report.created.push(file.path.clone()),
            WriteOutcome::Updated => {
                report.backups.push(backup_path(&file.path));
                report.updated.push(file.path.clone());
            }
            WriteOutcome::Unchanged => report.unchanged.push(file.path.clone()),
        }
    }
    Ok(())
}

fn write_with_backup<W: RepositoryFilesystem>(
    workspace: &W,
    file: &ScaffoldFile,
) -> Result<WriteOutcome, AppError> {
    let write = |content: &str| {
        if file.private {
            workspace.write_private_file(&file.path, content)
        } else {
            workspace.write_file(&file.path, content)
        }
    };

    if !workspace.file_exists(&file.path) {
        write(&file.content)?;
        return Ok(WriteOutcome::Created);
    }

    let existing = workspace.read_file(&file.path)?;
    if hash_content(&existing) == hash_content(&file.content) {
        return Ok(WriteOutcome::Unchanged);
    }

    workspace.copy_file(&file.path, &backup_path(&file.path))?;
    write(&file.content)?;
    Ok(WriteOutcome::Updated)
}

fn backup_path(path: &str) -> String {
    format!("{}{}", path, BACKUP_SUFFIX)
}

fn hash_content(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Swap the README placeholder for the real repository URL.
///
/// Returns `false` when there is no README or it no longer has the placeholder.
pub fn update_readme_repo_url<W: RepositoryFilesystem>(
    workspace: &W,
    repo_url: &str,
) -> Result<bool, AppError> {
    if !workspace.file_exists(README_FILE) {
        return Ok(false);
    }
    let content = workspace.read_file(README_FILE)?;
    if !content.contains(PLACEHOLDER_REPO_URL) {
        return Ok(false);
    }
    workspace.write_file(README_FILE, &content.replace(PLACEHOLDER_REPO_URL, repo_url))?;
    Ok(true)
}
