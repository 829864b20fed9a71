//! API Facade
//!
//! Wires the command implementations to the real adapters: the local
//! filesystem, terminal prompts, and the `git`, `gh`, `shopify` and Node
//! package manager executables.

use std::env;
use std::path::Path;

use crate::adapters::{
    CredentialFileStore, DialoguerPrompter, EmbeddedTemplateStore, FilesystemStore,
    GitCommandAdapter, GitHubCommandAdapter, PackageManagerCommandAdapter, ShopifyCommandAdapter,
};
use crate::app::commands::configs::{self, CachedStoreSummary};
use crate::app::commands::init::{self, InitOptions, InitOutcome};
use crate::app::commands::sync::{self, SyncOptions, SyncReport};
use crate::app::config::{load_settings, tool_home};
use crate::app::{AppContext, Toolchain};
use crate::domain::{AppError, StoreDomain};

fn create_context(
    root: &Path,
    home: &Path,
) -> Result<AppContext<FilesystemStore, EmbeddedTemplateStore>, AppError> {
    let settings = load_settings(home)?;
    let workspace = FilesystemStore::new(root.to_path_buf());
    let templates = EmbeddedTemplateStore::new()?;
    Ok(AppContext::new(workspace, templates, settings))
}

// =============================================================================
// Init Command API
// =============================================================================

/// Scaffold a theme project in the current directory.
pub fn init(options: &InitOptions) -> Result<InitOutcome, AppError> {
    let cwd = env::current_dir()?;
    init_at(&cwd, &tool_home()?, options)
}

/// Scaffold a theme project in `root`, reading settings and credentials from `home`.
pub fn init_at(root: &Path, home: &Path, options: &InitOptions) -> Result<InitOutcome, AppError> {
    let ctx = create_context(root, home)?;
    let credentials = CredentialFileStore::in_home(home);
    let prompter = DialoguerPrompter::new();

    let git = GitCommandAdapter::new(root.to_path_buf());
    let github = GitHubCommandAdapter::new(root.to_path_buf());
    let shopify = ShopifyCommandAdapter::new(root.to_path_buf());
    let packages =
        PackageManagerCommandAdapter::new(root.to_path_buf(), ctx.settings().package_manager);
    let tools = Toolchain { git: &git, github: &github, shopify: &shopify, packages: &packages };

    init::execute(&ctx, &prompter, &credentials, &tools, options)
}

// =============================================================================
// Sync Command API
// =============================================================================

/// Refresh release workflows and configuration in `path` (default: current directory).
pub fn sync(path: Option<&Path>, options: SyncOptions) -> Result<SyncReport, AppError> {
    let root = match path {
        Some(path) => path.to_path_buf(),
        None => env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(AppError::config_error(format!(
            "Project directory '{}' does not exist",
            root.display()
        )));
    }

    let ctx = create_context(&root, &tool_home()?)?;
    sync::execute(&ctx, &DialoguerPrompter::new(), options)
}

// =============================================================================
// Credential Cache API
// =============================================================================

/// Cached store configurations in slug order.
pub fn list_configs() -> Result<Vec<CachedStoreSummary>, AppError> {
    configs::list(&CredentialFileStore::in_home(&tool_home()?))
}

/// Remove one cached store configuration.
pub fn remove_config(store: &str) -> Result<StoreDomain, AppError> {
    configs::remove(&CredentialFileStore::in_home(&tool_home()?), store)
}
