mod fake_git;
mod fake_github;
mod fake_package_manager;
mod fake_shopify;
mod memory_credentials;
mod scripted_prompter;

use tempfile::TempDir;

use crate::adapters::{EmbeddedTemplateStore, FilesystemStore};
use crate::app::{AppContext, Toolchain};
use crate::domain::Settings;

pub use fake_git::FakeGit;
pub use fake_github::FakeGitHub;
pub use fake_package_manager::FakePackageManager;
pub use fake_shopify::FakeShopify;
pub use memory_credentials::MemoryCredentialStore;
pub use scripted_prompter::ScriptedPrompter;

/// Filesystem workspace rooted in a fresh temp directory.
pub fn test_workspace() -> (TempDir, FilesystemStore) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let workspace = FilesystemStore::new(dir.path().to_path_buf());
    (dir, workspace)
}

/// Context over a temp directory with the bundled templates and default settings.
pub fn test_context() -> (TempDir, AppContext<FilesystemStore, EmbeddedTemplateStore>) {
    let (dir, workspace) = test_workspace();
    let templates = EmbeddedTemplateStore::new().expect("bundled templates must load");
    (dir, AppContext::new(workspace, templates, Settings::default()))
}

/// One fake per external program, all in their happy-path state.
pub struct FakeTools {
    pub git: FakeGit,
    pub github: FakeGitHub,
    pub shopify: FakeShopify,
    pub packages: FakePackageManager,
}

impl FakeTools {
    pub fn new() -> Self {
        Self {
            git: FakeGit::new(),
            github: FakeGitHub::new(),
            shopify: FakeShopify::with_themes(Vec::new()),
            packages: FakePackageManager::default(),
        }
    }

    pub fn toolchain(&self) -> Toolchain<'_> {
        Toolchain {
            git: &self.git,
            github: &self.github,
            shopify: &self.shopify,
            packages: &self.packages,
        }
    }
}
