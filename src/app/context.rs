use crate::domain::Settings;
use crate::ports::{
    GitHubPort, GitPort, PackageManagerPort, RepositoryFilesystem, ShopifyPort, TemplateStore,
};

/// Application context holding dependencies for command execution.
pub struct AppContext<W: RepositoryFilesystem, T: TemplateStore> {
    workspace: W,
    templates: T,
    settings: Settings,
}

impl<W: RepositoryFilesystem, T: TemplateStore> AppContext<W, T> {
    /// Create a new application context.
    pub fn new(workspace: W, templates: T, settings: Settings) -> Self {
        Self { workspace, templates, settings }
    }

    /// Get a reference to the project filesystem.
    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// External programs driven by `init`.
pub struct Toolchain<'a> {
    pub git: &'a dyn GitPort,
    pub github: &'a dyn GitHubPort,
    pub shopify: &'a dyn ShopifyPort,
    pub packages: &'a dyn PackageManagerPort,
}
