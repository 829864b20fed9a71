use minijinja::Value;

use crate::domain::AppError;

/// A rendered file ready to be written into a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Path relative to the project root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
    /// Holds secrets; written readable by the owner only.
    pub private: bool,
}

impl ScaffoldFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into(), private: false }
    }

    pub fn private(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into(), private: true }
    }
}

/// Port for the bundled project templates.
pub trait TemplateStore {
    /// Render one template by its asset name (e.g. `workflows/release.yml`).
    fn render(&self, name: &str, context: &Value) -> Result<String, AppError>;
}
