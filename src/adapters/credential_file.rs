//! JSON credential cache in the tool home directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, CredentialCache, StoredCredential};
use crate::ports::CredentialStore;

use super::filesystem::write_private;

pub const CREDENTIALS_FILE: &str = "credentials.json";

#[derive(Debug, Clone)]
pub struct CredentialFileStore {
    path: PathBuf,
}

impl CredentialFileStore {
    /// Store backed by `<home>/credentials.json`.
    pub fn in_home(home: &Path) -> Self {
        Self { path: home.join(CREDENTIALS_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, cache: &CredentialCache) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(cache).map_err(|e| AppError::ParseError {
            what: "credential cache".into(),
            details: e.to_string(),
        })?;
        write_private(&self.path, &format!("{}\n", content))?;
        debug!(path = %self.path.display(), "wrote credential cache");
        Ok(())
    }
}

impl CredentialStore for CredentialFileStore {
    fn load(&self) -> Result<CredentialCache, AppError> {
        if !self.path.exists() {
            return Ok(CredentialCache::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(CredentialCache::default());
        }
        serde_json::from_str(&content).map_err(|e| AppError::ParseError {
            what: format!("credential cache '{}'", self.path.display()),
            details: e.to_string(),
        })
    }

    fn save(&self, slug: &str, credential: StoredCredential) -> Result<(), AppError> {
        let mut cache = self.load()?;
        cache.insert(slug, credential);
        self.write(&cache)
    }

    fn remove(&self, slug: &str) -> Result<bool, AppError> {
        let mut cache = self.load()?;
        let removed = cache.remove(slug);
        if removed {
            self.write(&cache)?;
        }
        Ok(removed)
    }
}
