use std::sync::Mutex;

use crate::domain::{AppError, CredentialCache, StoredCredential};
use crate::ports::CredentialStore;

#[derive(Default)]
pub struct MemoryCredentialStore {
    cache: Mutex<CredentialCache>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(slug: &str, credential: StoredCredential) -> Self {
        let store = Self::new();
        store.cache.lock().unwrap().insert(slug, credential);
        store
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<CredentialCache, AppError> {
        Ok(self.cache.lock().unwrap().clone())
    }

    fn save(&self, slug: &str, credential: StoredCredential) -> Result<(), AppError> {
        self.cache.lock().unwrap().insert(slug, credential);
        Ok(())
    }

    fn remove(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.cache.lock().unwrap().remove(slug))
    }
}
