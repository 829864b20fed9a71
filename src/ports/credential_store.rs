use crate::domain::{AppError, CredentialCache, StoredCredential};

/// Port for the per-user credential cache.
pub trait CredentialStore {
    /// Load the whole cache; an absent cache is empty.
    fn load(&self) -> Result<CredentialCache, AppError>;

    /// Insert or replace the credential for a store slug.
    fn save(&self, slug: &str, credential: StoredCredential) -> Result<(), AppError>;

    /// Remove a store. Returns `true` if it was present.
    fn remove(&self, slug: &str) -> Result<bool, AppError>;
}
