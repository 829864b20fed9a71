//! `configs`: inspect and prune the credential cache.

use chrono::{DateTime, Utc};

use crate::domain::store::SHOPIFY_DOMAIN_SUFFIX;
use crate::domain::{AppError, StoreDomain, mask_token};
use crate::ports::CredentialStore;

/// One cached store, safe to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedStoreSummary {
    pub slug: String,
    pub domain: String,
    pub project_name: Option<String>,
    pub masked_token: String,
    pub saved_at: DateTime<Utc>,
}

/// Cached stores in slug order.
pub fn list(credentials: &dyn CredentialStore) -> Result<Vec<CachedStoreSummary>, AppError> {
    let cache = credentials.load()?;
    Ok(cache
        .entries()
        .map(|(slug, credential)| CachedStoreSummary {
            slug: slug.clone(),
            domain: format!("{}{}", slug, SHOPIFY_DOMAIN_SUFFIX),
            project_name: credential.project_name.clone(),
            masked_token: mask_token(&credential.token),
            saved_at: credential.saved_at,
        })
        .collect())
}

/// Remove a cached store. Accepts any form [`StoreDomain::parse`] accepts.
pub fn remove(credentials: &dyn CredentialStore, input: &str) -> Result<StoreDomain, AppError> {
    let store = StoreDomain::parse(input)?;
    if !credentials.remove(store.slug())? {
        return Err(AppError::StoreNotCached(store.slug().to_string()));
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoredCredential;
    use crate::testing::MemoryCredentialStore;

    #[test]
    fn list_masks_tokens_in_slug_order() {
        let credentials = MemoryCredentialStore::with(
            "zeta",
            StoredCredential::new("shptka_0123456789abcdef", Some("Zeta")),
        );
        credentials.save("acme", StoredCredential::new("short", None)).unwrap();

        let stores = list(&credentials).unwrap();

        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].slug, "acme");
        assert_eq!(stores[0].masked_token, "****");
        assert_eq!(stores[1].domain, "zeta.myshopify.com");
        assert_eq!(stores[1].masked_token, "shptka****cdef");
        assert_eq!(stores[1].project_name.as_deref(), Some("Zeta"));
    }

    #[test]
    fn remove_accepts_full_domain() {
        let credentials = MemoryCredentialStore::with("acme", StoredCredential::new("tok", None));

        let store = remove(&credentials, "https://acme.myshopify.com").unwrap();

        assert_eq!(store.slug(), "acme");
        assert!(credentials.load().unwrap().is_empty());
    }

    #[test]
    fn removing_unknown_store_fails() {
        let credentials = MemoryCredentialStore::new();
        let err = remove(&credentials, "acme").unwrap_err();
        assert!(matches!(err, AppError::StoreNotCached(_)));
    }
}
