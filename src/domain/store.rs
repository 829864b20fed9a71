use std::fmt;

use url::Url;

use super::AppError;

pub const SHOPIFY_DOMAIN_SUFFIX: &str = ".myshopify.com";

/// A Shopify store identified by its `*.myshopify.com` slug.
///
/// Guarantees:
/// - Slug is non-empty, lowercase ASCII alphanumeric or `-`
/// - Slug does not start or end with `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreDomain {
    slug: String,
}

impl StoreDomain {
    /// Accepts `acme`, `acme.myshopify.com`, or a full store URL.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidStore(input.to_string());
        let trimmed = input.trim().to_lowercase();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let host = if trimmed.contains("://") {
            let url = Url::parse(&trimmed).map_err(|_| invalid())?;
            url.host_str().ok_or_else(invalid)?.to_string()
        } else {
            trimmed.trim_end_matches('/').to_string()
        };

        let slug = match host.strip_suffix(SHOPIFY_DOMAIN_SUFFIX) {
            Some(slug) => slug.to_string(),
            None if host.contains('.') => return Err(invalid()),
            None => host,
        };

        if !is_valid_slug(&slug) {
            return Err(invalid());
        }

        Ok(Self { slug })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn domain(&self) -> String {
        format!("{}{}", self.slug, SHOPIFY_DOMAIN_SUFFIX)
    }

    pub fn admin_url(&self) -> String {
        format!("https://{}/admin", self.domain())
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// A store together with the theme access token used to reach it.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreAccess {
    pub store: StoreDomain,
    pub token: String,
}

impl StoreAccess {
    pub fn new(store: StoreDomain, token: &str) -> Self {
        Self { store, token: token.to_string() }
    }
}

impl fmt::Debug for StoreAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreAccess")
            .field("store", &self.store)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for StoreDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.domain())
    }
}
