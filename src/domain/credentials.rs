use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A theme token remembered for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl StoredCredential {
    pub fn new(token: &str, project_name: Option<&str>) -> Self {
        Self {
            token: token.to_string(),
            project_name: project_name.map(str::to_string),
            saved_at: Utc::now(),
        }
    }
}

/// Credential cache keyed by store slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialCache {
    stores: BTreeMap<String, StoredCredential>,
}

impl CredentialCache {
    pub fn get(&self, slug: &str) -> Option<&StoredCredential> {
        self.stores.get(slug)
    }

    pub fn insert(&mut self, slug: &str, credential: StoredCredential) {
        self.stores.insert(slug.to_string(), credential);
    }

    pub fn remove(&mut self, slug: &str) -> bool {
        self.stores.remove(slug).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.stores.keys().cloned().collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &StoredCredential)> {
        self.stores.iter()
    }
}

/// Hide most of a token for display.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", head, tail)
}
