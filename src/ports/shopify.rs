use std::path::Path;

use crate::domain::{AppError, StoreAccess, ThemeInfo};

/// Port over the Shopify CLI theme commands.
///
/// Every store call authenticates with the theme access token in [`StoreAccess`].
pub trait ShopifyPort {
    /// Check whether the `shopify` binary can be executed.
    fn is_installed(&self) -> bool;

    /// List every theme in the store.
    fn list_themes(&self, access: &StoreAccess) -> Result<Vec<ThemeInfo>, AppError>;

    /// Download a theme into `path`.
    fn pull_theme(&self, access: &StoreAccess, theme_id: u64, path: &Path) -> Result<(), AppError>;

    /// Upload `path` as a new unpublished theme and return it.
    fn push_unpublished(
        &self,
        access: &StoreAccess,
        name: &str,
        path: &Path,
    ) -> Result<ThemeInfo, AppError>;
}
