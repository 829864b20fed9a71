use std::path::Path;
use std::sync::Mutex;

use crate::domain::{AppError, StoreAccess, ThemeInfo, ThemeRole};
use crate::ports::ShopifyPort;

const FIRST_PUSHED_ID: u64 = 1000;

/// In-memory store; pushed themes are appended to the theme list.
#[derive(Default)]
pub struct FakeShopify {
    installed: bool,
    themes: Mutex<Vec<ThemeInfo>>,
    pulled: Mutex<Vec<u64>>,
    pushed: Mutex<Vec<String>>,
    push_fails: Mutex<bool>,
}

impl FakeShopify {
    pub fn with_themes(themes: Vec<ThemeInfo>) -> Self {
        Self { installed: true, themes: Mutex::new(themes), ..Default::default() }
    }

    pub fn not_installed() -> Self {
        Self::default()
    }

    pub fn set_themes(&self, themes: Vec<ThemeInfo>) {
        *self.themes.lock().unwrap() = themes;
    }

    pub fn fail_push(&self) {
        *self.push_fails.lock().unwrap() = true;
    }

    pub fn pulled(&self) -> Vec<u64> {
        self.pulled.lock().unwrap().clone()
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.lock().unwrap().clone()
    }
}

impl ShopifyPort for FakeShopify {
    fn is_installed(&self) -> bool {
        self.installed
    }

    fn list_themes(&self, _access: &StoreAccess) -> Result<Vec<ThemeInfo>, AppError> {
        Ok(self.themes.lock().unwrap().clone())
    }

    fn pull_theme(&self, _access: &StoreAccess, theme_id: u64, _path: &Path) -> Result<(), AppError> {
        self.pulled.lock().unwrap().push(theme_id);
        Ok(())
    }

    fn push_unpublished(
        &self,
        _access: &StoreAccess,
        name: &str,
        _path: &Path,
    ) -> Result<ThemeInfo, AppError> {
        if *self.push_fails.lock().unwrap() {
            return Err(AppError::tool_error("shopify", "theme push rejected"));
        }
        self.pushed.lock().unwrap().push(name.to_string());
        let mut themes = self.themes.lock().unwrap();
        let theme = ThemeInfo {
            id: FIRST_PUSHED_ID + themes.len() as u64,
            name: name.to_string(),
            role: ThemeRole::Unpublished,
        };
        themes.push(theme.clone());
        Ok(theme)
    }
}
