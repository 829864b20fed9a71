//! User-level tool settings (`config.toml` in the tool home directory).

use std::fmt;

use serde::Deserialize;

use super::AppError;

pub const SETTINGS_FILE: &str = "config.toml";

/// Package manager used to install dependencies and run `husky`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Program and leading arguments for running a locally installed binary.
    pub fn exec_prefix(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            PackageManager::Npm => ("npx", &[]),
            PackageManager::Pnpm => ("pnpm", &["exec"]),
            PackageManager::Yarn => ("yarn", &[]),
        }
    }

    /// Lockfile-respecting install used in CI.
    pub fn ci_install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm ci",
            PackageManager::Pnpm => "pnpm install --frozen-lockfile",
            PackageManager::Yarn => "yarn install --frozen-lockfile",
        }
    }

    /// `exec_prefix` as a single shell word sequence, e.g. `pnpm exec`.
    pub fn exec_command(&self) -> String {
        let (program, prefix) = self.exec_prefix();
        std::iter::once(program).chain(prefix.iter().copied()).collect::<Vec<_>>().join(" ")
    }

    /// Command prefix used inside git hook scripts.
    pub fn hook_runner(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npx --no --",
            PackageManager::Pnpm => "pnpm exec",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Branch created and pushed for brand-new repositories.
    pub default_branch: String,
    /// Branch that semantic-release publishes from.
    pub release_branch: String,
    pub package_manager: PackageManager,
    pub private_repos: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_branch: "development".to_string(),
            release_branch: "main".to_string(),
            package_manager: PackageManager::Npm,
            private_repos: true,
        }
    }
}

impl Settings {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        for (key, value) in
            [("default_branch", &self.default_branch), ("release_branch", &self.release_branch)]
        {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                return Err(AppError::config_error(format!(
                    "Invalid {} '{}' in {}: branch names must be non-empty without spaces",
                    key, value, SETTINGS_FILE
                )));
            }
        }
        Ok(())
    }
}
