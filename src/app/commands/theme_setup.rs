//! Shopify theme step of `init`: pull an existing theme or create a staging theme.

use std::path::Path;

use crate::app::output;
use crate::domain::{
    AppError, ProjectName, StoreAccess, ThemeInfo, find_theme_by_name, theme_name,
};
use crate::ports::{Prompter, ShopifyPort};

pub const STAGING_LABEL: &str = "Staging";

const ACTIONS: [&str; 3] = [
    "Pull an existing theme from the store",
    "Create an unpublished staging theme from this project",
    "Skip theme setup",
];

/// Themes touched during the step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeOutcome {
    pub pulled: Option<ThemeInfo>,
    pub staging: Option<ThemeInfo>,
}

impl ThemeOutcome {
    /// Theme whose id is uploaded as `SHOPIFY_THEME_ID`.
    pub fn preview_theme(&self) -> Option<&ThemeInfo> {
        self.staging.as_ref()
    }
}

/// Run the interactive theme step.
///
/// Returns `Ok(None)` when the Shopify CLI is missing or the user skips.
/// CLI failures are recorded in `warnings`; only cancellation is an error.
pub fn execute(
    prompter: &dyn Prompter,
    shopify: &dyn ShopifyPort,
    access: &StoreAccess,
    project: &ProjectName,
    root: &Path,
    warnings: &mut Vec<String>,
) -> Result<Option<ThemeOutcome>, AppError> {
    if !shopify.is_installed() {
        output::push_warning(
            warnings,
            "Shopify CLI not found, skipping theme setup. Install it with: npm install -g @shopify/cli @shopify/theme"
                .to_string(),
        );
        return Ok(None);
    }

    let items: Vec<String> = ACTIONS.iter().map(|s| s.to_string()).collect();
    let mut outcome = ThemeOutcome::default();

    match prompter.select("How do you want to set up the theme?", &items, 0)? {
        0 => {
            let Some(theme) = pull_existing(prompter, shopify, access, root, warnings)? else {
                return Ok(None);
            };
            outcome.pulled = Some(theme);
            if prompter.confirm("Create an unpublished staging theme from the pulled files?", true)?
            {
                outcome.staging = create_staging(shopify, access, project, root, warnings);
            }
        }
        1 => outcome.staging = create_staging(shopify, access, project, root, warnings),
        _ => {
            output::info("Skipping theme setup");
            return Ok(None);
        }
    }

    Ok(Some(outcome))
}

fn pull_existing(
    prompter: &dyn Prompter,
    shopify: &dyn ShopifyPort,
    access: &StoreAccess,
    root: &Path,
    warnings: &mut Vec<String>,
) -> Result<Option<ThemeInfo>, AppError> {
    let themes = match shopify.list_themes(access) {
        Ok(themes) => themes,
        Err(e) => {
            output::push_warning(warnings, format!("Could not list themes: {}", e));
            return Ok(None);
        }
    };
    if themes.is_empty() {
        output::push_warning(warnings, format!("No themes found in {}", access.store));
        return Ok(None);
    }

    let labels: Vec<String> = themes.iter().map(ThemeInfo::label).collect();
    let default = themes.iter().position(ThemeInfo::is_live).unwrap_or(0);
    let index = prompter.select("Which theme do you want to pull?", &labels, default)?;
    let Some(theme) = themes.get(index) else {
        return Err(AppError::Prompt(format!("theme selection {} out of range", index)));
    };

    if theme.is_live() {
        output::info("Pulling the live theme. Local changes will not go live until released.");
    }
    match shopify.pull_theme(access, theme.id, root) {
        Ok(()) => {
            output::success(&format!("Pulled {}", theme.label()));
            Ok(Some(theme.clone()))
        }
        Err(e) => {
            output::push_warning(warnings, format!("Theme pull failed: {}", e));
            Ok(None)
        }
    }
}

/// Reuse or create `"{project} - Staging"`.
fn create_staging(
    shopify: &dyn ShopifyPort,
    access: &StoreAccess,
    project: &ProjectName,
    root: &Path,
    warnings: &mut Vec<String>,
) -> Option<ThemeInfo> {
    let name = theme_name(project.as_str(), STAGING_LABEL);

    match shopify.list_themes(access) {
        Ok(themes) => {
            if let Some(existing) = find_theme_by_name(&themes, &name) {
                output::info(&format!("Using existing staging theme {}", existing.label()));
                return Some(existing.clone());
            }
        }
        Err(e) => tracing::debug!(error = %e, "theme list failed before staging push"),
    }

    match shopify.push_unpublished(access, &name, root) {
        Ok(theme) => {
            output::success(&format!("Created staging theme {}", theme.label()));
            Some(theme)
        }
        Err(e) => {
            output::push_warning(warnings, format!("Could not create staging theme: {}", e));
            None
        }
    }
}
