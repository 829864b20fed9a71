use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shopify rejects theme names longer than this.
pub const MAX_THEME_NAME_LEN: usize = 50;

const NAME_SEPARATOR: &str = " - ";

/// Role of a theme within a store as reported by the Shopify CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeRole {
    Live,
    Unpublished,
    Development,
    Demo,
    Other(String),
}

impl ThemeRole {
    pub fn as_str(&self) -> &str {
        match self {
            ThemeRole::Live => "live",
            ThemeRole::Unpublished => "unpublished",
            ThemeRole::Development => "development",
            ThemeRole::Demo => "demo",
            ThemeRole::Other(value) => value,
        }
    }
}

impl From<&str> for ThemeRole {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "live" | "main" => ThemeRole::Live,
            "unpublished" => ThemeRole::Unpublished,
            "development" => ThemeRole::Development,
            "demo" => ThemeRole::Demo,
            other => ThemeRole::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ThemeRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ThemeRole::from(s.as_str()))
    }
}

impl Serialize for ThemeRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A theme as listed by `shopify theme list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeInfo {
    pub id: u64,
    pub name: String,
    pub role: ThemeRole,
}

impl ThemeInfo {
    pub fn is_live(&self) -> bool {
        self.role == ThemeRole::Live
    }

    /// Label used in selection menus.
    pub fn label(&self) -> String {
        format!("{} (#{}) [{}]", self.name, self.id, self.role.as_str())
    }
}

impl fmt::Display for ThemeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Compose `"{project} - {label}"`, truncating the project part to fit
/// [`MAX_THEME_NAME_LEN`] characters.
pub fn theme_name(project: &str, label: &str) -> String {
    let label_len = label.chars().count();
    let reserved = label_len + NAME_SEPARATOR.len();

    if reserved >= MAX_THEME_NAME_LEN {
        let label: String = label.chars().take(MAX_THEME_NAME_LEN).collect();
        let trimmed = trim_dangling(&label);
        return if trimmed.is_empty() { label } else { trimmed.to_string() };
    }

    let budget = MAX_THEME_NAME_LEN - reserved;
    let project: String = project.trim().chars().take(budget).collect();
    let project = trim_dangling(&project);

    if project.is_empty() {
        return label.to_string();
    }
    format!("{}{}{}", project, NAME_SEPARATOR, label)
}

fn trim_dangling(value: &str) -> &str {
    value.trim_end_matches(|c: char| c.is_whitespace() || c == '-')
}

/// Exact-name lookup; the first match wins.
pub fn find_theme_by_name<'a>(themes: &'a [ThemeInfo], name: &str) -> Option<&'a ThemeInfo> {
    themes.iter().find(|theme| theme.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn theme(id: u64, name: &str, role: &str) -> ThemeInfo {
        ThemeInfo { id, name: name.to_string(), role: ThemeRole::from(role) }
    }

    #[test]
    fn short_names_are_composed_verbatim() {
        assert_eq!(theme_name("Acme", "Staging"), "Acme - Staging");
    }

    #[test]
    fn long_project_is_truncated_to_limit() {
        let project = "The Extraordinarily Long Named Outdoor Equipment Company";
        let name = theme_name(project, "Staging");
        assert_eq!(name.chars().count(), MAX_THEME_NAME_LEN);
        assert!(name.ends_with(" - Staging"));
        assert!(name.starts_with("The Extraordinarily"));
    }

    #[test]
    fn truncation_trims_dangling_separators() {
        // 40 chars of budget: the cut lands right after "xxx -".
        let project = format!("{} - tail", "x".repeat(38));
        let name = theme_name(&project, "Staging");
        assert!(!name.contains("- -"));
        assert_eq!(name, format!("{} - Staging", "x".repeat(38)));
    }

    #[test]
    fn multibyte_project_is_cut_on_char_boundary() {
        let project = "ü".repeat(60);
        let name = theme_name(&project, "Preview");
        assert_eq!(name.chars().count(), MAX_THEME_NAME_LEN);
    }

    #[test]
    fn long_label_cut_at_separator_drops_dangling_hyphen() {
        // The cut lands inside the " - " separator.
        let label = format!("{} - Summer Sale", "x".repeat(47));
        let name = theme_name("Acme", &label);
        assert_eq!(name, "x".repeat(47));
    }

    #[test]
    fn label_of_only_separators_is_kept_rather_than_emptied() {
        let label = "-".repeat(60);
        assert_eq!(theme_name("Acme", &label), "-".repeat(MAX_THEME_NAME_LEN));
    }

    #[test]
    fn blank_project_falls_back_to_label() {
        assert_eq!(theme_name("   ", "Staging"), "Staging");
    }

    #[test]
    fn theme_list_json_is_parsed() {
        let json = r#"[{"id":1,"name":"Dawn","role":"live"},{"id":2,"name":"Acme - Staging","role":"unpublished"},{"id":3,"name":"Dev","role":"development"}]"#;
        let themes: Vec<ThemeInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(themes.len(), 3);
        assert!(themes[0].is_live());
        assert_eq!(themes[1].role, ThemeRole::Unpublished);
        assert_eq!(themes[2].label(), "Dev (#3) [development]");
    }

    #[test]
    fn find_theme_by_name_requires_exact_match() {
        let themes = vec![theme(1, "Dawn", "live"), theme(2, "Acme - Staging", "unpublished")];
        assert_eq!(find_theme_by_name(&themes, "Acme - Staging").map(|t| t.id), Some(2));
        assert!(find_theme_by_name(&themes, "acme - staging").is_none());
    }

    proptest! {
        #[test]
        fn composed_names_never_exceed_limit(project in ".{0,120}", label in "[A-Za-z -]{1,80}") {
            let name = theme_name(&project, &label);
            prop_assert!(name.chars().count() <= MAX_THEME_NAME_LEN);
        }

        #[test]
        fn truncated_labels_never_end_in_separator(
            project in ".{0,40}",
            label in "[A-Za-z][A-Za-z -]{49,80}",
        ) {
            let name = theme_name(&project, &label);
            prop_assert!(!name.ends_with(|c: char| c.is_whitespace() || c == '-'));
            prop_assert!(label.starts_with(&name));
        }
    }
}
