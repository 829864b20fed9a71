use std::fmt;

use super::AppError;

/// A client/project name as entered by the user.
///
/// Guarantees:
/// - Non-empty after trimming surrounding whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidProjectName(input.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// npm package name derived from the project name.
    ///
    /// Lower-cases the name and collapses every whitespace run into a single `-`.
    pub fn package_name(&self) -> String {
        self.0.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_name_lowercases_and_hyphenates() {
        let name = ProjectName::parse("Acme  Store\tEU").unwrap();
        assert_eq!(name.package_name(), "acme-store-eu");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let name = ProjectName::parse("  Acme ").unwrap();
        assert_eq!(name.as_str(), "Acme");
        assert_eq!(name.package_name(), "acme");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(ProjectName::parse("   "), Err(AppError::InvalidProjectName(_))));
        assert!(ProjectName::parse("").is_err());
    }
}
