use crate::domain::AppError;

/// Port over the Node package manager of the project.
pub trait PackageManagerPort {
    /// Install dependencies declared in `package.json`.
    fn install(&self) -> Result<(), AppError>;

    /// Run a locally installed package binary (`npx <args>` and equivalents).
    fn exec(&self, args: &[&str]) -> Result<(), AppError>;
}
