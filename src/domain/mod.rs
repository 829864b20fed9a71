pub mod credentials;
pub mod error;
pub mod project;
pub mod repo;
pub mod settings;
pub mod store;
pub mod theme;

pub use credentials::{CredentialCache, StoredCredential, mask_token};
pub use error::AppError;
pub use project::ProjectName;
pub use repo::{BranchStrategy, PLACEHOLDER_REPO_URL, RemoteBranchInfo, RepoPath, RepoStrategy};
pub use settings::{PackageManager, SETTINGS_FILE, Settings};
pub use store::{StoreAccess, StoreDomain};
pub use theme::{MAX_THEME_NAME_LEN, ThemeInfo, ThemeRole, find_theme_by_name, theme_name};
