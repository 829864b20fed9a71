mod credential_store;
mod git;
mod github;
mod package_manager;
mod prompter;
mod repository_filesystem;
mod shopify;
mod template_store;

pub use credential_store::CredentialStore;
pub use git::GitPort;
pub use github::GitHubPort;
pub use package_manager::PackageManagerPort;
pub use prompter::Prompter;
pub use repository_filesystem::RepositoryFilesystem;
pub use shopify::ShopifyPort;
pub use template_store::{ScaffoldFile, TemplateStore};
