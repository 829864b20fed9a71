pub mod assets;
pub mod credential_file;
pub mod dialoguer_prompter;
pub mod filesystem;
pub mod git_command;
pub mod github_command;
pub mod package_manager_command;
pub mod shopify_command;

pub use assets::EmbeddedTemplateStore;
pub use credential_file::CredentialFileStore;
pub use dialoguer_prompter::DialoguerPrompter;
pub use filesystem::FilesystemStore;
pub use git_command::GitCommandAdapter;
pub use github_command::GitHubCommandAdapter;
pub use package_manager_command::PackageManagerCommandAdapter;
pub use shopify_command::ShopifyCommandAdapter;
