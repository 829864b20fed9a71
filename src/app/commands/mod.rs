pub mod answers;
pub mod branch_sync;
pub mod configs;
pub mod github_setup;
pub mod init;
pub mod scaffold;
pub mod sync;
pub mod theme_setup;
pub mod tooling;
