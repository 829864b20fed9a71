//! mili-release: scaffold Shopify theme projects wired for semantic-release,
//! commitlint and GitHub Actions.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{init, init_at, list_configs, remove_config, sync};
pub use app::commands::configs::CachedStoreSummary;
pub use app::commands::init::{InitOptions, InitOutcome};
pub use app::commands::sync::{SyncOptions, SyncReport};
pub use domain::AppError;
