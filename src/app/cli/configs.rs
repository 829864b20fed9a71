//! Configs command implementation.

use clap::Subcommand;

use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ConfigsCommands {
    /// List cached store configurations
    #[clap(visible_alias = "ls")]
    List,
    /// Remove a cached store configuration
    #[clap(visible_alias = "rm")]
    Remove {
        /// Store name or <store>.myshopify.com
        store: String,
    },
}

pub fn run_configs(command: ConfigsCommands) -> Result<(), AppError> {
    match command {
        ConfigsCommands::List => {
            let stores = crate::app::api::list_configs()?;
            if stores.is_empty() {
                println!("No cached store configurations");
                return Ok(());
            }
            println!("Cached store configurations:");
            for store in stores {
                let project = store.project_name.as_deref().unwrap_or("-");
                println!(
                    "  • {}  project: {}  token: {}  saved: {}",
                    store.domain,
                    project,
                    store.masked_token,
                    store.saved_at.format("%Y-%m-%d %H:%M UTC")
                );
            }
        }
        ConfigsCommands::Remove { store } => {
            let removed = crate::app::api::remove_config(&store)?;
            println!("✅ Removed cached configuration for {}", removed);
        }
    }
    Ok(())
}
