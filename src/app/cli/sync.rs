//! Sync command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::commands::sync::{SyncOptions, next_steps};
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Project directory (defaults to current directory)
    #[arg(long)]
    path: Option<PathBuf>,
    /// Delete an existing .github directory without asking
    #[arg(long, conflicts_with = "keep_github")]
    clean_github: bool,
    /// Keep an existing .github directory without asking
    #[arg(long)]
    keep_github: bool,
}

impl SyncArgs {
    fn options(&self) -> SyncOptions {
        let clean_github = match (self.clean_github, self.keep_github) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        SyncOptions { clean_github }
    }
}

pub fn run_sync(args: SyncArgs) -> Result<(), AppError> {
    let report = crate::app::api::sync(args.path.as_deref(), args.options())?;
    let files = &report.files;

    if files.written() == 0 {
        println!("✅ Release workflows already up to date");
    } else {
        println!("✅ Synced release workflows and configuration");
        for path in files.created.iter().chain(&files.updated) {
            println!("  • {}", path);
        }
    }
    if !files.backups.is_empty() {
        println!("  Backups: {}", files.backups.join(", "));
    }

    println!("\nNext steps:");
    for command in next_steps() {
        println!("  {}", command);
    }
    Ok(())
}
