use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, PackageManager};
use crate::ports::PackageManagerPort;

/// Runs the configured Node package manager with output attached to the terminal.
#[derive(Debug, Clone)]
pub struct PackageManagerCommandAdapter {
    root: PathBuf,
    manager: PackageManager,
}

impl PackageManagerCommandAdapter {
    pub fn new(root: PathBuf, manager: PackageManager) -> Self {
        Self { root, manager }
    }

    fn run_attached(&self, program: &str, args: &[&str]) -> Result<(), AppError> {
        debug!(command = %format!("{} {}", program, args.join(" ")), "running package manager");

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|e| AppError::tool_error(program, format!("Failed to execute: {}", e)))?;

        if !status.success() {
            return Err(AppError::tool_error(
                program,
                format!("'{} {}' exited with {}", program, args.join(" "), status),
            ));
        }
        Ok(())
    }
}

impl PackageManagerPort for PackageManagerCommandAdapter {
    fn install(&self) -> Result<(), AppError> {
        self.run_attached(self.manager.program(), &["install"])
    }

    fn exec(&self, args: &[&str]) -> Result<(), AppError> {
        let (program, prefix) = self.manager.exec_prefix();
        let full_args: Vec<&str> = prefix.iter().copied().chain(args.iter().copied()).collect();
        self.run_attached(program, &full_args)
    }
}
