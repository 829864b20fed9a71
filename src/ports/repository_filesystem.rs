//! Project-level filesystem operations.
//!
//! This port provides generic file I/O scoped to the project root.
//! It does not own which files make up a theme project; that belongs to
//! the scaffold and sync commands.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for low-level project filesystem operations.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Like `write_file`, but readable by the owner only (mode 0600 on Unix).
    fn write_private_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Copy a file within the root, overwriting the destination.
    fn copy_file(&self, from: &str, to: &str) -> Result<(), AppError>;

    /// Remove a directory and all its contents. No-op if absent.
    fn remove_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Set the executable bit on a file (Unix-only).
    fn set_executable(&self, path: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
