//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::{FilesystemStore, write_private};

impl RepositoryFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn write_private_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_private(&full_path, content)
    }

    fn copy_file(&self, from: &str, to: &str) -> Result<(), AppError> {
        let source = self.resolve_path(from);
        let destination = self.resolve_path(to);
        self.validate_path_within_root(&source)?;
        self.validate_path_within_root(&destination)?;
        fs::copy(source, destination)?;
        Ok(())
    }

    fn remove_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if full_path.exists() {
            fs::remove_dir_all(full_path)?;
        }
        Ok(())
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&full_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&full_path, perms)?;
        }
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.is_dir()
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}
