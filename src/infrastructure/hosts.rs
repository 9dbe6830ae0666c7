use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostsError {
    #[error(
        "Permission denied writing {0}. Editing the hosts file requires root privileges."
    )]
    PermissionDenied(PathBuf),

    #[error("Failed to read hosts file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read/modify/write access to the system hosts file.
///
/// Writes are plain overwrites; callers are assumed to be the only writer.
pub trait HostsStore {
    fn read(&self) -> Result<String, HostsError>;

    fn write(&self, content: &str) -> Result<(), HostsError>;

    /// Copy the current content aside before a destructive rewrite.
    fn backup(&self) -> Result<PathBuf, HostsError>;
}

pub struct FileHostsStore {
    path: PathBuf,
}

impl FileHostsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn write_error(path: &Path, source: std::io::Error) -> HostsError {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            HostsError::PermissionDenied(path.to_path_buf())
        } else {
            HostsError::WriteError {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

impl HostsStore for FileHostsStore {
    fn read(&self) -> Result<String, HostsError> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path).map_err(|source| HostsError::ReadError {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, content: &str) -> Result<(), HostsError> {
        fs::write(&self.path, content).map_err(|e| Self::write_error(&self.path, e))
    }

    fn backup(&self) -> Result<PathBuf, HostsError> {
        let backup = self.backup_path();
        let content = self.read()?;
        fs::write(&backup, content).map_err(|e| Self::write_error(&backup, e))?;
        Ok(backup)
    }
}
