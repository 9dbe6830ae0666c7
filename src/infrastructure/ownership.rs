use std::fs;
use std::path::{Path, PathBuf};

use nix::unistd::{Gid, Uid, User, chown};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OwnershipError {
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Failed to look up user {user}: {source}")]
    Lookup { user: String, source: nix::Error },

    #[error("Failed to change owner of {path}: {source}")]
    Chown { path: PathBuf, source: nix::Error },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Recursive ownership changes on document roots.
pub trait Ownership {
    /// Give `path` and everything below it to `user` and the user's primary group.
    fn chown_recursive(&self, path: &Path, user: &str) -> Result<(), OwnershipError>;
}

pub struct SystemOwnership;

impl SystemOwnership {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemOwnership {
    fn default() -> Self {
        Self::new()
    }
}

impl Ownership for SystemOwnership {
    fn chown_recursive(&self, path: &Path, user: &str) -> Result<(), OwnershipError> {
        let account = User::from_name(user)
            .map_err(|source| OwnershipError::Lookup {
                user: user.to_string(),
                source,
            })?
            .ok_or_else(|| OwnershipError::UnknownUser(user.to_string()))?;

        chown_tree(path, account.uid, account.gid)
    }
}

// Symlinks are skipped: chown(2) would follow them out of the tree.
fn chown_tree(path: &Path, uid: Uid, gid: Gid) -> Result<(), OwnershipError> {
    let walk_error = |source| OwnershipError::Walk {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::symlink_metadata(path).map_err(walk_error)?;
    if metadata.file_type().is_symlink() {
        return Ok(());
    }

    chown(path, Some(uid), Some(gid)).map_err(|source| OwnershipError::Chown {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        for entry in fs::read_dir(path).map_err(walk_error)? {
            let entry = entry.map_err(walk_error)?;
            chown_tree(&entry.path(), uid, gid)?;
        }
    }

    Ok(())
}
