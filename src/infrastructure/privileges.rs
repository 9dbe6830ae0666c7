use std::env;

use nix::unistd::geteuid;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrivilegeError {
    #[error("Permission denied. {0} must be run as root.\nRun with: sudo {0} ...")]
    NotRoot(String),
}

pub fn ensure_root(tool: &str) -> Result<(), PrivilegeError> {
    if !geteuid().is_root() {
        return Err(PrivilegeError::NotRoot(tool.to_string()));
    }
    Ok(())
}

/// The non-root user who invoked the tool through sudo, if known.
pub fn invoking_user() -> Option<String> {
    env::var("SUDO_USER")
        .ok()
        .filter(|user| !user.is_empty() && user != "root")
}
