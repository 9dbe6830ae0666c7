use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{DomainName, ServerKind};
use crate::infrastructure::command::{CommandError, CommandRunner};
use crate::infrastructure::config::Settings;
use crate::infrastructure::paths::VhostPaths;

mod helper;
mod service;
mod symlink;

pub use helper::HelperCommandEnabler;
pub use service::ServiceControl;
pub use symlink::SymlinkEnabler;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("'{command}' failed: {output}")]
    CommandFailed { command: String, output: String },

    #[error("Failed to link {link} -> {target}: {source}")]
    LinkError {
        link: PathBuf,
        target: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove {path}: {source}")]
    UnlinkError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Marks a written site configuration as active or inactive.
pub trait SiteEnabler {
    /// Path of the artifact that exists while the site is enabled.
    fn enabled_path(&self, domain: &DomainName) -> PathBuf;

    /// Check if the site is enabled
    fn is_enabled(&self, domain: &DomainName) -> bool {
        // symlink_metadata so a dangling link still counts
        std::fs::symlink_metadata(self.enabled_path(domain)).is_ok()
    }

    fn enable(&self, domain: &DomainName) -> Result<(), ServerError>;

    fn disable(&self, domain: &DomainName) -> Result<(), ServerError>;
}

/// Get the enablement strategy for a server layout
pub fn site_enabler<'a>(
    kind: ServerKind,
    paths: &'a VhostPaths,
    settings: &'a Settings,
    runner: &'a dyn CommandRunner,
) -> Box<dyn SiteEnabler + 'a> {
    match kind {
        ServerKind::Nginx => Box::new(SymlinkEnabler::new(kind, paths)),
        ServerKind::Apache => Box::new(HelperCommandEnabler::new(
            kind,
            paths,
            runner,
            &settings.apache.enable_command,
            &settings.apache.disable_command,
        )),
    }
}
