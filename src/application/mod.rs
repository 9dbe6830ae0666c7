pub mod create_site;
pub mod delete_site;
pub mod reconcile;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ServerKind;
use crate::infrastructure::config::Settings;
use crate::infrastructure::hosts::HostsStore;
use crate::infrastructure::paths::VhostPaths;
use crate::infrastructure::server::{ServiceControl, SiteEnabler};

/// Outcome of a single step in a multi-step operation.
///
/// Used by application services to report partial success/failure
/// so the CLI layer can render feedback appropriately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Success(String),
    Warning(String),
    Skipped(String),
    /// A teardown target that was already gone. Reported, never fatal.
    Missing(String),
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(msg) => write!(f, "{}", msg),
            Self::Warning(msg) => write!(f, "Warning: {}", msg),
            Self::Skipped(msg) => write!(f, "Skipped: {}", msg),
            Self::Missing(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

pub type Steps = Vec<(String, StepOutcome)>;

/// Guards that stop provisioning without touching existing state.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error(
        "Configuration file already exists: {}\nRemove it (or run 'delete') before creating this site again.",
        .0.display()
    )]
    ConfigExists(PathBuf),

    #[error("Site '{domain}' is already enabled: {}", path.display())]
    AlreadyEnabled { domain: String, path: PathBuf },

    #[error(
        "Web server configuration test failed:\n{output}\nInspect and fix {}, then reload the server manually.",
        path.display()
    )]
    ConfigInvalid { path: PathBuf, output: String },
}

/// Collaborators shared by the create and delete use cases.
pub struct SiteContext<'a> {
    pub kind: ServerKind,
    pub settings: &'a Settings,
    pub paths: &'a VhostPaths,
    pub enabler: &'a dyn SiteEnabler,
    pub hosts: &'a dyn HostsStore,
    pub service: &'a ServiceControl<'a>,
}
