use std::path::PathBuf;

use crate::domain::{DomainName, ServerKind};

/// All resolved paths needed by the provisioning components.
/// Loaded once from settings, then passed to components via DI.
#[derive(Debug, Clone)]
pub struct VhostPaths {
    pub web_root: PathBuf,
    pub sites_available: PathBuf,
    pub sites_enabled: PathBuf,
    pub log_dir: PathBuf,
    pub hosts_file: PathBuf,
}

impl VhostPaths {
    pub fn config_file(&self, kind: ServerKind, domain: &DomainName) -> PathBuf {
        self.sites_available.join(kind.config_file_name(domain))
    }

    pub fn enabled_link(&self, kind: ServerKind, domain: &DomainName) -> PathBuf {
        self.sites_enabled.join(kind.config_file_name(domain))
    }
}
