use std::fs;
use std::path::PathBuf;

use super::{ServerError, SiteEnabler};
use crate::domain::{DomainName, ServerKind};
use crate::infrastructure::paths::VhostPaths;

/// sites-enabled symlink pointing at the sites-available file
pub struct SymlinkEnabler<'a> {
    kind: ServerKind,
    paths: &'a VhostPaths,
}

impl<'a> SymlinkEnabler<'a> {
    pub fn new(kind: ServerKind, paths: &'a VhostPaths) -> Self {
        Self { kind, paths }
    }
}

impl SiteEnabler for SymlinkEnabler<'_> {
    fn enabled_path(&self, domain: &DomainName) -> PathBuf {
        self.paths.enabled_link(self.kind, domain)
    }

    fn enable(&self, domain: &DomainName) -> Result<(), ServerError> {
        let target = self.paths.config_file(self.kind, domain);
        let link = self.enabled_path(domain);

        std::os::unix::fs::symlink(&target, &link).map_err(|source| ServerError::LinkError {
            link,
            target,
            source,
        })
    }

    fn disable(&self, domain: &DomainName) -> Result<(), ServerError> {
        let link = self.enabled_path(domain);
        if !self.is_enabled(domain) {
            return Ok(());
        }

        fs::remove_file(&link).map_err(|source| ServerError::UnlinkError { path: link, source })
    }
}
