use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::domain::{DomainName, HostsFile, LOOPBACK};
use crate::infrastructure::hosts::HostsStore;
use crate::infrastructure::server::ServiceControl;

use super::{ProvisionError, StepOutcome};

/// Keeps the loopback hosts entry in step with the site.
pub struct HostsReconciler<'a> {
    store: &'a dyn HostsStore,
}

impl<'a> HostsReconciler<'a> {
    pub fn new(store: &'a dyn HostsStore) -> Self {
        Self { store }
    }

    /// Add `127.0.0.1 <domain>` unless the domain is already mapped.
    pub fn add_entry(&self, domain: &DomainName) -> Result<StepOutcome> {
        let mut hosts = HostsFile::parse(&self.store.read()?);

        if !hosts.add_loopback(domain) {
            return Ok(StepOutcome::Skipped(format!(
                "{} is already in the hosts file.",
                domain
            )));
        }

        self.store.write(&hosts.render())?;
        Ok(StepOutcome::Success(format!("Added {} {}.", LOOPBACK, domain)))
    }

    /// Remove every line mapping `domain`, backing the file up first.
    pub fn remove_entry(&self, domain: &DomainName) -> Result<StepOutcome> {
        let mut hosts = HostsFile::parse(&self.store.read()?);

        let removed = hosts.remove(domain);
        if removed == 0 {
            return Ok(StepOutcome::Skipped(format!(
                "No hosts entry for {}.",
                domain
            )));
        }

        let backup = self.store.backup()?;
        self.store.write(&hosts.render())?;
        Ok(StepOutcome::Success(format!(
            "Removed {} line(s) for {}; previous file saved to {}.",
            removed,
            domain,
            backup.display()
        )))
    }
}

/// Validates the server configuration and brings the running server in line.
pub struct ServiceReconciler<'a> {
    service: &'a ServiceControl<'a>,
}

impl<'a> ServiceReconciler<'a> {
    pub fn new(service: &'a ServiceControl<'a>) -> Self {
        Self { service }
    }

    /// Check then reload. A failed check is fatal and nothing is rolled back.
    pub fn reload_after_create(&self, config_file: &Path) -> Result<StepOutcome> {
        let check = self.service.check_config()?;
        if !check.success {
            return Err(ProvisionError::ConfigInvalid {
                path: config_file.to_path_buf(),
                output: check.combined(),
            }
            .into());
        }

        self.service.reload()?;
        info!("Server reloaded");
        Ok(StepOutcome::Success(
            "Configuration test passed; server reloaded.".into(),
        ))
    }

    /// Check then reload; if the check fails, restart so the removed site
    /// is dropped even while some other site's config is broken.
    pub fn reload_after_delete(&self) -> Result<StepOutcome> {
        let check = self.service.check_config()?;
        if check.success {
            self.service.reload()?;
            info!("Server reloaded");
            return Ok(StepOutcome::Success(
                "Configuration test passed; server reloaded.".into(),
            ));
        }

        warn!(
            "Configuration test failed after removal, restarting instead of reloading:\n{}",
            check.combined()
        );

        match self.service.restart() {
            Ok(()) => {
                info!("Server restarted");
                Ok(StepOutcome::Warning(
                    "Configuration test failed; server restarted instead of reloaded.".into(),
                ))
            }
            Err(e) => {
                warn!("Restart failed: {}", e);
                Ok(StepOutcome::Warning(format!(
                    "Configuration test failed and restart failed: {}. \
                     Fix the server configuration and restart it manually.",
                    e
                )))
            }
        }
    }
}
