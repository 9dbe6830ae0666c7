use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use crate::domain::{DocumentRoot, VirtualHostRequest};
use crate::infrastructure::prompt::Confirmation;

use super::reconcile::{HostsReconciler, ServiceReconciler};
use super::{SiteContext, StepOutcome, Steps};

/// Result of a site teardown.
#[derive(Debug)]
pub struct DeleteResult {
    pub document_root: DocumentRoot,
    pub steps: Steps,
}

/// Use case: tear down one virtual host. Missing pieces are reported,
/// not treated as failures.
pub struct DeleteSite<'a> {
    ctx: &'a SiteContext<'a>,
    confirmation: &'a dyn Confirmation,
}

impl<'a> DeleteSite<'a> {
    pub fn new(ctx: &'a SiteContext<'a>, confirmation: &'a dyn Confirmation) -> Self {
        Self { ctx, confirmation }
    }

    pub fn execute(&self, request: &VirtualHostRequest) -> Result<DeleteResult> {
        let mut steps = Steps::new();
        let document_root = request.document_root(&self.ctx.paths.web_root);

        self.disable_site(request, &mut steps)?;
        self.remove_config(request, &mut steps)?;

        let hosts = HostsReconciler::new(self.ctx.hosts).remove_entry(&request.domain)?;
        steps.push(("Hosts entry".into(), hosts));

        let reload = ServiceReconciler::new(self.ctx.service).reload_after_delete()?;
        steps.push(("Reload".into(), reload));

        self.remove_document_root(&document_root, &mut steps)?;

        Ok(DeleteResult {
            document_root,
            steps,
        })
    }

    fn disable_site(&self, request: &VirtualHostRequest, steps: &mut Steps) -> Result<()> {
        let enabler = self.ctx.enabler;
        let outcome = if enabler.is_enabled(&request.domain) {
            enabler.disable(&request.domain)?;
            StepOutcome::Success(format!("Disabled {}.", request.domain))
        } else {
            StepOutcome::Skipped(format!("{} is not enabled.", request.domain))
        };
        steps.push(("Disable".into(), outcome));
        Ok(())
    }

    fn remove_config(&self, request: &VirtualHostRequest, steps: &mut Steps) -> Result<()> {
        let path = self.ctx.paths.config_file(self.ctx.kind, &request.domain);
        let outcome = if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
            StepOutcome::Success(format!("Removed {}.", path.display()))
        } else {
            StepOutcome::Missing(format!("Configuration file {}", path.display()))
        };
        steps.push(("Configuration".into(), outcome));
        Ok(())
    }

    /// The only interactive decision: the default is to keep the content.
    fn remove_document_root(&self, root: &DocumentRoot, steps: &mut Steps) -> Result<()> {
        let outcome = if !root.as_path().exists() {
            StepOutcome::Missing(format!("Document root {}", root))
        } else if self.confirmation.confirm(&format!(
            "Delete document root {} and everything in it?",
            root
        )) {
            fs::remove_dir_all(root.as_path())
                .with_context(|| format!("Failed to remove document root: {}", root))?;
            debug!("Removed {}", root);
            StepOutcome::Success(format!("Removed {}.", root))
        } else {
            StepOutcome::Skipped(format!("Kept {}.", root))
        };
        steps.push(("Document root".into(), outcome));
        Ok(())
    }
}
