use std::fs::{self, DirBuilder, OpenOptions, Permissions};
use std::io::{ErrorKind, Write};
use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::domain::{DocumentRoot, PLACEHOLDER_CONTENT, SiteTemplate, VirtualHostRequest};
use crate::infrastructure::ownership::Ownership;

use super::reconcile::{HostsReconciler, ServiceReconciler};
use super::{ProvisionError, SiteContext, StepOutcome, Steps};

/// Result of a successful site creation.
#[derive(Debug)]
pub struct CreateResult {
    pub document_root: DocumentRoot,
    pub config_file: PathBuf,
    pub steps: Steps,
}

/// Use case: provision one virtual host.
pub struct CreateSite<'a> {
    ctx: &'a SiteContext<'a>,
    ownership: &'a dyn Ownership,
    invoking_user: Option<&'a str>,
}

impl<'a> CreateSite<'a> {
    pub fn new(
        ctx: &'a SiteContext<'a>,
        ownership: &'a dyn Ownership,
        invoking_user: Option<&'a str>,
    ) -> Self {
        Self {
            ctx,
            ownership,
            invoking_user,
        }
    }

    /// Run every provisioning step in order. The first failure aborts and
    /// leaves completed steps in place.
    pub fn execute(&self, request: &VirtualHostRequest) -> Result<CreateResult> {
        let mut steps = Steps::new();
        let document_root = request.document_root(&self.ctx.paths.web_root);
        let config_file = self.ctx.paths.config_file(self.ctx.kind, &request.domain);

        self.ensure_document_root(&document_root, &mut steps)?;
        self.write_placeholder(&document_root, &mut steps)?;
        self.assign_ownership(&document_root, &mut steps)?;
        self.write_config(request, &document_root, &config_file, &mut steps)?;
        self.enable_site(request, &mut steps)?;

        let hosts = HostsReconciler::new(self.ctx.hosts).add_entry(&request.domain)?;
        steps.push(("Hosts entry".into(), hosts));

        let reload = ServiceReconciler::new(self.ctx.service).reload_after_create(&config_file)?;
        steps.push(("Reload".into(), reload));

        Ok(CreateResult {
            document_root,
            config_file,
            steps,
        })
    }

    fn ensure_document_root(&self, root: &DocumentRoot, steps: &mut Steps) -> Result<()> {
        let outcome = if root.as_path().is_dir() {
            StepOutcome::Skipped(format!("{} already exists.", root))
        } else {
            DirBuilder::new()
                .recursive(true)
                .mode(0o755)
                .create(root.as_path())
                .with_context(|| format!("Failed to create document root: {}", root))?;
            // DirBuilder's mode is masked by the umask
            fs::set_permissions(root.as_path(), Permissions::from_mode(0o755))
                .with_context(|| format!("Failed to set permissions on {}", root))?;
            debug!("Created {}", root);
            StepOutcome::Success(format!("Created {}.", root))
        };
        steps.push(("Document root".into(), outcome));
        Ok(())
    }

    fn write_placeholder(&self, root: &DocumentRoot, steps: &mut Steps) -> Result<()> {
        let path = root.as_path().join(&self.ctx.settings.placeholder_file);
        let outcome = if path.exists() {
            StepOutcome::Skipped(format!("{} already exists.", path.display()))
        } else {
            fs::write(&path, PLACEHOLDER_CONTENT)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            StepOutcome::Success(format!("Wrote {}.", path.display()))
        };
        steps.push(("Placeholder".into(), outcome));
        Ok(())
    }

    /// Invoking user first; the web server user if that is unknown or fails.
    fn assign_ownership(&self, root: &DocumentRoot, steps: &mut Steps) -> Result<()> {
        let fallback = self.ctx.settings.web_user.as_str();

        if let Some(user) = self.invoking_user {
            match self.ownership.chown_recursive(root.as_path(), user) {
                Ok(()) => {
                    info!("Document root owned by {}", user);
                    steps.push((
                        "Ownership".into(),
                        StepOutcome::Success(format!("{} owned by {}.", root, user)),
                    ));
                    return Ok(());
                }
                Err(e) => warn!(
                    "Could not give {} to {}: {}; falling back to {}",
                    root, user, e, fallback
                ),
            }
        } else {
            debug!("Invoking user unknown, using {}", fallback);
        }

        self.ownership
            .chown_recursive(root.as_path(), fallback)
            .with_context(|| format!("Failed to give {} to {}", root, fallback))?;
        info!("Document root owned by {}", fallback);

        let outcome = match self.invoking_user {
            Some(user) => StepOutcome::Warning(format!(
                "Could not use {}; {} owned by {}.",
                user, root, fallback
            )),
            None => StepOutcome::Success(format!("{} owned by {}.", root, fallback)),
        };
        steps.push(("Ownership".into(), outcome));
        Ok(())
    }

    fn write_config(
        &self,
        request: &VirtualHostRequest,
        root: &DocumentRoot,
        config_file: &Path,
        steps: &mut Steps,
    ) -> Result<()> {
        let settings = self.ctx.settings;
        let content = SiteTemplate {
            domain: &request.domain,
            document_root: root,
            log_dir: &self.ctx.paths.log_dir,
            upstream: &settings.nginx.upstream,
            admin_email: &settings.apache.admin_email,
        }
        .render(self.ctx.kind);

        // create_new refuses to clobber a hand-edited config
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(config_file)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ProvisionError::ConfigExists(config_file.to_path_buf()).into());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to create config file: {}", config_file.display())
                });
            }
        };
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", config_file.display()))?;

        steps.push((
            "Configuration".into(),
            StepOutcome::Success(format!("Wrote {}.", config_file.display())),
        ));
        Ok(())
    }

    fn enable_site(&self, request: &VirtualHostRequest, steps: &mut Steps) -> Result<()> {
        let enabler = self.ctx.enabler;
        if enabler.is_enabled(&request.domain) {
            return Err(ProvisionError::AlreadyEnabled {
                domain: request.domain.to_string(),
                path: enabler.enabled_path(&request.domain),
            }
            .into());
        }

        enabler.enable(&request.domain)?;
        steps.push((
            "Enable".into(),
            StepOutcome::Success(format!("Enabled {}.", request.domain)),
        ));
        Ok(())
    }
}
