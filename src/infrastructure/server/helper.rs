use std::path::PathBuf;

use super::{ServerError, SiteEnabler};
use crate::domain::{DomainName, ServerKind};
use crate::infrastructure::command::CommandRunner;
use crate::infrastructure::paths::VhostPaths;

/// Enablement through the server's own helpers (`a2ensite` / `a2dissite`).
pub struct HelperCommandEnabler<'a> {
    kind: ServerKind,
    paths: &'a VhostPaths,
    runner: &'a dyn CommandRunner,
    enable_command: &'a str,
    disable_command: &'a str,
}

impl<'a> HelperCommandEnabler<'a> {
    pub fn new(
        kind: ServerKind,
        paths: &'a VhostPaths,
        runner: &'a dyn CommandRunner,
        enable_command: &'a str,
        disable_command: &'a str,
    ) -> Self {
        Self {
            kind,
            paths,
            runner,
            enable_command,
            disable_command,
        }
    }

    fn invoke(&self, program: &str, domain: &DomainName) -> Result<(), ServerError> {
        let output = self.runner.run(program, &[domain.as_str()])?;
        if !output.success {
            return Err(ServerError::CommandFailed {
                command: format!("{} {}", program, domain),
                output: output.combined(),
            });
        }
        Ok(())
    }
}

impl SiteEnabler for HelperCommandEnabler<'_> {
    fn enabled_path(&self, domain: &DomainName) -> PathBuf {
        self.paths.enabled_link(self.kind, domain)
    }

    fn enable(&self, domain: &DomainName) -> Result<(), ServerError> {
        self.invoke(self.enable_command, domain)
    }

    fn disable(&self, domain: &DomainName) -> Result<(), ServerError> {
        if !self.is_enabled(domain) {
            return Ok(());
        }
        self.invoke(self.disable_command, domain)
    }
}
