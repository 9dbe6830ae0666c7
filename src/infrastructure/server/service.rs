use tracing::debug;

use super::ServerError;
use crate::infrastructure::command::{CommandOutput, CommandRunner};

/// Syntax check, reload and restart of the running web server.
pub struct ServiceControl<'a> {
    runner: &'a dyn CommandRunner,
    service: &'a str,
    check_command: &'a [String],
}

impl<'a> ServiceControl<'a> {
    pub fn new(runner: &'a dyn CommandRunner, service: &'a str, check_command: &'a [String]) -> Self {
        Self {
            runner,
            service,
            check_command,
        }
    }

    /// Run the server's configuration checker. A failed check is not an
    /// error here; callers decide what a failure means.
    pub fn check_config(&self) -> Result<CommandOutput, ServerError> {
        debug!("Checking {} configuration", self.service);
        Ok(self.runner.run_argv(self.check_command)?)
    }

    pub fn reload(&self) -> Result<(), ServerError> {
        self.systemctl("reload")
    }

    pub fn restart(&self) -> Result<(), ServerError> {
        self.systemctl("restart")
    }

    fn systemctl(&self, verb: &str) -> Result<(), ServerError> {
        let output = self.runner.run("systemctl", &[verb, self.service])?;
        if !output.success {
            return Err(ServerError::CommandFailed {
                command: format!("systemctl {} {}", verb, self.service),
                output: output.combined(),
            });
        }
        Ok(())
    }
}
