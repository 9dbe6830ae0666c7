use anyhow::Result;

use crate::application::SiteContext;
use crate::application::delete_site::DeleteSite;
use crate::domain::{ServerKind, VirtualHostRequest};
use crate::infrastructure::command::SystemCommandRunner;
use crate::infrastructure::config::Settings;
use crate::infrastructure::hosts::FileHostsStore;
use crate::infrastructure::prompt::{Confirmation, FixedAnswer, TerminalConfirmation};
use crate::infrastructure::server::{ServiceControl, site_enabler};

/// `answer` pre-answers the document root prompt (`--yes` / `--keep-root`).
pub fn execute(
    kind: ServerKind,
    request: &VirtualHostRequest,
    settings: &Settings,
    answer: Option<bool>,
) -> Result<()> {
    let paths = settings.paths(kind);
    let runner = SystemCommandRunner::new();
    let enabler = site_enabler(kind, &paths, settings, &runner);
    let hosts = FileHostsStore::new(paths.hosts_file.clone());
    let service = ServiceControl::new(&runner, settings.service(kind), settings.check_command(kind));
    let ctx = SiteContext {
        kind,
        settings,
        paths: &paths,
        enabler: enabler.as_ref(),
        hosts: &hosts,
        service: &service,
    };

    let confirmation: Box<dyn Confirmation> = match answer {
        Some(answer) => Box::new(FixedAnswer(answer)),
        None => Box::new(TerminalConfirmation),
    };
    let use_case = DeleteSite::new(&ctx, confirmation.as_ref());

    println!("Deleting {} site {}...\n", kind, request.domain);

    let result = use_case.execute(request)?;

    super::print_steps(&result.steps);

    println!("\nSite deleted: {}", request.domain);

    Ok(())
}
