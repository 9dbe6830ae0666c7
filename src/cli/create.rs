use anyhow::Result;

use crate::application::SiteContext;
use crate::application::create_site::CreateSite;
use crate::domain::{ServerKind, VirtualHostRequest};
use crate::infrastructure::command::SystemCommandRunner;
use crate::infrastructure::config::Settings;
use crate::infrastructure::hosts::FileHostsStore;
use crate::infrastructure::ownership::SystemOwnership;
use crate::infrastructure::privileges::invoking_user;
use crate::infrastructure::server::{ServiceControl, site_enabler};

pub fn execute(kind: ServerKind, request: &VirtualHostRequest, settings: &Settings) -> Result<()> {
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

    let ownership = SystemOwnership::new();
    let user = invoking_user();
    let use_case = CreateSite::new(&ctx, &ownership, user.as_deref());

    println!("Creating {} site {}...\n", kind, request.domain);

    let result = use_case.execute(request)?;

    super::print_steps(&result.steps);

    println!("\nSite created: http://{}/", request.domain);
    println!("  Document root: {}", result.document_root);
    println!("  Configuration: {}", result.config_file.display());

    Ok(())
}
