//! Shared fixtures for use-case tests: a sandboxed filesystem layout and
//! fakes for the external collaborators.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vhost::application::SiteContext;
use vhost::application::create_site::{CreateResult, CreateSite};
use vhost::application::delete_site::{DeleteResult, DeleteSite};
use vhost::domain::{Action, ServerKind, VirtualHostRequest};
use vhost::infrastructure::command::{CommandError, CommandOutput, CommandRunner};
use vhost::infrastructure::config::Settings;
use vhost::infrastructure::hosts::FileHostsStore;
use vhost::infrastructure::ownership::{Ownership, OwnershipError};
use vhost::infrastructure::prompt::FixedAnswer;
use vhost::infrastructure::server::{ServiceControl, site_enabler};

pub const INITIAL_HOSTS: &str = "127.0.0.1 localhost\n127.0.0.1 myexample.test\n";

/// Records every command line; commands starting with a registered
/// prefix fail. `a2ensite`/`a2dissite` act on the sites-enabled directory
/// the way the real helpers do.
pub struct RecordingRunner {
    calls: RefCell<Vec<String>>,
    failing: RefCell<Vec<String>>,
    sites_enabled: PathBuf,
}

impl RecordingRunner {
    pub fn new(sites_enabled: &Path) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failing: RefCell::new(Vec::new()),
            sites_enabled: sites_enabled.to_path_buf(),
        }
    }

    pub fn fail(&self, prefix: &str) {
        self.failing.borrow_mut().push(prefix.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line.clone());

        if self.failing.borrow().iter().any(|p| line.starts_with(p.as_str())) {
            return Ok(CommandOutput {
                success: false,
                stdout: String::new(),
                stderr: format!("{} failed", program),
            });
        }

        if let Some(site) = args.first() {
            let link = self.sites_enabled.join(format!("{}.conf", site));
            match program {
                "a2ensite" => fs::write(&link, "").unwrap(),
                "a2dissite" => fs::remove_file(&link).unwrap(),
                _ => {}
            }
        }

        Ok(CommandOutput {
            success: true,
            ..Default::default()
        })
    }
}

/// Records ownership changes; users in `rejected` fail.
#[derive(Default)]
pub struct FakeOwnership {
    calls: RefCell<Vec<(PathBuf, String)>>,
    rejected: Vec<String>,
}

impl FakeOwnership {
    pub fn rejecting(user: &str) -> Self {
        Self {
            rejected: vec![user.to_string()],
            ..Default::default()
        }
    }

    pub fn users(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, u)| u.clone()).collect()
    }
}

impl Ownership for FakeOwnership {
    fn chown_recursive(&self, path: &Path, user: &str) -> Result<(), OwnershipError> {
        self.calls
            .borrow_mut()
            .push((path.to_path_buf(), user.to_string()));
        if self.rejected.iter().any(|r| r == user) {
            return Err(OwnershipError::UnknownUser(user.to_string()));
        }
        Ok(())
    }
}

/// Server layout rooted in a temporary directory.
pub struct Sandbox {
    _dir: TempDir,
    pub root: PathBuf,
    pub kind: ServerKind,
    pub settings: Settings,
    pub runner: RecordingRunner,
    pub ownership: FakeOwnership,
}

impl Sandbox {
    pub fn new(kind: ServerKind) -> Self {
        Self::with_ownership(kind, FakeOwnership::default())
    }

    pub fn with_ownership(kind: ServerKind, ownership: FakeOwnership) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();

        let mut settings = Settings {
            web_root: root.join("www"),
            hosts_file: root.join("hosts"),
            ..Settings::default()
        };
        for (dir, relative) in [
            (&mut settings.nginx.sites_available, "nginx/sites-available"),
            (&mut settings.nginx.sites_enabled, "nginx/sites-enabled"),
            (&mut settings.nginx.log_dir, "log/nginx"),
            (&mut settings.apache.sites_available, "apache2/sites-available"),
            (&mut settings.apache.sites_enabled, "apache2/sites-enabled"),
            (&mut settings.apache.log_dir, "log/apache2"),
        ] {
            *dir = root.join(relative);
            fs::create_dir_all(&*dir).unwrap();
        }
        fs::write(&settings.hosts_file, INITIAL_HOSTS).unwrap();

        let runner = RecordingRunner::new(&settings.paths(kind).sites_enabled);

        Self {
            _dir: dir,
            root,
            kind,
            settings,
            runner,
            ownership,
        }
    }

    pub fn request(&self, action: Action, domain: &str, root: Option<&str>) -> VirtualHostRequest {
        VirtualHostRequest::new(action, domain, root.map(PathBuf::from)).unwrap()
    }

    pub fn create(&self, domain: &str, root: Option<&str>) -> anyhow::Result<CreateResult> {
        self.create_as(domain, root, None)
    }

    pub fn create_as(
        &self,
        domain: &str,
        root: Option<&str>,
        user: Option<&str>,
    ) -> anyhow::Result<CreateResult> {
        let request = self.request(Action::Create, domain, root);
        let paths = self.settings.paths(self.kind);
        let enabler = site_enabler(self.kind, &paths, &self.settings, &self.runner);
        let hosts = FileHostsStore::new(paths.hosts_file.clone());
        let service = ServiceControl::new(
            &self.runner,
            self.settings.service(self.kind),
            self.settings.check_command(self.kind),
        );
        let ctx = SiteContext {
            kind: self.kind,
            settings: &self.settings,
            paths: &paths,
            enabler: enabler.as_ref(),
            hosts: &hosts,
            service: &service,
        };

        CreateSite::new(&ctx, &self.ownership, user).execute(&request)
    }

    pub fn delete(
        &self,
        domain: &str,
        root: Option<&str>,
        remove_root: bool,
    ) -> anyhow::Result<DeleteResult> {
        let request = self.request(Action::Delete, domain, root);
        let paths = self.settings.paths(self.kind);
        let enabler = site_enabler(self.kind, &paths, &self.settings, &self.runner);
        let hosts = FileHostsStore::new(paths.hosts_file.clone());
        let service = ServiceControl::new(
            &self.runner,
            self.settings.service(self.kind),
            self.settings.check_command(self.kind),
        );
        let ctx = SiteContext {
            kind: self.kind,
            settings: &self.settings,
            paths: &paths,
            enabler: enabler.as_ref(),
            hosts: &hosts,
            service: &service,
        };
        let confirmation = FixedAnswer(remove_root);

        DeleteSite::new(&ctx, &confirmation).execute(&request)
    }

    pub fn hosts(&self) -> String {
        fs::read_to_string(&self.settings.hosts_file).unwrap()
    }

    pub fn hosts_lines_for(&self, domain: &str) -> usize {
        self.hosts()
            .lines()
            .filter(|line| line.split_whitespace().skip(1).any(|name| name == domain))
            .count()
    }

    pub fn config_file(&self, domain: &str) -> PathBuf {
        let request = self.request(Action::Create, domain, None);
        self.settings
            .paths(self.kind)
            .config_file(self.kind, &request.domain)
    }

    pub fn enabled_link(&self, domain: &str) -> PathBuf {
        let request = self.request(Action::Create, domain, None);
        self.settings
            .paths(self.kind)
            .enabled_link(self.kind, &request.domain)
    }
}
