mod common;

use std::fs;

use common::{INITIAL_HOSTS, Sandbox};
use vhost::application::StepOutcome;
use vhost::domain::ServerKind;

fn outcome<'a>(steps: &'a [(String, StepOutcome)], label: &str) -> &'a StepOutcome {
    &steps
        .iter()
        .find(|(l, _)| l == label)
        .unwrap_or_else(|| panic!("no step labelled {label}"))
        .1
}

#[test]
fn test_delete_removes_everything_when_confirmed() {
    let sandbox = Sandbox::new(ServerKind::Nginx);
    let created = sandbox.create("example.test", None).unwrap();
    sandbox.runner.clear();

    let result = sandbox.delete("example.test", None, true).unwrap();

    assert_eq!(result.document_root, created.document_root);
    assert!(!created.document_root.as_path().exists());
    assert!(!sandbox.config_file("example.test").exists());
    assert!(fs::symlink_metadata(sandbox.enabled_link("example.test")).is_err());
    assert_eq!(sandbox.hosts(), INITIAL_HOSTS);
    assert_eq!(
        sandbox.runner.calls(),
        vec!["nginx -t", "systemctl reload nginx"]
    );
}

#[test]
fn test_hosts_backup_holds_previous_content() {
    let sandbox = Sandbox::new(ServerKind::Nginx);
    sandbox.create("example.test", None).unwrap();
    let before = sandbox.hosts();

    sandbox.delete("example.test", None, false).unwrap();

    let backup = fs::read_to_string(sandbox.root.join("hosts.bak")).unwrap();
    assert_eq!(backup, before);
}

#[test]
fn test_delete_keeps_root_by_default() {
    let sandbox = Sandbox::new(ServerKind::Nginx);
    let created = sandbox.create("example.test", None).unwrap();

    let result = sandbox.delete("example.test", None, false).unwrap();

    assert!(created.document_root.as_path().join("phpinfo.php").exists());
    assert!(matches!(
        outcome(&result.steps, "Document root"),
        StepOutcome::Skipped(_)
    ));
}

#[test]
fn test_create_delete_create_reuses_document_root() {
    let sandbox = Sandbox::new(ServerKind::Nginx);

    let first = sandbox.create("example.test", Some("myapp")).unwrap();
    let deleted = sandbox.delete("example.test", Some("myapp"), true).unwrap();
    let second = sandbox.create("example.test", Some("myapp")).unwrap();

    assert_eq!(first.document_root, deleted.document_root);
    assert_eq!(first.document_root, second.document_root);
    assert_eq!(sandbox.hosts_lines_for("example.test"), 1);
}

#[test]
fn test_delete_unprovisioned_domain_reports_missing() {
    let sandbox = Sandbox::new(ServerKind::Nginx);

    let result = sandbox.delete("example.test", None, true).unwrap();

    assert!(matches!(
        outcome(&result.steps, "Configuration"),
        StepOutcome::Missing(_)
    ));
    assert!(matches!(
        outcome(&result.steps, "Disable"),
        StepOutcome::Skipped(_)
    ));
    assert!(matches!(
        outcome(&result.steps, "Hosts entry"),
        StepOutcome::Skipped(_)
    ));
    assert!(matches!(
        outcome(&result.steps, "Reload"),
        StepOutcome::Success(_)
    ));
    assert!(matches!(
        outcome(&result.steps, "Document root"),
        StepOutcome::Missing(_)
    ));
    assert_eq!(
        sandbox.runner.calls(),
        vec!["nginx -t", "systemctl reload nginx"]
    );
    assert_eq!(sandbox.hosts(), INITIAL_HOSTS);
}

#[test]
fn test_hosts_removal_spares_similar_domains() {
    let sandbox = Sandbox::new(ServerKind::Nginx);
    sandbox.create("example.test", None).unwrap();

    sandbox.delete("example.test", None, false).unwrap();

    assert_eq!(sandbox.hosts_lines_for("example.test"), 0);
    assert_eq!(sandbox.hosts_lines_for("myexample.test"), 1);
}

#[test]
fn test_failed_check_after_removal_restarts() {
    let sandbox = Sandbox::new(ServerKind::Nginx);
    sandbox.create("example.test", None).unwrap();
    sandbox.runner.clear();
    sandbox.runner.fail("nginx -t");

    let result = sandbox.delete("example.test", None, false).unwrap();

    assert_eq!(
        sandbox.runner.calls(),
        vec!["nginx -t", "systemctl restart nginx"]
    );
    assert!(matches!(
        outcome(&result.steps, "Reload"),
        StepOutcome::Warning(_)
    ));
    assert!(!sandbox.config_file("example.test").exists());
}

#[test]
fn test_failed_restart_is_reported_not_raised() {
    let sandbox = Sandbox::new(ServerKind::Nginx);
    sandbox.runner.fail("nginx -t");
    sandbox.runner.fail("systemctl restart");

    let result = sandbox.delete("example.test", None, false).unwrap();

    match outcome(&result.steps, "Reload") {
        StepOutcome::Warning(msg) => assert!(msg.contains("restart failed")),
        other => panic!("expected warning, got {other:?}"),
    }
}

#[test]
fn test_failed_reload_is_fatal() {
    let sandbox = Sandbox::new(ServerKind::Nginx);
    sandbox.runner.fail("systemctl reload");

    let err = sandbox.delete("example.test", None, true).unwrap_err();

    assert!(err.to_string().contains("systemctl reload nginx"));
}

#[test]
fn test_delete_apache_site_runs_dissite() {
    let sandbox = Sandbox::new(ServerKind::Apache);
    sandbox.create("example.test", None).unwrap();
    sandbox.runner.clear();

    sandbox.delete("example.test", None, true).unwrap();

    assert_eq!(
        sandbox.runner.calls(),
        vec![
            "a2dissite example.test",
            "apache2ctl configtest",
            "systemctl reload apache2"
        ]
    );
    assert!(!sandbox.enabled_link("example.test").exists());
    assert!(!sandbox.config_file("example.test").exists());
}
