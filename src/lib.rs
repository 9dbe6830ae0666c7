//! Provision and tear down single web server virtual hosts.
//!
//! Two tools share this library: `nginx-vhost` (sites-enabled symlinks,
//! application server upstream) and `apache-vhost` (`a2ensite`/`a2dissite`).
//! Both assume one operator running one action for one domain at a time;
//! the hosts file and site directories are edited without locking.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
