use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::ServerKind;
use crate::infrastructure::paths::VhostPaths;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/vhost/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings shared by both tools, plus one section per server layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base web directory; document roots resolve under it.
    pub web_root: PathBuf,
    /// Owner of new document roots when the invoking user can't be used.
    pub web_user: String,
    pub hosts_file: PathBuf,
    pub placeholder_file: String,
    pub nginx: NginxSettings,
    pub apache: ApacheSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NginxSettings {
    pub sites_available: PathBuf,
    pub sites_enabled: PathBuf,
    pub log_dir: PathBuf,
    pub upstream: String,
    pub service: String,
    pub check_command: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApacheSettings {
    pub sites_available: PathBuf,
    pub sites_enabled: PathBuf,
    pub log_dir: PathBuf,
    pub admin_email: String,
    pub service: String,
    pub check_command: Vec<String>,
    pub enable_command: String,
    pub disable_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            web_root: PathBuf::from("/var/www"),
            web_user: "www-data".into(),
            hosts_file: PathBuf::from("/etc/hosts"),
            placeholder_file: "phpinfo.php".into(),
            nginx: NginxSettings::default(),
            apache: ApacheSettings::default(),
        }
    }
}

impl Default for NginxSettings {
    fn default() -> Self {
        Self {
            sites_available: PathBuf::from("/etc/nginx/sites-available"),
            sites_enabled: PathBuf::from("/etc/nginx/sites-enabled"),
            log_dir: PathBuf::from("/var/log/nginx"),
            upstream: "127.0.0.1:9000".into(),
            service: "nginx".into(),
            check_command: vec!["nginx".into(), "-t".into()],
        }
    }
}

impl Default for ApacheSettings {
    fn default() -> Self {
        Self {
            sites_available: PathBuf::from("/etc/apache2/sites-available"),
            sites_enabled: PathBuf::from("/etc/apache2/sites-enabled"),
            log_dir: PathBuf::from("/var/log/apache2"),
            admin_email: "webmaster@localhost".into(),
            service: "apache2".into(),
            check_command: vec!["apache2ctl".into(), "configtest".into()],
            enable_command: "a2ensite".into(),
            disable_command: "a2dissite".into(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the filesystem layout for one server kind.
    pub fn paths(&self, kind: ServerKind) -> VhostPaths {
        let (sites_available, sites_enabled, log_dir) = match kind {
            ServerKind::Nginx => (
                &self.nginx.sites_available,
                &self.nginx.sites_enabled,
                &self.nginx.log_dir,
            ),
            ServerKind::Apache => (
                &self.apache.sites_available,
                &self.apache.sites_enabled,
                &self.apache.log_dir,
            ),
        };

        VhostPaths {
            web_root: self.web_root.clone(),
            sites_available: sites_available.clone(),
            sites_enabled: sites_enabled.clone(),
            log_dir: log_dir.clone(),
            hosts_file: self.hosts_file.clone(),
        }
    }

    pub fn service(&self, kind: ServerKind) -> &str {
        match kind {
            ServerKind::Nginx => &self.nginx.service,
            ServerKind::Apache => &self.apache.service,
        }
    }

    pub fn check_command(&self, kind: ServerKind) -> &[String] {
        match kind {
            ServerKind::Nginx => &self.nginx.check_command,
            ServerKind::Apache => &self.apache.check_command,
        }
    }
}
