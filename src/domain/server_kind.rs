use std::fmt;

use super::DomainName;

/// Which web server layout a tool manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    /// Reverse-proxy layout: sites-enabled symlinks, application server upstream.
    Nginx,
    /// Apache layout: `a2ensite`/`a2dissite` helpers.
    Apache,
}

impl ServerKind {
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::Nginx => "nginx-vhost",
            Self::Apache => "apache-vhost",
        }
    }

    /// File name of the domain's config inside the sites-available directory.
    pub fn config_file_name(&self, domain: &DomainName) -> String {
        match self {
            Self::Nginx => domain.as_str().to_string(),
            // a2ensite only picks up files ending in .conf
            Self::Apache => format!("{}.conf", domain),
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nginx => write!(f, "nginx"),
            Self::Apache => write!(f, "apache"),
        }
    }
}
