//! Fixed server configuration templates.

use std::path::Path;

use super::{DocumentRoot, DomainName, ServerKind};

pub const PLACEHOLDER_CONTENT: &str = "<?php phpinfo(); ?>\n";

/// Values substituted into a site configuration.
#[derive(Debug, Clone)]
pub struct SiteTemplate<'a> {
    pub domain: &'a DomainName,
    pub document_root: &'a DocumentRoot,
    pub log_dir: &'a Path,
    /// Application server address handed requests by the proxy variant.
    pub upstream: &'a str,
    /// Administrator contact for the Apache variant.
    pub admin_email: &'a str,
}

/// Double-quote a path so whitespace survives both config parsers.
fn quoted(path: &Path) -> String {
    let raw = path.display().to_string();
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}

impl SiteTemplate<'_> {
    pub fn render(&self, kind: ServerKind) -> String {
        match kind {
            ServerKind::Nginx => self.render_nginx(),
            ServerKind::Apache => self.render_apache(),
        }
    }

    fn root(&self) -> String {
        quoted(self.document_root.as_path())
    }

    fn access_log(&self) -> String {
        quoted(&self.log_dir.join(format!("{}-access.log", self.domain)))
    }

    fn error_log(&self) -> String {
        quoted(&self.log_dir.join(format!("{}-error.log", self.domain)))
    }

    fn render_nginx(&self) -> String {
        format!(
            r#"server {{
    listen 80;
    listen [::]:80;

    server_name {domain};
    root {root};
    index index.php index.html index.htm;

    access_log {access_log};
    error_log {error_log};

    location ~* \.(?:ico|css|js|gif|jpe?g|png|svg|webp|woff2?|ttf|eot)$ {{
        expires 30d;
        access_log off;
        try_files $uri =404;
    }}

    location / {{
        try_files $uri $uri/ /index.php?$query_string;
    }}

    location ~ \.php$ {{
        fastcgi_split_path_info ^(.+\.php)(/.+)$;
        fastcgi_pass {upstream};
        fastcgi_index index.php;
        include fastcgi_params;
        fastcgi_param SCRIPT_FILENAME $document_root$fastcgi_script_name;
        fastcgi_param PATH_INFO $fastcgi_path_info;
    }}

    location ~ /\. {{
        deny all;
    }}
}}
"#,
            domain = self.domain,
            root = self.root(),
            access_log = self.access_log(),
            error_log = self.error_log(),
            upstream = self.upstream,
        )
    }

    fn render_apache(&self) -> String {
        format!(
            r#"<VirtualHost *:80>
    ServerAdmin {admin}
    ServerName {domain}
    ServerAlias {domain}
    DocumentRoot {root}

    <Directory />
        AllowOverride All
    </Directory>

    <Directory {root}>
        Options Indexes FollowSymLinks MultiViews
        AllowOverride All
        Require all granted
    </Directory>

    ErrorLog {error_log}
    LogLevel error
    CustomLog {access_log} combined
</VirtualHost>
"#,
            admin = self.admin_email,
            domain = self.domain,
            root = self.root(),
            access_log = self.access_log(),
            error_log = self.error_log(),
        )
    }
}
