use std::fmt;
use std::path::{Path, PathBuf};

use super::{DocumentRoot, DocumentRootError, DomainName, DomainNameError};

/// Rejections raised while building a request, before any side effect.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Domain(#[from] DomainNameError),

    #[error(transparent)]
    DocumentRoot(#[from] DocumentRootError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A validated request to provision or tear down one virtual host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualHostRequest {
    pub action: Action,
    pub domain: DomainName,
    pub root_override: Option<PathBuf>,
}

impl VirtualHostRequest {
    pub fn new(
        action: Action,
        domain: &str,
        root_override: Option<PathBuf>,
    ) -> Result<Self, RequestError> {
        let domain = DomainName::new(domain)?;
        if let Some(dir) = &root_override {
            DocumentRoot::validate_override(dir)?;
        }

        Ok(Self {
            action,
            domain,
            root_override,
        })
    }

    pub fn document_root(&self, web_root: &Path) -> DocumentRoot {
        DocumentRoot::resolve(web_root, &self.domain, self.root_override.as_deref())
    }
}
