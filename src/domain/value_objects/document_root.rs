use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::DomainName;

#[derive(Debug, thiserror::Error)]
pub enum DocumentRootError {
    #[error("Document root is empty")]
    Empty,

    #[error(
        "Relative document root must stay under the web root (no '..' or '.' components): {}",
        .0.display()
    )]
    EscapesWebRoot(PathBuf),
}

/// Directory served as a site's content root.
///
/// Resolution is pure: create and delete must locate the same directory
/// for the same inputs, so nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot(PathBuf);

impl DocumentRoot {
    /// Check an operator-supplied root before anything resolves it.
    ///
    /// Absolute paths are taken as given. Relative paths may only contain
    /// plain names, so the result stays strictly below the web root.
    pub fn validate_override(dir: &Path) -> Result<(), DocumentRootError> {
        if dir.as_os_str().is_empty() {
            return Err(DocumentRootError::Empty);
        }
        if dir.is_absolute() {
            return Ok(());
        }
        if !dir.components().all(|c| matches!(c, Component::Normal(_))) {
            return Err(DocumentRootError::EscapesWebRoot(dir.to_path_buf()));
        }
        Ok(())
    }

    /// Resolve the document root for `domain`.
    ///
    /// - absolute override: used unchanged
    /// - relative override: joined under `web_root`
    /// - no override: `web_root` joined with the domain minus its dots
    pub fn resolve(web_root: &Path, domain: &DomainName, root_override: Option<&Path>) -> Self {
        let path = match root_override {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => web_root.join(dir),
            None => web_root.join(domain.without_dots()),
        };
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DocumentRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
