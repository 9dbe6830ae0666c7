use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

#[derive(Debug, thiserror::Error)]
pub enum DomainNameError {
    #[error("Domain name is empty")]
    Empty,

    #[error("Domain name contains invalid characters (allowed: A-Z a-z 0-9 . -): {0}")]
    InvalidCharacters(String),

    #[error("Domain name must not start or end with '.' or '-', or contain '..': {0}")]
    Malformed(String),
}

impl DomainName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainNameError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainNameError::Empty);
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(DomainNameError::InvalidCharacters(name));
        }

        // The name becomes a file name under the sites directories.
        if name.starts_with('-')
            || name.starts_with('.')
            || name.ends_with('-')
            || name.ends_with('.')
            || name.contains("..")
        {
            return Err(DomainNameError::Malformed(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The domain with every `.` removed, used as the default document root name.
    pub fn without_dots(&self) -> String {
        self.0.replace('.', "")
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
