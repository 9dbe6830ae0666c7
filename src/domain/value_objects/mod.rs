mod document_root;
mod domain_name;

pub use document_root::{DocumentRoot, DocumentRootError};
pub use domain_name::{DomainName, DomainNameError};
