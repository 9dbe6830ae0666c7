mod hosts_file;
mod request;
mod server_kind;
mod site_template;
pub mod value_objects;

pub use hosts_file::{HostsFile, LOOPBACK};
pub use request::{Action, RequestError, VirtualHostRequest};
pub use server_kind::ServerKind;
pub use site_template::{PLACEHOLDER_CONTENT, SiteTemplate};
pub use value_objects::{DocumentRoot, DocumentRootError, DomainName, DomainNameError};
