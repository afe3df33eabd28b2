//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries to the host application.
//! The host supplies URL opening; the infrastructure layer provides default
//! localizers and host identity sources.

pub mod host_identity;
pub mod localizer;
pub mod url_opener;

pub use host_identity::HostIdentity;
pub use localizer::Localizer;
pub use url_opener::UrlOpener;
