//! Reporting of the active version info
//!
//! # Modules
//!
//! - [`build_info`]: Ordered build info document for diagnostic commands
//! - [`log`]: "Build Info" and target OS log records
//! - [`frontend`]: `"<name> v<version>"` banners
//! - [`tls`]: Compile-time TLS backend identity

pub mod build_info;
pub mod frontend;
pub mod log;
pub mod tls;

pub use build_info::{BuildInfoReport, TargetFamily, append_build_info, build_info_document};
pub use frontend::{make_version_string, router_version, shell_version, storage_version};
pub use log::{log_build_info, log_target_min_os};
pub use tls::{TlsBackend, openssl_version};
