//! Process-wide build and version information
//!
//! A host enables one [`VersionInfo`] provider at start-up; any component can
//! then read it back, render the build info report for diagnostic commands,
//! or log it.
//!
//! ```no_run
//! use version_info::report::{build_info_document, log_build_info};
//! use version_info::version::manifest::StaticVersionInfo;
//! use version_info::version::registry::{NotEnabledAction, enable, instance};
//!
//! let _ = version_info::logging::init_logging(&Default::default());
//! let info = StaticVersionInfo::new("4.2.1")
//!     .unwrap()
//!     .with_git_version("abc123")
//!     .leak();
//! enable(info);
//!
//! let provider = instance(NotEnabledAction::Fatal);
//! log_build_info(provider);
//! let document = build_info_document(provider);
//! assert_eq!(document["version"], "4.2.1");
//! ```

pub mod config;
pub mod logging;
pub mod report;
pub mod version;

#[cfg(test)]
#[path = "../build/openssl_version.rs"]
mod openssl_version;

pub use version::info::{BuildInfoField, VersionInfo};
pub use version::registry::{NotEnabledAction, enable, instance};
