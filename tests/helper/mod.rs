//! Shared test utilities

pub mod provider;

pub use provider::host_version_info;
