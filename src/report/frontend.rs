//! Version banners printed by the front-end binaries

use crate::version::info::VersionInfo;

pub const SHELL_NAME: &str = "MongoDB shell version";
pub const ROUTER_NAME: &str = "mongos version";
pub const STORAGE_NAME: &str = "db version";

/// `"<binary_name> v<version>"`
pub fn make_version_string(provider: &dyn VersionInfo, binary_name: &str) -> String {
    format!("{binary_name} v{}", provider.version())
}

pub fn shell_version(provider: &dyn VersionInfo) -> String {
    make_version_string(provider, SHELL_NAME)
}

pub fn router_version(provider: &dyn VersionInfo) -> String {
    make_version_string(provider, ROUTER_NAME)
}

pub fn storage_version(provider: &dyn VersionInfo) -> String {
    make_version_string(provider, STORAGE_NAME)
}
