//! Host-defined version info provider for integration tests

use version_info::{BuildInfoField, VersionInfo};

/// Provider the way a host application would write one, without the crate's
/// `StaticVersionInfo`
pub struct HostVersionInfo {
    pub version: &'static str,
    pub version_array: [u32; 4],
    pub modules: Vec<String>,
    pub build_info: Vec<BuildInfoField>,
}

impl VersionInfo for HostVersionInfo {
    fn major_version(&self) -> u32 {
        self.version_array[0]
    }

    fn minor_version(&self) -> u32 {
        self.version_array[1]
    }

    fn patch_version(&self) -> u32 {
        self.version_array[2]
    }

    fn extra_version(&self) -> u32 {
        self.version_array[3]
    }

    fn version(&self) -> &str {
        self.version
    }

    fn git_version(&self) -> &str {
        "0123456789abcdef"
    }

    fn modules(&self) -> &[String] {
        &self.modules
    }

    fn allocator(&self) -> &str {
        "system"
    }

    fn js_engine(&self) -> &str {
        "none"
    }

    fn target_min_os(&self) -> &str {
        "Windows 10"
    }

    fn build_info(&self) -> &[BuildInfoField] {
        &self.build_info
    }
}

/// Leaked provider for `version`, usable with `enable`
pub fn host_version_info(version: &'static str, version_array: [u32; 4]) -> &'static HostVersionInfo {
    Box::leak(Box::new(HostVersionInfo {
        version,
        version_array,
        modules: vec!["enterprise".to_string()],
        build_info: vec![
            BuildInfoField::new("distmod", "rhel80", true),
            BuildInfoField::new("cppdefines", "", true),
            BuildInfoField::new("linkflags", "-pthread", false),
        ],
    }))
}
