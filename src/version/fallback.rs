//! Sentinel provider used when no real version info has been enabled

use std::sync::OnceLock;

use crate::version::info::{BuildInfoField, VersionInfo};

pub const UNKNOWN: &str = "unknown";
pub const NO_GIT_VERSION: &str = "none";

/// Provider that answers every query with a fixed "unknown" value
#[derive(Debug)]
pub struct FallbackVersionInfo {
    modules: Vec<String>,
}

impl FallbackVersionInfo {
    /// The process-wide fallback instance, created on first use
    pub fn shared() -> &'static FallbackVersionInfo {
        static FALLBACK: OnceLock<FallbackVersionInfo> = OnceLock::new();
        FALLBACK.get_or_init(|| FallbackVersionInfo {
            modules: vec![UNKNOWN.to_string()],
        })
    }
}

impl VersionInfo for FallbackVersionInfo {
    fn major_version(&self) -> u32 {
        0
    }

    fn minor_version(&self) -> u32 {
        0
    }

    fn patch_version(&self) -> u32 {
        0
    }

    fn extra_version(&self) -> u32 {
        0
    }

    fn version(&self) -> &str {
        UNKNOWN
    }

    fn git_version(&self) -> &str {
        NO_GIT_VERSION
    }

    fn modules(&self) -> &[String] {
        &self.modules
    }

    fn allocator(&self) -> &str {
        UNKNOWN
    }

    fn js_engine(&self) -> &str {
        UNKNOWN
    }

    fn target_min_os(&self) -> &str {
        UNKNOWN
    }

    fn build_info(&self) -> &[BuildInfoField] {
        &[]
    }
}
