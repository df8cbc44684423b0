//! Version information provider abstraction

use serde::{Deserialize, Serialize};

use crate::version::matcher::parse_major_minor;

/// A labeled build or environment fact
///
/// Fields are reported in the order the provider returns them. Entries with
/// `include_in_report == false` are kept for internal use only and never show
/// up in the build info report or the build info log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfoField {
    pub key: String,
    pub value: String,
    #[serde(rename = "inBuildInfo", default = "default_include_in_report")]
    pub include_in_report: bool,
}

fn default_include_in_report() -> bool {
    true
}

impl BuildInfoField {
    pub fn new(key: impl Into<String>, value: impl Into<String>, include_in_report: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            include_in_report,
        }
    }
}

/// Trait for sources of build and version metadata
///
/// A host supplies one implementation at start-up through
/// [`enable`](crate::version::registry::enable); everything else reads it back
/// through [`instance`](crate::version::registry::instance). Implementations
/// must not change their answers after being enabled.
pub trait VersionInfo: Send + Sync {
    fn major_version(&self) -> u32;

    fn minor_version(&self) -> u32;

    fn patch_version(&self) -> u32;

    fn extra_version(&self) -> u32;

    /// Display version, e.g. "4.2.1-rc0"
    fn version(&self) -> &str;

    /// Revision the binary was built from, "none" when unknown
    fn git_version(&self) -> &str;

    /// Optional components compiled into the binary
    fn modules(&self) -> &[String];

    fn allocator(&self) -> &str;

    fn js_engine(&self) -> &str;

    fn target_min_os(&self) -> &str;

    /// Compiler and build environment facts, in display order
    fn build_info(&self) -> &[BuildInfoField];

    /// `[major, minor, patch, extra]`
    fn version_array(&self) -> [u32; 4] {
        [
            self.major_version(),
            self.minor_version(),
            self.patch_version(),
            self.extra_version(),
        ]
    }

    /// Check whether `other_version` shares this provider's major and minor
    ///
    /// Only the leading `<major>.<minor>.` of `other_version` is looked at.
    /// Strings that do not start that way never match, including a bare
    /// "4.2".
    fn is_same_major_minor(&self, other_version: &str) -> bool {
        let Some((major, minor)) = parse_major_minor(other_version) else {
            return false;
        };

        major == self.major_version() && minor == self.minor_version()
    }
}
