//! Ready-made version info provider backed by plain owned values
//!
//! Hosts can build a [`StaticVersionInfo`] from a version string and builder
//! calls, from a JSON build manifest written by their build tooling, or from
//! the Cargo package metadata via [`cargo_version_info!`](crate::cargo_version_info).

use std::path::Path;

use semver::Version;
use serde::Deserialize;

use crate::version::error::ManifestError;
use crate::version::fallback::{NO_GIT_VERSION, UNKNOWN};
use crate::version::info::{BuildInfoField, VersionInfo};

/// Build manifest as produced by the host's build tooling
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionManifest {
    pub version: String,
    #[serde(default)]
    pub git_version: Option<String>,
    #[serde(default)]
    pub version_array: Option<[u32; 4]>,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub allocator: Option<String>,
    #[serde(default)]
    pub js_engine: Option<String>,
    #[serde(default, rename = "targetMinOS")]
    pub target_min_os: Option<String>,
    #[serde(default)]
    pub build_info: Vec<BuildInfoField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticVersionInfo {
    version_array: [u32; 4],
    version: String,
    git_version: String,
    modules: Vec<String>,
    allocator: String,
    js_engine: String,
    target_min_os: String,
    build_info: Vec<BuildInfoField>,
}

impl StaticVersionInfo {
    /// Create a provider from a semver version string
    ///
    /// The extra component is taken from the trailing number of the
    /// pre-release tag ("4.2.1-rc3" gives 3) and is 0 otherwise.
    pub fn new(version: impl Into<String>) -> Result<Self, ManifestError> {
        let version = version.into();
        let version_array = version_array_from_str(&version)?;
        Ok(Self::with_version_array(version, version_array))
    }

    /// Create a provider with explicit components, for versions that are not semver
    pub fn with_version_array(version: impl Into<String>, version_array: [u32; 4]) -> Self {
        Self {
            version_array,
            version: version.into(),
            git_version: NO_GIT_VERSION.to_string(),
            modules: Vec::new(),
            allocator: UNKNOWN.to_string(),
            js_engine: UNKNOWN.to_string(),
            target_min_os: UNKNOWN.to_string(),
            build_info: Vec::new(),
        }
    }

    pub fn from_manifest(manifest: VersionManifest) -> Result<Self, ManifestError> {
        let mut info = match manifest.version_array {
            Some(array) => Self::with_version_array(manifest.version, array),
            None => Self::new(manifest.version)?,
        };

        if let Some(git_version) = manifest.git_version {
            info.git_version = git_version;
        }
        if let Some(allocator) = manifest.allocator {
            info.allocator = allocator;
        }
        if let Some(js_engine) = manifest.js_engine {
            info.js_engine = js_engine;
        }
        if let Some(target_min_os) = manifest.target_min_os {
            info.target_min_os = target_min_os;
        }
        info.modules = manifest.modules;
        info.build_info = manifest.build_info;

        Ok(info)
    }

    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: VersionManifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn with_git_version(mut self, git_version: impl Into<String>) -> Self {
        self.git_version = git_version.into();
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.modules.push(module.into());
        self
    }

    pub fn with_allocator(mut self, allocator: impl Into<String>) -> Self {
        self.allocator = allocator.into();
        self
    }

    pub fn with_js_engine(mut self, js_engine: impl Into<String>) -> Self {
        self.js_engine = js_engine.into();
        self
    }

    pub fn with_target_min_os(mut self, target_min_os: impl Into<String>) -> Self {
        self.target_min_os = target_min_os.into();
        self
    }

    /// Append a build environment fact; order of calls is display order
    pub fn with_build_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        include_in_report: bool,
    ) -> Self {
        self.build_info
            .push(BuildInfoField::new(key, value, include_in_report));
        self
    }

    /// Move onto the heap for the rest of the process, as [`enable`] requires
    ///
    /// [`enable`]: crate::version::registry::enable
    pub fn leak(self) -> &'static Self {
        Box::leak(Box::new(self))
    }
}

fn version_array_from_str(version: &str) -> Result<[u32; 4], ManifestError> {
    let invalid = |source| ManifestError::InvalidVersion {
        version: version.to_string(),
        source,
    };
    let parsed = Version::parse(version).map_err(|source| invalid(Some(source)))?;

    let component = |n: u64| u32::try_from(n).map_err(|_| invalid(None));
    let extra = trailing_number(parsed.pre.as_str()).unwrap_or(0);

    Ok([
        component(parsed.major)?,
        component(parsed.minor)?,
        component(parsed.patch)?,
        extra,
    ])
}

fn trailing_number(tag: &str) -> Option<u32> {
    tag.rsplit(|c: char| !c.is_ascii_digit()).next()?.parse().ok()
}

impl VersionInfo for StaticVersionInfo {
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
        &self.version
    }

    fn git_version(&self) -> &str {
        &self.git_version
    }

    fn modules(&self) -> &[String] {
        &self.modules
    }

    fn allocator(&self) -> &str {
        &self.allocator
    }

    fn js_engine(&self) -> &str {
        &self.js_engine
    }

    fn target_min_os(&self) -> &str {
        &self.target_min_os
    }

    fn build_info(&self) -> &[BuildInfoField] {
        &self.build_info
    }
}

/// Build a [`StaticVersionInfo`] from the calling crate's Cargo metadata
///
/// Components come from `CARGO_PKG_VERSION_*`; the git revision is read from
/// the `GIT_HASH` compile-time variable when the host's build script sets it.
#[macro_export]
macro_rules! cargo_version_info {
    () => {{
        let extra = env!("CARGO_PKG_VERSION_PRE")
            .rsplit(|c: char| !c.is_ascii_digit())
            .next()
            .and_then(|digits| digits.parse::<u32>().ok())
            .unwrap_or(0);
        let info = $crate::version::manifest::StaticVersionInfo::with_version_array(
            env!("CARGO_PKG_VERSION"),
            [
                env!("CARGO_PKG_VERSION_MAJOR").parse::<u32>().unwrap_or(0),
                env!("CARGO_PKG_VERSION_MINOR").parse::<u32>().unwrap_or(0),
                env!("CARGO_PKG_VERSION_PATCH").parse::<u32>().unwrap_or(0),
                extra,
            ],
        );
        match option_env!("GIT_HASH") {
            Some(hash) => info.with_git_version(hash),
            None => info,
        }
    }};
}
