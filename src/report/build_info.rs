//! Structured build info report
//!
//! Field names and their order are consumed by external tooling and must stay
//! stable. Only `targetMinOS` may be missing, on non-Windows targets.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::report::tls::{TlsBackend, TlsReport};
use crate::version::info::{BuildInfoField, VersionInfo};

/// Maximum size of a user document, in bytes
pub const MAX_BSON_OBJECT_SIZE: u32 = 16 * 1024 * 1024;

pub const SYS_INFO_DEPRECATED: &str = "deprecated";

/// OS family the binary targets, deciding whether `targetMinOS` is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFamily {
    Windows,
    Other,
}

impl TargetFamily {
    pub fn current() -> Self {
        if cfg!(windows) {
            TargetFamily::Windows
        } else {
            TargetFamily::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfoReport {
    pub version: String,
    pub git_version: String,
    #[serde(rename = "targetMinOS", skip_serializing_if = "Option::is_none")]
    pub target_min_os: Option<String>,
    pub modules: Vec<String>,
    pub allocator: String,
    pub javascript_engine: String,
    pub sys_info: &'static str,
    pub version_array: [u32; 4],
    pub openssl: TlsReport,
    pub build_environment: IndexMap<String, String>,
    pub bits: u32,
    pub debug: bool,
    pub max_bson_object_size: u32,
}

impl BuildInfoReport {
    /// Report for the running binary
    pub fn new(info: &dyn VersionInfo) -> Self {
        Self::for_target(info, TargetFamily::current(), &TlsBackend::current())
    }

    /// Report as it would be produced for `family` with the `tls` backend
    pub fn for_target(info: &dyn VersionInfo, family: TargetFamily, tls: &TlsBackend) -> Self {
        let target_min_os = match family {
            TargetFamily::Windows => Some(info.target_min_os().to_string()),
            TargetFamily::Other => None,
        };

        // A repeated key keeps its first position and takes the last value
        let build_environment = report_environment(info.build_info())
            .map(|field| (field.key.clone(), field.value.clone()))
            .collect();

        Self {
            version: info.version().to_string(),
            git_version: info.git_version().to_string(),
            target_min_os,
            modules: info.modules().to_vec(),
            allocator: info.allocator().to_string(),
            javascript_engine: info.js_engine().to_string(),
            sys_info: SYS_INFO_DEPRECATED,
            version_array: info.version_array(),
            openssl: tls.report(),
            build_environment,
            bits: usize::BITS,
            debug: cfg!(debug_assertions),
            max_bson_object_size: MAX_BSON_OBJECT_SIZE,
        }
    }

    /// The report as an ordered JSON document
    ///
    /// Same keys, order and values as the `Serialize` form.
    pub fn to_document(&self) -> Map<String, Value> {
        let mut document = Map::new();
        document.insert("version".to_string(), Value::from(self.version.as_str()));
        document.insert("gitVersion".to_string(), Value::from(self.git_version.as_str()));
        if let Some(min_os) = &self.target_min_os {
            document.insert("targetMinOS".to_string(), Value::from(min_os.as_str()));
        }
        document.insert("modules".to_string(), Value::from(self.modules.clone()));
        document.insert("allocator".to_string(), Value::from(self.allocator.as_str()));
        document.insert(
            "javascriptEngine".to_string(),
            Value::from(self.javascript_engine.as_str()),
        );
        document.insert("sysInfo".to_string(), Value::from(self.sys_info));
        document.insert(
            "versionArray".to_string(),
            Value::from(self.version_array.to_vec()),
        );

        let mut openssl = Map::new();
        openssl.insert("running".to_string(), Value::from(self.openssl.running.as_str()));
        if let Some(compiled) = &self.openssl.compiled {
            openssl.insert("compiled".to_string(), Value::from(compiled.as_str()));
        }
        document.insert("openssl".to_string(), Value::Object(openssl));

        let environment = self
            .build_environment
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value.as_str())))
            .collect::<Map<_, _>>();
        document.insert("buildEnvironment".to_string(), Value::Object(environment));

        document.insert("bits".to_string(), Value::from(self.bits));
        document.insert("debug".to_string(), Value::from(self.debug));
        document.insert(
            "maxBsonObjectSize".to_string(),
            Value::from(self.max_bson_object_size),
        );
        document
    }
}

/// Build info fields that belong in the report, in provider order
///
/// Entries with an empty value are kept.
pub fn report_environment(
    fields: &[BuildInfoField],
) -> impl Iterator<Item = &BuildInfoField> + Clone {
    fields.iter().filter(|field| field.include_in_report)
}

/// Append the build info of `info` to `document`
///
/// Keys already present in `document` keep their position and are
/// overwritten; new keys are appended in report order.
pub fn append_build_info(info: &dyn VersionInfo, document: &mut Map<String, Value>) {
    document.extend(BuildInfoReport::new(info).to_document());
}

/// Build info of `info` as a standalone ordered document
pub fn build_info_document(info: &dyn VersionInfo) -> Map<String, Value> {
    BuildInfoReport::new(info).to_document()
}
