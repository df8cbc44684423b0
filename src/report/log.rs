//! Build info log records

use std::fmt;

use tracing::info;

use crate::report::tls::TlsBackend;
use crate::version::info::{BuildInfoField, VersionInfo};

/// Sequence rendered lazily when a log record is formatted
///
/// The wrapped iterator is cloned on every render, so nothing is collected
/// up front and an unused record costs nothing.
#[derive(Clone)]
pub struct SeqLog<I>(I);

impl<I> SeqLog<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    pub fn new(iter: I) -> Self {
        Self(iter)
    }
}

impl<I> fmt::Debug for SeqLog<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// One build environment fact rendered as a single-key document
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl fmt::Debug for EnvironmentEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entry(&self.key, &self.value).finish()
    }
}

/// Build info fields that belong in the log record, in provider order
///
/// Same as the report's environment with empty values dropped.
pub fn log_environment(
    fields: &[BuildInfoField],
) -> impl Iterator<Item = EnvironmentEntry<'_>> + Clone {
    fields
        .iter()
        .filter(|field| field.include_in_report && !field.value.is_empty())
        .map(|field| EnvironmentEntry {
            key: &field.key,
            value: &field.value,
        })
}

/// Emit the "Build Info" record for `provider`
///
/// `modules` and `environment` are recorded as `Debug` values, so structured
/// sinks receive them as strings such as `[{"distmod": "ubuntu2204"}]` rather
/// than nested arrays.
pub fn log_build_info(provider: &dyn VersionInfo) {
    log_build_info_with(provider, &TlsBackend::current());
}

pub(crate) fn log_build_info_with(provider: &dyn VersionInfo, tls: &TlsBackend) {
    let modules = SeqLog::new(provider.modules().iter());
    let environment = SeqLog::new(log_environment(provider.build_info()));

    match tls {
        TlsBackend::OpenSsl { .. } => info!(
            version = provider.version(),
            gitVersion = provider.git_version(),
            openSSLVersion = %tls.openssl_version("", ""),
            allocator = provider.allocator(),
            modules = ?modules,
            environment = ?environment,
            "Build Info"
        ),
        _ => info!(
            version = provider.version(),
            gitVersion = provider.git_version(),
            allocator = provider.allocator(),
            modules = ?modules,
            environment = ?environment,
            "Build Info"
        ),
    }
}

pub fn log_target_min_os(provider: &dyn VersionInfo) {
    info!(
        targetMinOS = provider.target_min_os(),
        "Target operating system minimum version"
    );
}
