//! Process-wide registration of the active version info provider
//!
//! A host calls [`enable`] once during start-up, before any other thread
//! reads version info. Every later caller goes through [`instance`] and picks
//! what happens when nothing was enabled.

use std::io::Write;
use std::sync::{PoisonError, RwLock};

use tracing::error;

use crate::logging::flush_logging;
use crate::version::fallback::FallbackVersionInfo;
use crate::version::info::VersionInfo;

static ACTIVE: RwLock<Option<&'static dyn VersionInfo>> = RwLock::new(None);

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Terminating because valid version info has not been configured";

/// What [`instance`] does when no provider has been enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotEnabledAction {
    /// Hand out the shared [`FallbackVersionInfo`]
    Fallback,
    /// Abort the process
    Fatal,
}

/// Install `provider` as the active version info
///
/// Replaces any previously enabled provider. Intended for process
/// initialization only: readers that already hold the old provider keep it.
pub fn enable(provider: &'static dyn VersionInfo) {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = Some(provider);
}

/// Whether a provider has been enabled
pub fn is_enabled() -> bool {
    active().is_some()
}

/// The active provider, or the outcome of `action` when none was enabled
///
/// With [`NotEnabledAction::Fatal`] a missing provider terminates the process
/// and this function does not return.
pub fn instance(action: NotEnabledAction) -> &'static dyn VersionInfo {
    if let Some(provider) = active() {
        return provider;
    }

    match action {
        NotEnabledAction::Fallback => FallbackVersionInfo::shared(),
        NotEnabledAction::Fatal => not_configured(),
    }
}

fn active() -> Option<&'static dyn VersionInfo> {
    *ACTIVE.read().unwrap_or_else(PoisonError::into_inner)
}

/// Report the missing provider and abort. Not recoverable.
fn not_configured() -> ! {
    error!("{}", NOT_CONFIGURED_MESSAGE);
    // abort skips destructors, so the buffered log writer is drained here
    flush_logging();

    // Without a subscriber the record goes nowhere, so stderr gets it too
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{NOT_CONFIGURED_MESSAGE}");
    let _ = stderr.flush();

    std::process::abort()
}
