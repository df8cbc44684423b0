//! TLS library identity selected at compile time
//!
//! The backend is chosen with cargo features. Enabling none of them means the
//! binary was built without TLS support.

use serde::Serialize;

#[cfg(any(
    all(feature = "tls-openssl", feature = "tls-schannel"),
    all(feature = "tls-openssl", feature = "tls-secure-transport"),
    all(feature = "tls-schannel", feature = "tls-secure-transport"),
))]
compile_error!(
    "at most one of `tls-openssl`, `tls-schannel`, `tls-secure-transport` may be enabled"
);

pub const DISABLED: &str = "disabled";
pub const SCHANNEL_NAME: &str = "Windows SChannel";
pub const SECURE_TRANSPORT_NAME: &str = "Apple Secure Transport";

/// The `openssl` sub-document of the build info report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsReport {
    pub running: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiled: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsBackend {
    Disabled,
    OpenSsl {
        /// Version text of the library loaded at runtime
        running: String,
        /// Version of the headers the binary was built against
        compiled: String,
    },
    Schannel,
    SecureTransport,
}

impl TlsBackend {
    /// The backend this binary was built with
    #[cfg(feature = "tls-openssl")]
    pub fn current() -> Self {
        TlsBackend::OpenSsl {
            running: openssl::version::version().to_string(),
            compiled: option_env!("VERSION_INFO_OPENSSL_COMPILED")
                .unwrap_or(crate::version::fallback::UNKNOWN)
                .to_string(),
        }
    }

    #[cfg(feature = "tls-schannel")]
    pub fn current() -> Self {
        TlsBackend::Schannel
    }

    #[cfg(feature = "tls-secure-transport")]
    pub fn current() -> Self {
        TlsBackend::SecureTransport
    }

    #[cfg(not(any(
        feature = "tls-openssl",
        feature = "tls-schannel",
        feature = "tls-secure-transport"
    )))]
    pub fn current() -> Self {
        TlsBackend::Disabled
    }

    pub fn report(&self) -> TlsReport {
        match self {
            TlsBackend::Disabled => TlsReport {
                running: DISABLED.to_string(),
                compiled: Some(DISABLED.to_string()),
            },
            TlsBackend::OpenSsl { running, compiled } => TlsReport {
                running: running.clone(),
                compiled: Some(compiled.clone()),
            },
            TlsBackend::Schannel => TlsReport {
                running: SCHANNEL_NAME.to_string(),
                compiled: None,
            },
            TlsBackend::SecureTransport => TlsReport {
                running: SECURE_TRANSPORT_NAME.to_string(),
                compiled: None,
            },
        }
    }

    /// Running OpenSSL version wrapped in `prefix`/`suffix`
    ///
    /// Empty for every backend other than OpenSSL.
    pub fn openssl_version(&self, prefix: &str, suffix: &str) -> String {
        match self {
            TlsBackend::OpenSsl { running, .. } => format!("{prefix}{running}{suffix}"),
            _ => String::new(),
        }
    }
}

/// Running OpenSSL version of this binary, see [`TlsBackend::openssl_version`]
pub fn openssl_version(prefix: &str, suffix: &str) -> String {
    TlsBackend::current().openssl_version(prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn openssl() -> TlsBackend {
        TlsBackend::OpenSsl {
            running: "OpenSSL 3.0.2 15 Mar 2022".to_string(),
            compiled: "OpenSSL 3.0.2".to_string(),
        }
    }

    #[rstest]
    #[case(TlsBackend::Disabled, "disabled", Some("disabled"))]
    #[case(openssl(), "OpenSSL 3.0.2 15 Mar 2022", Some("OpenSSL 3.0.2"))]
    #[case(TlsBackend::Schannel, "Windows SChannel", None)]
    #[case(TlsBackend::SecureTransport, "Apple Secure Transport", None)]
    fn report_describes_backend(
        #[case] backend: TlsBackend,
        #[case] running: &str,
        #[case] compiled: Option<&str>,
    ) {
        assert_eq!(
            backend.report(),
            TlsReport {
                running: running.to_string(),
                compiled: compiled.map(str::to_string),
            }
        );
    }

    #[rstest]
    #[case(TlsBackend::Disabled, "")]
    #[case(openssl(), "[OpenSSL 3.0.2 15 Mar 2022]")]
    #[case(TlsBackend::Schannel, "")]
    #[case(TlsBackend::SecureTransport, "")]
    fn openssl_version_only_for_openssl(#[case] backend: TlsBackend, #[case] expected: &str) {
        assert_eq!(backend.openssl_version("[", "]"), expected);
    }

    #[test]
    fn report_omits_compiled_for_platform_backends() {
        let json = serde_json::to_string(&TlsBackend::Schannel.report()).unwrap();

        assert_eq!(json, r#"{"running":"Windows SChannel"}"#);
    }

    #[cfg(not(any(
        feature = "tls-openssl",
        feature = "tls-schannel",
        feature = "tls-secure-transport"
    )))]
    #[test]
    fn current_is_disabled_without_tls_features() {
        assert_eq!(TlsBackend::current(), TlsBackend::Disabled);
        assert_eq!(openssl_version("a", "b"), "");
    }
}
