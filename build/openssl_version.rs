//! Readable form of an OpenSSL header version number
//!
//! Shared by the build script and the crate's unit tests through `#[path]`.

/// Format `OPENSSL_VERSION_NUMBER` (hex, optional `0x` prefix)
///
/// 1.x packs `0xMNNFFPPS`: major, minor, fix, patch letter, status.
/// 3.x packs `0xMNN00PPS`: major, minor, patch, status.
pub fn format_openssl_version(raw: &str) -> Option<String> {
    let number = u64::from_str_radix(raw.trim_start_matches("0x"), 16).ok()?;
    let major = (number >> 28) & 0xf;
    let minor = (number >> 20) & 0xff;
    let patch = (number >> 4) & 0xff;

    if major >= 3 {
        return Some(format!("OpenSSL {major}.{minor}.{patch}"));
    }

    let fix = (number >> 12) & 0xff;
    let letter = match patch {
        0 => String::new(),
        1..=26 => char::from(b'a' + (patch as u8 - 1)).to_string(),
        _ => return None,
    };
    Some(format!("OpenSSL {major}.{minor}.{fix}{letter}"))
}
