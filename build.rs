//! Exposes the OpenSSL version the crate is compiled against.
//!
//! `openssl-sys` publishes its header version as `DEP_OPENSSL_VERSION_NUMBER`
//! to the build scripts of crates that depend on it directly. It is turned
//! into a readable string and handed to the compiler as
//! `VERSION_INFO_OPENSSL_COMPILED`.

use std::env;

#[path = "build/openssl_version.rs"]
mod openssl_version;

fn main() {
    println!("cargo:rerun-if-env-changed=DEP_OPENSSL_VERSION_NUMBER");

    let Ok(raw) = env::var("DEP_OPENSSL_VERSION_NUMBER") else {
        return;
    };

    if let Some(text) = openssl_version::format_openssl_version(&raw) {
        println!("cargo:rustc-env=VERSION_INFO_OPENSSL_COMPILED={text}");
    }
}
