//! Version information providers and the process-wide registry
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  enable   ┌─────────────┐  instance  ┌────────────┐
//! │ StaticVersionInfo│──────────▶│  Registry   │───────────▶│  Reporter  │
//! │ (or host type)   │           │ (one active)│            │ (report,   │
//! └──────────────────┘           └─────────────┘            │  log, str) │
//!                                       │ none enabled      └────────────┘
//!                                       ▼
//!                              ┌──────────────────┐
//!                              │ FallbackVersion  │
//!                              │ Info / abort     │
//!                              └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`info`]: `VersionInfo` trait and `BuildInfoField`
//! - [`fallback`]: Sentinel provider used when nothing was enabled
//! - [`manifest`]: `StaticVersionInfo`, built from values or a JSON manifest
//! - [`matcher`]: Major/minor extraction for version comparison
//! - [`registry`]: `enable` / `instance`
//! - [`error`]: Error types for manifest loading

pub mod error;
pub mod fallback;
pub mod info;
pub mod manifest;
pub mod matcher;
pub mod registry;
