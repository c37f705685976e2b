//! Core utilities for Isha AI build tooling
//!
//! This crate provides shared functionality used by the platform-specific tools:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Properties parsing**: Java `.properties`-style files (`key.properties`,
//!   `local.properties`)
//! - **Configuration**: TOML-based tool configuration with defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use ishaai_core::properties::KeystoreProperties;
//! use std::path::Path;
//!
//! // A missing file is a valid empty configuration.
//! let props = KeystoreProperties::load(Path::new("android/key.properties"))
//!     .expect("unreadable key.properties");
//!
//! if props.is_empty() {
//!     eprintln!("No release signing configured");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod properties;

pub use error::{Error, ErrorCode, Result, ResultExt};
