//! Android build configuration for Isha AI
//!
//! This crate resolves the build-time configuration the external build tool
//! consumes:
//! - Signing credential resolution per build variant
//! - Flutter-forwarded SDK and version metadata
//!
//! It never invokes Gradle or the signer itself; it only decides what they
//! should be handed.

#![warn(missing_docs)]

pub mod metadata;
pub mod signing;

pub use metadata::FlutterMetadata;
pub use signing::{
    check_release_signing, debug_credential, resolve_credential, BuildVariant, SigningCredential,
};
