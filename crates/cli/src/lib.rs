//! CLI utilities for Isha AI build tooling

#![warn(missing_docs)]

pub mod output;
