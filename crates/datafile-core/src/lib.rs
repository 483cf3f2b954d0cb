//! Datafile Core — shared errors, configuration, and path utilities.
//!
//! This crate provides the foundational pieces used across all datafile crates.
//! It has no internal datafile dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: TOML configuration with environment overrides
//! - [`util`]: Path and key utilities

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{DatafileConfig, LoggingSettings, StoreSettings};
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::key_from_path;
pub use util::resolver::ConfigResolver;
