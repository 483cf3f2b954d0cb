//! # datafile-cli
//!
//! Command-line tool for managing data file access descriptors.
//!
//! The `datafile` binary keeps a store of descriptors in one JSON file and
//! offers commands to:
//! - create the store
//! - register files
//! - grant users and groups
//! - set visibility
//! - inspect descriptors and configuration
//!
//! It records policy only and never decides whether access is allowed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
