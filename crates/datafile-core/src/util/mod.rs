//! Utility modules for path handling and store key computation.
//!
//! # Modules
//!
//! - [`ids`]: Store keys derived from file paths
//! - [`paths`]: Generic path utilities (tilde expansion)
//! - [`resolver`]: Config file resolution

pub mod ids;
pub mod paths;
pub mod resolver;
