//! # datafile-acl
//!
//! Access descriptors for data files.
//!
//! A descriptor records the access policy of one file:
//! - the path it describes
//! - the users allowed to use it
//! - the groups allowed to use it
//! - its [`Visibility`] (private, public, or free)
//!
//! Descriptors record intent only. Nothing in this crate decides whether a
//! given caller may access a file.
//!
//! ```
//! use datafile_acl::{AccessDescriptor, Visibility};
//!
//! let mut descriptor = AccessDescriptor::new("/data/a.csv");
//! descriptor.add_user("alice");
//! descriptor.add_user("alice");
//! descriptor.set_visibility(Visibility::Public);
//!
//! assert_eq!(descriptor.allowed_users().count(), 1);
//! assert_eq!(descriptor.visibility(), Visibility::Public);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod descriptor;
pub mod error;
pub mod identity;
pub mod visibility;

#[cfg(test)]
mod proptests;

pub use descriptor::AccessDescriptor;
pub use error::{Error, Result};
pub use identity::{GroupId, UserId};
pub use visibility::Visibility;
