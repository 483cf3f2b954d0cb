//! # datafile-storage
//!
//! Typed key-value store that persists itself as a single JSON document.
//!
//! - [`KeyedStore`]: the in-memory mapping with `add`/`get` and whole-file
//!   `save`/`load`
//! - [`document`]: the on-disk document format
//! - [`DescriptorStore`]: a store of access descriptors keyed by name
//!
//! ```no_run
//! use datafile_acl::{AccessDescriptor, Visibility};
//! use datafile_storage::DescriptorStore;
//!
//! # fn main() -> datafile_storage::Result<()> {
//! let mut descriptor = AccessDescriptor::new("/data/a.csv");
//! descriptor.add_user("alice");
//! descriptor.set_visibility(Visibility::Public);
//!
//! let mut store = DescriptorStore::new();
//! store.add("a.csv".to_string(), descriptor.clone());
//! store.save("acl.json")?;
//!
//! let reloaded = DescriptorStore::open("acl.json")?;
//! assert_eq!(reloaded.get("a.csv")?, &descriptor);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod store;

#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use store::KeyedStore;

/// Store of access descriptors keyed by a short name (usually the file name).
pub type DescriptorStore = KeyedStore<String, datafile_acl::AccessDescriptor>;
