//! Store key utilities.
//!
//! Descriptors are usually stored under the file name of the path they
//! describe (`/data/a.csv` is stored as `a.csv`).

use std::path::Path;

/// Compute a store key from a file path's final component.
///
/// Returns `None` if the path has no file name or it is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use datafile_core::util::ids::key_from_path;
///
/// assert_eq!(key_from_path(Path::new("/data/a.csv")), Some("a.csv".to_string()));
/// assert_eq!(key_from_path(Path::new("reports/q3.parquet")), Some("q3.parquet".to_string()));
/// assert_eq!(key_from_path(Path::new("/")), None);
/// ```
pub fn key_from_path(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}
