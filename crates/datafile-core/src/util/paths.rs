//! Generic path utilities.

use std::path::PathBuf;

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or platforms without a home directory,
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use datafile_core::util::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/datafile"), std::path::PathBuf::from("/etc/datafile"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
