//! Visibility of a data file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Access scope of a data file.
///
/// `Free` and `Public` grant the same reach today; they are kept distinct so
/// that stored policies keep whatever the author chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Only listed users and groups.
    #[default]
    Private,
    /// Accessible to everyone.
    Public,
    /// Unrestricted.
    Free,
}

impl Visibility {
    /// All variants in declaration order.
    pub const ALL: [Visibility; 3] = [Visibility::Private, Visibility::Public, Visibility::Free];

    /// Lowercase name, as used on disk and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
            Self::Free => "free",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private" => Ok(Self::Private),
            "public" => Ok(Self::Public),
            "free" => Ok(Self::Free),
            _ => Err(Error::UnknownVisibility {
                value: s.to_string(),
            }),
        }
    }
}
