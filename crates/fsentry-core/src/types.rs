//! Data types shared across the crate: entry kinds, metadata, and the
//! conflict policies taken by `make` and the directory lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Kind of filesystem entry a handle can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// Metadata for a filesystem entry.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub size: u64,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub kind: EntryKind,
}

/// What `File::make` / `Directory::make` do when the target already exists.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IfExists {
    /// Fail with `AlreadyExists`.
    #[default]
    ThrowOnExists,
    /// Remove the existing entry and create a fresh, empty one.
    Overwrite,
    /// Return a handle to the existing entry untouched.
    Open,
}

/// What `Directory::get_file` / `Directory::get_directory` do on a miss.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IfNotExists {
    /// Fail with `DoesNotExist`.
    #[default]
    ThrowOnMissing,
    /// Create the child and return a handle to it.
    Create,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_defaults() {
        assert_eq!(IfExists::default(), IfExists::ThrowOnExists);
        assert_eq!(IfNotExists::default(), IfNotExists::ThrowOnMissing);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(IfExists::from_str("overwrite").unwrap(), IfExists::Overwrite);
        assert_eq!(IfExists::from_str("open").unwrap(), IfExists::Open);
        assert_eq!(IfNotExists::from_str("create").unwrap(), IfNotExists::Create);
        assert!(IfExists::from_str("clobber").is_err());
    }

    #[test]
    fn test_policy_as_ref() {
        assert_eq!(IfExists::ThrowOnExists.as_ref(), "throw_on_exists");
        assert_eq!(IfNotExists::ThrowOnMissing.as_ref(), "throw_on_missing");
    }
}
