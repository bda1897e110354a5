//! Configuration for filesystem handles.
//!
//! The crate owns no config file. `FsConfig` derives serde so an embedding
//! application can nest it in its own TOML (for example under `[fs]`).

use serde::{Deserialize, Serialize};
use std::io::{self, ErrorKind};

// ============================================================================
// Default Values
// ============================================================================

/// Central source of truth for configuration defaults.
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;
}

// Thin wrapper for serde's #[serde(default = "...")] requirement
fn default_separator() -> char {
    ConfigDefaults::SEPARATOR
}

// ============================================================================
// FsConfig
// ============================================================================

/// Settings shared by every handle created through one `FileSystem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsConfig {
    /// Path separator used to compose and decompose paths.
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl FsConfig {
    /// Reject separators that would make decomposition ambiguous.
    pub fn validate(&self) -> io::Result<()> {
        match self.separator {
            '.' => Err(io::Error::new(
                ErrorKind::InvalidInput,
                "separator cannot be '.', it delimits extensions",
            )),
            '\0' => Err(io::Error::new(
                ErrorKind::InvalidInput,
                "separator cannot be a null byte",
            )),
            _ => Ok(()),
        }
    }
}
