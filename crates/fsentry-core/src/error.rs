//! Error type for handle operations.
//!
//! Every failure is one `FsError` tagged with a kind and the path it concerns.
//! The underlying `io::Error`, when there is one, is kept as the source.

use std::fmt;
use std::io;

use thiserror::Error;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsErrorKind {
    /// Path is absent, or present as the other kind of entry.
    DoesNotExist,
    /// Create requested with `IfExists::ThrowOnExists` over an existing entry.
    AlreadyExists,
    /// The create primitive (or the removal step of an overwrite) failed.
    CouldNotCreate,
    /// A rename inside `set_name` / `set_location` / `set_path` failed.
    CouldNotMove,
    /// Listing, metadata, or content read failed.
    CouldNotRead,
    /// Content write or append failed.
    CouldNotWrite,
    /// Deleting the entry failed.
    CouldNotRemove,
}

impl fmt::Display for FsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FsErrorKind::DoesNotExist => "does not exist",
            FsErrorKind::AlreadyExists => "already exists",
            FsErrorKind::CouldNotCreate => "could not be created",
            FsErrorKind::CouldNotMove => "could not be moved",
            FsErrorKind::CouldNotRead => "could not be read",
            FsErrorKind::CouldNotWrite => "could not be written",
            FsErrorKind::CouldNotRemove => "could not be removed",
        };
        f.write_str(s)
    }
}

/// A failed handle operation.
#[derive(Debug, Error)]
#[error("'{path}' {kind}")]
pub struct FsError {
    kind: FsErrorKind,
    path: String,
    #[source]
    source: Option<io::Error>,
}

impl FsError {
    pub fn new(kind: FsErrorKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            source: None,
        }
    }

    /// Attach the primitive's `io::Error`.
    pub fn with_source(kind: FsErrorKind, path: impl Into<String>, source: io::Error) -> Self {
        Self {
            kind,
            path: path.into(),
            source: Some(source),
        }
    }

    pub fn does_not_exist(path: impl Into<String>) -> Self {
        Self::new(FsErrorKind::DoesNotExist, path)
    }

    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::new(FsErrorKind::AlreadyExists, path)
    }

    pub fn kind(&self) -> FsErrorKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Result alias for handle operations.
pub type Result<T> = std::result::Result<T, FsError>;

impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        let kind = match err.kind {
            FsErrorKind::DoesNotExist => io::ErrorKind::NotFound,
            FsErrorKind::AlreadyExists => io::ErrorKind::AlreadyExists,
            _ => err
                .source
                .as_ref()
                .map(io::Error::kind)
                .unwrap_or(io::ErrorKind::Other),
        };
        io::Error::new(kind, err)
    }
}
