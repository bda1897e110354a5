//! Backend trait: the filesystem primitives handles are built on.
//!
//! Backends are intentionally simple. They answer kind queries and run single
//! primitives; every policy decision (what to do when something exists or
//! is missing, when to commit in-memory state) lives in the handle types.
//!
//! # Implementing a backend
//!
//! Paths arrive as plain strings already composed with the configured
//! separator. Map them to your storage and report failures as `io::Error`;
//! do not retry.

use std::io;

use crate::types::{EntryKind, Metadata};

/// Synchronous filesystem primitives.
///
/// Every method blocks until the primitive completes.
pub trait FsBackend: Send + Sync {
    /// Kind of the entry at `path`, or `None` if there is nothing there
    /// (or it is neither a regular file nor a directory).
    fn kind(&self, path: &str) -> Option<EntryKind>;

    /// Names of the entries directly inside the directory at `path`.
    ///
    /// Order is whatever the storage enumerates in. May include `.`/`..`.
    fn list(&self, path: &str) -> io::Result<Vec<String>>;

    /// Create a new empty file. Fails if anything already exists at `path`.
    fn create_file(&self, path: &str) -> io::Result<()>;

    /// Create a single directory. The parent must exist.
    fn create_dir(&self, path: &str) -> io::Result<()>;

    /// Remove a regular file.
    fn remove_file(&self, path: &str) -> io::Result<()>;

    /// Remove an empty directory.
    fn remove_dir(&self, path: &str) -> io::Result<()>;

    /// Rename (same-volume move) a file or directory.
    fn rename(&self, src: &str, dst: &str) -> io::Result<()>;

    /// Metadata for the entry at `path`.
    fn metadata(&self, path: &str) -> io::Result<Metadata>;

    /// Read the full contents of a file.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Replace the contents of a file.
    fn write(&self, path: &str, data: &[u8]) -> io::Result<()>;

    /// Append to an existing file.
    fn append(&self, path: &str, data: &[u8]) -> io::Result<()>;
}
