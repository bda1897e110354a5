//! fsentry-core: typed handles over filesystem entries.
//!
//! Callers work with [`File`] and [`Directory`] handles instead of raw path
//! strings. Creation and lookup take an explicit policy ([`IfExists`],
//! [`IfNotExists`]) saying what to do when the target already exists or is
//! missing. Directory handles list their children lazily, once, and never
//! refresh that listing.
//!
//! # Quick Start
//!
//! ```no_run
//! use fsentry_core::{Directory, Entry, FileSystem, IfExists, IfNotExists};
//!
//! fn main() -> std::io::Result<()> {
//!     let fs = FileSystem::local();
//!     let mut sandbox = Directory::make(&fs, "/tmp/sandbox", IfExists::Open)?;
//!     let file = sandbox.get_file("child.txt", IfNotExists::Create)?;
//!     file.write("Hello ")?;
//!     file.append("world!")?;
//!
//!     for sub in sandbox.get_directories()? {
//!         println!("{}", sub.path());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! All operations block; nothing here coordinates concurrent access to the
//! same path.

pub mod backend;
pub mod config;
mod directory;
mod entry;
pub mod error;
mod file;
mod filesystem;
pub mod local;
pub mod path;
pub mod safe_io;
pub mod types;

pub use backend::FsBackend;
pub use config::FsConfig;
pub use directory::Directory;
pub use entry::Entry;
pub use error::{FsError, FsErrorKind, Result};
pub use file::File;
pub use filesystem::FileSystem;
pub use local::LocalBackend;
pub use path::PathInfo;
pub use types::{EntryKind, IfExists, IfNotExists, Metadata};
