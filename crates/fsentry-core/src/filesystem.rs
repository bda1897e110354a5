//! FileSystem: the context every handle is created through.
//!
//! Bundles a backend with the configuration handles need (the separator).
//! Cloning is cheap; every handle keeps its own clone so it can issue
//! primitives later (renames, lookups) without any global state.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::backend::FsBackend;
use crate::config::FsConfig;
use crate::local::LocalBackend;
use crate::path::{self, PathInfo};
use crate::types::EntryKind;

/// Backend plus configuration.
#[derive(Clone)]
pub struct FileSystem {
    backend: Arc<dyn FsBackend>,
    config: FsConfig,
}

impl FileSystem {
    /// Wrap a backend with the given configuration.
    pub fn new(backend: Arc<dyn FsBackend>, config: FsConfig) -> io::Result<Self> {
        config.validate()?;
        Ok(Self { backend, config })
    }

    /// The host filesystem with default configuration.
    pub fn local() -> Self {
        Self {
            backend: Arc::new(LocalBackend::new()),
            config: FsConfig::default(),
        }
    }

    /// The host filesystem with a custom configuration.
    pub fn with_config(config: FsConfig) -> io::Result<Self> {
        Self::new(Arc::new(LocalBackend::new()), config)
    }

    pub fn config(&self) -> &FsConfig {
        &self.config
    }

    pub fn separator(&self) -> char {
        self.config.separator
    }

    pub(crate) fn backend(&self) -> &dyn FsBackend {
        self.backend.as_ref()
    }

    // -- pure path helpers --

    pub fn path_info(&self, path: &str) -> PathInfo {
        PathInfo::decompose(path, self.config.separator)
    }

    pub fn compose(&self, location: &str, name: &str) -> String {
        path::compose(location, name, self.config.separator)
    }

    pub fn normalize(&self, path: &str) -> String {
        path::normalize(path, self.config.separator)
    }

    // -- kind checks --

    pub(crate) fn is_kind(&self, path: &str, kind: EntryKind) -> bool {
        self.backend.kind(path) == Some(kind)
    }

    /// Whether `name` can name a child: non-empty, not `.`/`..`, no separator.
    pub(crate) fn is_component(&self, name: &str) -> bool {
        !name.is_empty() && name != "." && name != ".." && !name.contains(self.config.separator)
    }
}

impl fmt::Debug for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSystem")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
