//! Directory handle with a lazily loaded, never refreshed child cache.
//!
//! The first query that needs to know the children (`file_exists`,
//! `directory_exists`, `get_*`) lists the directory once. After that the
//! handle answers from its cache for the rest of its life: changes made on
//! disk afterwards, including children this same handle creates, are not
//! observed. Open a new handle to see the current state.
//!
//! Caches are per handle. Two handles over the same path load independently.

use indexmap::IndexSet;
use log::{debug, warn};

use crate::entry::{Entry, Located, Place};
use crate::error::{FsError, FsErrorKind, Result};
use crate::file::File;
use crate::filesystem::FileSystem;
use crate::types::{EntryKind, IfExists, IfNotExists};

/// Child names partitioned by kind, in enumeration order.
#[derive(Debug, Clone, Default)]
struct Children {
    files: IndexSet<String>,
    directories: IndexSet<String>,
}

/// Moves `Unloaded` -> `Loaded` once, never back.
#[derive(Debug, Clone, Default)]
enum ChildCache {
    #[default]
    Unloaded,
    Loaded(Children),
}

/// Handle to an existing directory.
#[derive(Debug, Clone)]
pub struct Directory {
    place: Place,
    cache: ChildCache,
}

impl Located for Directory {
    fn place(&self) -> &Place {
        &self.place
    }

    fn place_mut(&mut self) -> &mut Place {
        &mut self.place
    }
}

impl Entry for Directory {}

impl Directory {
    // -- static helpers --

    /// Whether `path` exists and is a directory.
    pub fn exists(fs: &FileSystem, path: &str) -> bool {
        fs.is_kind(path, EntryKind::Directory)
    }

    /// Final component of `path`.
    pub fn name_of(fs: &FileSystem, path: &str) -> String {
        fs.path_info(path).basename
    }

    /// Parent directory of `path`.
    pub fn location_of(fs: &FileSystem, path: &str) -> String {
        fs.path_info(path).location
    }

    // -- construction --

    /// Open a handle over an existing directory. Nothing is listed yet.
    pub fn open(fs: &FileSystem, path: &str) -> Result<Self> {
        if !Self::exists(fs, path) {
            return Err(FsError::does_not_exist(path));
        }
        Ok(Self {
            place: Place::from_path(fs, path),
            cache: ChildCache::Unloaded,
        })
    }

    /// Create a directory, resolving a collision by `if_exists`.
    ///
    /// `Overwrite` removes the existing directory non-recursively, so it fails
    /// with `CouldNotCreate` if the directory has children. `Open` on a missing
    /// path creates it. The parent must already exist.
    pub fn make(fs: &FileSystem, path: &str, if_exists: IfExists) -> Result<Self> {
        if Self::exists(fs, path) {
            match if_exists {
                IfExists::ThrowOnExists => return Err(FsError::already_exists(path)),
                IfExists::Open => return Self::open(fs, path),
                IfExists::Overwrite => {
                    debug!("overwriting directory {}", path);
                    fs.backend().remove_dir(path).map_err(|e| {
                        FsError::with_source(FsErrorKind::CouldNotCreate, path, e)
                    })?;
                }
            }
        }

        fs.backend()
            .create_dir(path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotCreate, path, e))?;
        debug!("created directory {}", path);
        Self::open(fs, path)
    }

    // -- child cache --

    pub fn is_loaded(&self) -> bool {
        matches!(self.cache, ChildCache::Loaded(_))
    }

    /// List the directory into the cache. A no-op once loaded.
    ///
    /// Each listed child is classified by querying its kind; children that are
    /// neither a regular file nor a directory (or vanished meanwhile) are
    /// skipped. On a listing failure the cache stays unloaded.
    pub fn load(&mut self) -> Result<()> {
        self.children().map(|_| ())
    }

    fn children(&mut self) -> Result<&Children> {
        if let ChildCache::Unloaded = self.cache {
            self.cache = ChildCache::Loaded(self.scan()?);
        }
        match &self.cache {
            ChildCache::Loaded(children) => Ok(children),
            ChildCache::Unloaded => Err(FsError::new(FsErrorKind::CouldNotRead, self.path())),
        }
    }

    fn scan(&self) -> Result<Children> {
        let path = self.path();
        let names = self
            .fs()
            .backend()
            .list(&path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotRead, path.clone(), e))?;

        let mut children = Children::default();
        for name in names {
            if name == "." || name == ".." {
                continue;
            }
            let child = self.fs().compose(&path, &name);
            match self.fs().backend().kind(&child) {
                Some(EntryKind::File) => {
                    children.files.insert(name);
                }
                Some(EntryKind::Directory) => {
                    children.directories.insert(name);
                }
                None => warn!("skipping {}: not a file or directory", child),
            }
        }

        debug!(
            "loaded {}: {} file(s), {} directory(ies)",
            path,
            children.files.len(),
            children.directories.len()
        );
        Ok(children)
    }

    /// Cached names of child files, in enumeration order.
    pub fn file_names(&mut self) -> Result<Vec<String>> {
        Ok(self.children()?.files.iter().cloned().collect())
    }

    /// Cached names of child directories, in enumeration order.
    pub fn directory_names(&mut self) -> Result<Vec<String>> {
        Ok(self.children()?.directories.iter().cloned().collect())
    }

    pub fn file_exists(&mut self, name: &str) -> Result<bool> {
        Ok(self.children()?.files.contains(name))
    }

    pub fn directory_exists(&mut self, name: &str) -> Result<bool> {
        Ok(self.children()?.directories.contains(name))
    }

    // -- child handles --

    /// Handle to the child file `name`.
    ///
    /// A cached file is opened. Otherwise `Create` creates it (opening it if
    /// it appeared on disk after the cache was loaded) and `ThrowOnMissing`
    /// fails with `DoesNotExist`. The cache is not updated either way.
    ///
    /// `name` must be a single component; anything else is rejected without
    /// touching the disk, as missing (`DoesNotExist`) or uncreatable
    /// (`CouldNotCreate`) depending on the policy.
    pub fn get_file(&mut self, name: &str, if_not_exists: IfNotExists) -> Result<File> {
        let child = self.checked_child_path(name, if_not_exists)?;
        if self.file_exists(name)? {
            return File::open(self.fs(), &child);
        }
        match if_not_exists {
            IfNotExists::Create => File::make(self.fs(), &child, IfExists::Open),
            IfNotExists::ThrowOnMissing => Err(FsError::does_not_exist(child)),
        }
    }

    /// Handle to the child directory `name`. Same policy as `get_file`.
    pub fn get_directory(&mut self, name: &str, if_not_exists: IfNotExists) -> Result<Directory> {
        let child = self.checked_child_path(name, if_not_exists)?;
        if self.directory_exists(name)? {
            return Directory::open(self.fs(), &child);
        }
        match if_not_exists {
            IfNotExists::Create => Directory::make(self.fs(), &child, IfExists::Open),
            IfNotExists::ThrowOnMissing => Err(FsError::does_not_exist(child)),
        }
    }

    /// Fresh handles for every cached child file, in enumeration order.
    ///
    /// A child removed from disk since the load fails with `DoesNotExist`.
    pub fn get_files(&mut self) -> Result<Vec<File>> {
        let path = self.path();
        let fs = self.fs().clone();
        self.children()?
            .files
            .iter()
            .map(|name| File::open(&fs, &fs.compose(&path, name)))
            .collect()
    }

    /// Fresh handles for every cached child directory, in enumeration order.
    pub fn get_directories(&mut self) -> Result<Vec<Directory>> {
        let path = self.path();
        let fs = self.fs().clone();
        self.children()?
            .directories
            .iter()
            .map(|name| Directory::open(&fs, &fs.compose(&path, name)))
            .collect()
    }

    fn checked_child_path(&self, name: &str, if_not_exists: IfNotExists) -> Result<String> {
        let child = self.fs().compose(&self.path(), name);
        if self.fs().is_component(name) {
            return Ok(child);
        }
        let kind = match if_not_exists {
            IfNotExists::ThrowOnMissing => FsErrorKind::DoesNotExist,
            IfNotExists::Create => FsErrorKind::CouldNotCreate,
        };
        Err(FsError::new(kind, child))
    }

    /// Remove the directory (must be empty), consuming the handle.
    pub fn delete(self) -> Result<()> {
        let path = self.path();
        self.fs()
            .backend()
            .remove_dir(&path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotRemove, path.clone(), e))?;
        debug!("deleted directory {}", path);
        Ok(())
    }
}
