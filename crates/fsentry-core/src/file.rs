//! File handle.

use chrono::{DateTime, Utc};
use log::debug;

use crate::entry::{Entry, Located, Place};
use crate::error::{FsError, FsErrorKind, Result};
use crate::filesystem::FileSystem;
use crate::types::{EntryKind, IfExists, Metadata};

/// Handle to an existing regular file.
///
/// Only ever constructed over a path that is a regular file at the time of
/// construction. Dropping a handle has no effect on disk.
#[derive(Debug, Clone)]
pub struct File {
    place: Place,
}

impl Located for File {
    fn place(&self) -> &Place {
        &self.place
    }

    fn place_mut(&mut self) -> &mut Place {
        &mut self.place
    }
}

impl Entry for File {}

impl File {
    // -- static helpers --

    /// Whether `path` exists and is a regular file. A directory is `false`.
    pub fn exists(fs: &FileSystem, path: &str) -> bool {
        fs.is_kind(path, EntryKind::File)
    }

    /// Last extension of `path` (`x.tar.gz` -> `gz`).
    pub fn extension_of(fs: &FileSystem, path: &str) -> String {
        fs.path_info(path).extension
    }

    /// Base name of `path` without its last extension.
    pub fn name_of(fs: &FileSystem, path: &str) -> String {
        fs.path_info(path).name
    }

    /// Base name of `path`, extension included.
    pub fn basename_of(fs: &FileSystem, path: &str) -> String {
        fs.path_info(path).basename
    }

    /// Parent directory of `path`.
    pub fn location_of(fs: &FileSystem, path: &str) -> String {
        fs.path_info(path).location
    }

    // -- construction --

    /// Open a handle over an existing file.
    pub fn open(fs: &FileSystem, path: &str) -> Result<Self> {
        if !Self::exists(fs, path) {
            return Err(FsError::does_not_exist(path));
        }
        Ok(Self {
            place: Place::from_path(fs, path),
        })
    }

    /// Create a file, resolving a collision with an existing file by `if_exists`.
    ///
    /// A missing file is created empty under every policy. If something other
    /// than a regular file sits at `path`, creation fails with `CouldNotCreate`.
    pub fn make(fs: &FileSystem, path: &str, if_exists: IfExists) -> Result<Self> {
        if Self::exists(fs, path) {
            match if_exists {
                IfExists::ThrowOnExists => return Err(FsError::already_exists(path)),
                IfExists::Open => return Self::open(fs, path),
                IfExists::Overwrite => {
                    debug!("overwriting file {}", path);
                    fs.backend().remove_file(path).map_err(|e| {
                        FsError::with_source(FsErrorKind::CouldNotCreate, path, e)
                    })?;
                }
            }
        }

        fs.backend()
            .create_file(path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotCreate, path, e))?;
        debug!("created file {}", path);
        Self::open(fs, path)
    }

    // -- accessors --

    /// Base name without its last extension.
    pub fn stem(&self) -> &str {
        match self.place.name.rfind('.') {
            Some(pos) => &self.place.name[..pos],
            None => &self.place.name,
        }
    }

    /// Last extension, `""` if there is none.
    pub fn extension(&self) -> &str {
        match self.place.name.rfind('.') {
            Some(pos) => &self.place.name[pos + 1..],
            None => "",
        }
    }

    pub fn metadata(&self) -> Result<Metadata> {
        let path = self.path();
        self.fs()
            .backend()
            .metadata(&path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotRead, path, e))
    }

    /// Size in bytes.
    pub fn size(&self) -> Result<u64> {
        Ok(self.metadata()?.size)
    }

    pub fn modified(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.metadata()?.modified)
    }

    // -- content I/O --

    pub fn read(&self) -> Result<Vec<u8>> {
        let path = self.path();
        self.fs()
            .backend()
            .read(&path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotRead, path, e))
    }

    /// Whole contents as UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = self.read()?;
        String::from_utf8(bytes).map_err(|e| {
            FsError::with_source(
                FsErrorKind::CouldNotRead,
                self.path(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    /// All lines, without their terminators.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.read_to_string()?.lines().map(str::to_string).collect())
    }

    /// Line `index` (zero-based), or `None` past the end.
    pub fn read_line(&self, index: usize) -> Result<Option<String>> {
        Ok(self.read_to_string()?.lines().nth(index).map(str::to_string))
    }

    /// Replace the contents.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        let path = self.path();
        self.fs()
            .backend()
            .write(&path, data.as_ref())
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotWrite, path, e))
    }

    pub fn append(&self, data: impl AsRef<[u8]>) -> Result<()> {
        let path = self.path();
        self.fs()
            .backend()
            .append(&path, data.as_ref())
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotWrite, path, e))
    }

    /// Remove the file from disk, consuming the handle.
    pub fn delete(self) -> Result<()> {
        let path = self.path();
        self.fs()
            .backend()
            .remove_file(&path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotRemove, path.clone(), e))?;
        debug!("deleted file {}", path);
        Ok(())
    }
}
