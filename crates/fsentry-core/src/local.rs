//! Local filesystem backend.
//!
//! Thin `std::fs` mapping. Uses `safe_io::atomic_write` for content
//! replacement; every opened OS handle is scoped to the call that opened it.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use log::trace;

use crate::backend::FsBackend;
use crate::safe_io;
use crate::types::{EntryKind, Metadata};

/// Backend over the host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalBackend;

impl LocalBackend {
    pub fn new() -> Self {
        Self
    }
}

impl FsBackend for LocalBackend {
    fn kind(&self, path: &str) -> Option<EntryKind> {
        let meta = fs::metadata(path).ok()?;
        if meta.is_dir() {
            Some(EntryKind::Directory)
        } else if meta.is_file() {
            Some(EntryKind::File)
        } else {
            None
        }
    }

    fn list(&self, path: &str) -> io::Result<Vec<String>> {
        trace!("list {}", path);
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn create_file(&self, path: &str) -> io::Result<()> {
        trace!("create_file {}", path);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        trace!("create_dir {}", path);
        fs::create_dir(path)
    }

    fn remove_file(&self, path: &str) -> io::Result<()> {
        trace!("remove_file {}", path);
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &str) -> io::Result<()> {
        trace!("remove_dir {}", path);
        fs::remove_dir(path)
    }

    fn rename(&self, src: &str, dst: &str) -> io::Result<()> {
        trace!("rename {} -> {}", src, dst);
        fs::rename(src, dst)
    }

    fn metadata(&self, path: &str) -> io::Result<Metadata> {
        let meta = fs::metadata(path)?;
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let created = meta.created().ok().map(DateTime::<Utc>::from);
        let modified = meta.modified().ok().map(DateTime::<Utc>::from);
        Ok(Metadata {
            size: meta.len(),
            created,
            modified,
            kind,
        })
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        trace!("read {}", path);
        fs::read(path)
    }

    fn write(&self, path: &str, data: &[u8]) -> io::Result<()> {
        trace!("write {} ({} bytes)", path, data.len());
        safe_io::atomic_write(Path::new(path), data)
    }

    fn append(&self, path: &str, data: &[u8]) -> io::Result<()> {
        trace!("append {} ({} bytes)", path, data.len());
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(data)?;
        file.flush()
    }
}
