//! Safe file I/O utilities: atomic content replacement.
//!
//! [`atomic_write()`] writes to a sibling temporary file, syncs it, and
//! renames it over the target, so the target is either fully updated or
//! unchanged - never partially written.

use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

/// Atomically replace the contents of a file.
///
/// The parent directory must already exist. If the target exists its
/// permissions are carried over to the new contents.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, synced,
/// or renamed. Only the temporary file this call created is removed on
/// failure; nothing else next to the target is touched.
///
/// # Platform Notes
///
/// On Unix, rename is atomic within the same filesystem.
/// On Windows, rename may not be atomic but still provides crash safety.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot write to {}: no file name", path.display()),
        )
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    // `.name.XXXXXX.tmp` next to the target, so the rename never crosses devices.
    let mut prefix = OsString::from(".");
    prefix.push(file_name);
    prefix.push(".");
    let mut builder = Builder::new();
    builder.prefix(&prefix).suffix(".tmp");
    if existing.is_none() {
        default_permissions(&mut builder);
    }

    // Dropping `tmp` on any early return deletes it.
    let mut tmp = builder.tempfile_in(dir)?;
    write_synced(&mut tmp, contents)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_synced(tmp: &mut NamedTempFile, contents: &[u8]) -> io::Result<()> {
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        writer.write_all(contents)?;
        writer.flush()?;
    }
    // Sync to disk before rename
    tmp.as_file().sync_all()
}

/// A new target gets the usual umask-filtered mode, not the 0600 of a temp file.
#[cfg(unix)]
fn default_permissions(builder: &mut Builder<'_, '_>) {
    use std::os::unix::fs::PermissionsExt;
    builder.permissions(fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn default_permissions(_builder: &mut Builder<'_, '_>) {}
