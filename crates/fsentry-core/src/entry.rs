//! Entry: identity and move/rename shared by `File` and `Directory`.
//!
//! Every mutation follows the same order: compute the target path (pure),
//! run the rename primitive, and only then commit the new location or name
//! in memory. A failed rename leaves the handle exactly as it was.

use log::debug;

use crate::directory::Directory;
use crate::error::{FsError, FsErrorKind, Result};
use crate::filesystem::FileSystem;
use crate::types::IfExists;

pub(crate) mod sealed {
    use crate::filesystem::FileSystem;

    /// Where a handle points: its filesystem, location, and name.
    #[derive(Debug, Clone)]
    pub struct Place {
        pub(crate) fs: FileSystem,
        pub(crate) location: String,
        pub(crate) name: String,
    }

    pub trait Located {
        fn place(&self) -> &Place;
        fn place_mut(&mut self) -> &mut Place;
    }
}

pub(crate) use sealed::{Located, Place};

impl Place {
    /// Split an already-validated path into location and name.
    pub(crate) fn from_path(fs: &FileSystem, path: &str) -> Self {
        let info = fs.path_info(path);
        Self {
            fs: fs.clone(),
            location: info.location,
            name: info.basename,
        }
    }
}

/// A named, located filesystem object.
pub trait Entry: Located {
    fn fs(&self) -> &FileSystem {
        &self.place().fs
    }

    /// Parent directory path.
    fn location(&self) -> &str {
        &self.place().location
    }

    /// Final path component (for files, extension included).
    fn name(&self) -> &str {
        &self.place().name
    }

    /// `location` and `name` joined with the configured separator.
    fn path(&self) -> String {
        let place = self.place();
        place.fs.compose(&place.location, &place.name)
    }

    /// Rename the entry within its current location.
    ///
    /// `new_name` must be a single component. Fails with `CouldNotMove` if it
    /// is not, or if the rename primitive fails; the handle is unchanged then.
    fn set_name(&mut self, new_name: &str) -> Result<()> {
        if new_name == self.name() {
            return Ok(());
        }
        let old_path = self.path();
        if !self.fs().is_component(new_name) {
            return Err(FsError::new(FsErrorKind::CouldNotMove, old_path));
        }

        let new_path = self.fs().compose(self.location(), new_name);
        self.fs()
            .backend()
            .rename(&old_path, &new_path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotMove, old_path.clone(), e))?;

        debug!("renamed {} -> {}", old_path, new_path);
        self.place_mut().name = new_name.to_string();
        Ok(())
    }

    /// Move the entry into `new_location`, creating that directory if needed.
    ///
    /// Errors from opening/creating the target directory are returned as-is;
    /// a failed rename returns `CouldNotMove`. The handle is unchanged on error.
    fn set_location(&mut self, new_location: &str) -> Result<()> {
        let target = Directory::make(self.fs(), new_location, IfExists::Open)?;
        let target_path = target.path();
        if target_path == self.location() {
            return Ok(());
        }

        let old_path = self.path();
        let new_path = self.fs().compose(&target_path, self.name());
        self.fs()
            .backend()
            .rename(&old_path, &new_path)
            .map_err(|e| FsError::with_source(FsErrorKind::CouldNotMove, old_path.clone(), e))?;

        debug!("moved {} -> {}", old_path, new_path);
        self.place_mut().location = target_path;
        Ok(())
    }

    /// Move and rename in one call: `set_location` then `set_name`.
    ///
    /// The two steps commit independently; if the rename fails after a
    /// successful move, the handle reflects the move. A bare name (no
    /// location) renames in place.
    fn set_path(&mut self, new_path: &str) -> Result<()> {
        let info = self.fs().path_info(new_path);
        if !info.location.is_empty() {
            self.set_location(&info.location)?;
        }
        self.set_name(&info.basename)
    }
}
