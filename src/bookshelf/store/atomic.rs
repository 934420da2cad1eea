//! Atomic file replacement.
//!
//! New content is written to a temporary file next to the target, synced,
//! closed and then renamed over the target. Readers see either the old file or
//! the new one, never a partial write.
//!
//! The temporary file is owned by [`TempFile`], which removes it on drop
//! unless the rename went through. Every early return therefore cleans up.

use crate::error::{BookshelfError, Result};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use uuid::Uuid;

/// Permission bits for the catalog file: owner read/write, others read.
pub const FILE_MODE: u32 = 0o644;

/// Progress of a single atomic write. A failure at any stage before
/// `Renamed` leaves the target untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStage {
    Created,
    Written,
    Synced,
    Closed,
    Renamed,
}

impl fmt::Display for PersistStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PersistStage::Created => "create temp file",
            PersistStage::Written => "write temp file",
            PersistStage::Synced => "sync temp file",
            PersistStage::Closed => "set permissions and close temp file",
            PersistStage::Renamed => "rename into place",
        };
        f.write_str(name)
    }
}

struct TempFile {
    path: PathBuf,
    file: Option<File>,
    keep: bool,
}

impl TempFile {
    fn create_beside(target: &Path) -> io::Result<Self> {
        let dir = parent_dir(target);
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".to_string());
        let path = dir.join(format!(".{}.{}.tmp", name, Uuid::new_v4()));
        let file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        Ok(Self {
            path,
            file: Some(file),
            keep: false,
        })
    }

    fn file(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other("temporary file already closed"))
    }

    fn close(&mut self) {
        self.file.take();
    }

    fn rename_to(mut self, target: &Path) -> io::Result<()> {
        self.close();
        fs::rename(&self.path, target)?;
        self.keep = true;
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        self.close();
        match fs::remove_file(&self.path) {
            Ok(()) => trace!(path = %self.path.display(), "removed temporary file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "could not remove temporary file"),
        }
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn set_mode(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(FILE_MODE))
}

#[cfg(not(unix))]
fn set_mode(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        warn!(dir = %dir.display(), error = %e, "could not sync directory after rename");
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}

/// Atomically replaces `target` with `contents`.
pub fn write_atomic(target: &Path, contents: &[u8]) -> Result<()> {
    write_staged(target, contents, |_| Ok(()))
}

/// Same as [`write_atomic`], calling `after_stage` once each stage before the
/// rename completes. An error from the hook aborts the write as if the stage
/// itself had failed.
pub fn write_staged<F>(target: &Path, contents: &[u8], mut after_stage: F) -> Result<()>
where
    F: FnMut(PersistStage) -> io::Result<()>,
{
    let fail = |stage: PersistStage| {
        let path = target.to_path_buf();
        move |source: io::Error| BookshelfError::Persist {
            stage,
            path,
            source,
        }
    };

    let mut tmp = TempFile::create_beside(target).map_err(fail(PersistStage::Created))?;
    trace!(tmp = %tmp.path.display(), "created temporary file");
    after_stage(PersistStage::Created).map_err(fail(PersistStage::Created))?;

    tmp.file()
        .and_then(|f| f.write_all(contents))
        .map_err(fail(PersistStage::Written))?;
    after_stage(PersistStage::Written).map_err(fail(PersistStage::Written))?;

    tmp.file()
        .and_then(|f| f.sync_all())
        .map_err(fail(PersistStage::Synced))?;
    after_stage(PersistStage::Synced).map_err(fail(PersistStage::Synced))?;

    tmp.file()
        .and_then(|f| set_mode(f))
        .map_err(fail(PersistStage::Closed))?;
    tmp.close();
    after_stage(PersistStage::Closed).map_err(fail(PersistStage::Closed))?;

    tmp.rename_to(target).map_err(fail(PersistStage::Renamed))?;
    sync_dir(parent_dir(target));
    trace!(target = %target.display(), bytes = contents.len(), "renamed into place");

    Ok(())
}
