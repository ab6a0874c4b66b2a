//! Atomic fixture file writes.
//!
//! Contents are written to a hidden temporary file beside the target and
//! renamed into place, so an interrupted run never leaves a half-written
//! fixture behind. Any existing file at the target is replaced.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::WriteError;

static STAGING_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `path` inside `dir` via a temp file and rename.
///
/// `path` must be a single plain file name.
///
/// # Errors
///
/// Returns [`WriteError::InvalidFileName`] for nested or special paths and
/// [`WriteError::Io`] if the file cannot be written.
pub(crate) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), WriteError> {
    let file_name = plain_file_name(path)?;
    let staging = staging_name(file_name);

    stage(dir, &staging, contents).map_err(|err| {
        drop(dir.remove_file(&staging));
        io_error(&path.with_file_name(&staging), &err)
    })?;
    commit(dir, &staging, file_name).map_err(|err| {
        drop(dir.remove_file(&staging));
        io_error(path, &err)
    })?;
    // Not every platform can sync a directory handle.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));

    Ok(())
}

fn plain_file_name(path: &Utf8Path) -> Result<&str, WriteError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Ok(name),
        _ => Err(WriteError::InvalidFileName {
            path: path.as_std_path().to_path_buf(),
        }),
    }
}

/// Hidden sibling name unique to this process and write.
fn staging_name(file_name: &str) -> String {
    let sequence = STAGING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.subsec_nanos());
    format!(".{file_name}.{}-{nanos}-{sequence}.staging", std::process::id())
}

fn io_error(path: &Utf8Path, err: &io::Error) -> WriteError {
    WriteError::Io {
        path: path.as_std_path().to_path_buf(),
        message: err.to_string(),
    }
}

fn stage(dir: &Dir, staging_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(staging_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn commit(dir: &Dir, staging_name: &str, file_name: &str) -> io::Result<()> {
    // Rename does not replace an existing file on Windows.
    if let Err(err) = dir.remove_file(file_name)
        && err.kind() != io::ErrorKind::NotFound
    {
        return Err(err);
    }
    dir.rename(staging_name, dir, file_name)
}

#[cfg(not(windows))]
fn commit(dir: &Dir, staging_name: &str, file_name: &str) -> io::Result<()> {
    dir.rename(staging_name, dir, file_name)
}
