//! Atomic report export.
//!
//! Reports are written to a hidden temporary file beside the target and then
//! renamed over it, so readers never observe a partially written export.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::error::ExportError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `path`, creating or replacing it atomically.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`ExportError`] when the path has no file name, the parent
/// directory cannot be opened, or the write or rename fails.
pub fn export_report(path: &Utf8Path, contents: &str) -> Result<(), ExportError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        ExportError::OpenDirectory {
            path: parent.to_path_buf(),
            message: err.to_string(),
        }
    })?;
    let Some(file_name) = path.file_name() else {
        return Err(ExportError::NotAFile {
            path: path.to_path_buf(),
        });
    };
    write_atomic(&dir, Utf8Path::new(file_name), contents)?;
    debug!(path = %path, bytes = contents.len(), "report exported");
    Ok(())
}

/// Writes `contents` to the single-component `path` inside `dir`.
pub(crate) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), ExportError> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(ExportError::NotAFile {
            path: path.to_path_buf(),
        });
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{file_name}.tmp.{}.{nanos}.{counter}",
        std::process::id()
    );

    write_temp_file(dir, &tmp_name, contents).map_err(|err| ExportError::Write {
        path: path.with_file_name(&tmp_name),
        message: err.to_string(),
    })?;
    if let Err(err) = replace_target(dir, &tmp_name, file_name) {
        if dir.remove_file(&tmp_name).is_err() {
            debug!(tmp_name = %tmp_name, "temporary export left behind");
        }
        return Err(ExportError::Write {
            path: path.to_path_buf(),
            message: err.to_string(),
        });
    }
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        debug!("export directory sync skipped");
    }
    Ok(())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if written.is_err() {
        drop(file);
        drop(dir.remove_file(tmp_name));
    }
    written
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}
