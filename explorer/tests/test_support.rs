//! Shared capability-based filesystem helpers for explorer tests.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Create a unique scratch directory under `target/bloom-explorer-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the directory.
pub fn unique_temp_dir(prefix: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir = Utf8PathBuf::from("target")
        .join("bloom-explorer-tests")
        .join(format!("{prefix}-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    Ok(dir)
}

/// Read a file through a capability handle on the working directory.
///
/// # Errors
///
/// Returns any filesystem errors encountered while reading.
pub fn read_file(path: &camino::Utf8Path) -> io::Result<String> {
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.read_to_string(path)
}
