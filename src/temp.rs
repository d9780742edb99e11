use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::{cwd, imp, util};

/// Prefix of every generated temporary file name.
pub const TEMP_PREFIX: &str = "tmp_";

/// Create a uniquely named, empty temporary file in the current working
/// directory and return its path.
///
/// The working directory is resolved at call time, never cached, so a host
/// that changes directory between calls gets files where it expects them.
/// See [`create_temp_file_in`] for the semantics of the created file.
///
/// # Examples
///
/// ```
/// let path = sysutils::create_temp_file()?;
/// assert!(path.is_absolute());
/// # sysutils::remove_path(&path)?;
/// # Ok::<(), sysutils::Error>(())
/// ```
pub fn create_temp_file() -> Result<PathBuf, Error> {
    create_temp_file_in(cwd::current_dir()?)
}

/// Create a uniquely named, empty temporary file in `dir` and return its
/// path.
///
/// The name is [`TEMP_PREFIX`] followed by random characters drawn from an
/// OS-seeded source. Selecting the name and creating the file is one atomic
/// step: the file is opened with exclusive creation, so losing a race to
/// another process simply retries with a fresh name. On Unix the file is
/// created with mode `0o600` — group and world bits never touch the disk,
/// regardless of the process umask, and no process-global state is mutated
/// to achieve that.
///
/// The file handle is closed before returning; the caller owns the path and
/// the file behind it from that moment, including its deletion. Two calls
/// never return the same path, by construction. Close failures cannot be
/// observed through the standard library's file handle; the created entry is
/// valid either way.
///
/// # Errors
///
/// Fails with a structured resource error if `dir` does not exist or is not
/// writable — missing directories are never created — or if the name space
/// is exhausted. No file exists on any error path.
///
/// # Examples
///
/// ```
/// let dir = sysutils::current_dir()?;
/// let path = sysutils::create_temp_file_in(&dir)?;
/// assert_eq!(path.parent(), Some(dir.as_path()));
/// # sysutils::remove_path(&path)?;
/// # Ok::<(), sysutils::Error>(())
/// ```
pub fn create_temp_file_in<P: AsRef<Path>>(dir: P) -> Result<PathBuf, Error> {
    let dir = dir.as_ref();
    util::create_helper(dir, TEMP_PREFIX, crate::NUM_RAND_CHARS, |path| {
        let file = imp::create_exclusive(&path)?;
        // The contract hands out a path, not an open handle.
        drop(file);
        tracing::debug!(path = %path.display(), "created temporary file");
        Ok(path)
    })
}
