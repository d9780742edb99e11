use std::fs;
use std::path::Path;

use crate::error::{Error, IoResultExt};

/// Remove exactly one filesystem entry: a file, or a directory only if it is
/// empty.
///
/// Symlinks are removed, never followed — the link goes away, its target
/// stays. There is no recursion and no force: a non-empty directory is a
/// structured error and the directory is left untouched.
///
/// # Errors
///
/// A missing path, a non-empty directory, or a permission failure is
/// returned with the underlying OS diagnostic and the offending path.
///
/// # Examples
///
/// ```
/// let path = sysutils::create_temp_file()?;
/// sysutils::remove_path(&path)?;
/// assert!(sysutils::remove_path(&path).is_err());
/// # Ok::<(), sysutils::Error>(())
/// ```
pub fn remove_path<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path).with_path(path)?;
    let removed = if meta.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    removed.with_path(path)?;
    tracing::debug!(path = %path.display(), "removed filesystem entry");
    Ok(())
}
