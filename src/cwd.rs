use std::path::PathBuf;

use crate::error::Error;
use crate::imp;

/// Return the absolute path of the process's current working directory.
///
/// Retrieval starts from a small guessed buffer and lets the underlying
/// primitive grow it until the path fits, so arbitrarily deep directories
/// work without a caller-visible size limit. Growth is bounded only by
/// available memory; callers needing a hard cap must enforce it themselves.
///
/// # Errors
///
/// Any OS failure other than "buffer too small" is surfaced as
/// [`Error::CurrentDir`], for example when the directory the process sits in
/// has been removed.
///
/// # Examples
///
/// ```
/// let cwd = sysutils::current_dir()?;
/// assert!(cwd.is_absolute());
/// # Ok::<(), sysutils::Error>(())
/// ```
pub fn current_dir() -> Result<PathBuf, Error> {
    imp::current_dir().map_err(Error::CurrentDir)
}
