use crate::error::Error;

/// The separator inserted by [`path_join`], selected at build time.
#[cfg(windows)]
pub const SEPARATOR: char = '\\';
/// The separator inserted by [`path_join`], selected at build time.
#[cfg(not(windows))]
pub const SEPARATOR: char = '/';

/// Join two path components with exactly one [`SEPARATOR`] at the junction.
///
/// The separator is inserted only when `first` does not already end with
/// one. This is a mechanical join, not a canonicalizer: `.` and `..`
/// segments pass through untouched and repeated separators *inside* either
/// component are preserved.
///
/// # Errors
///
/// Both components must be non-empty; an empty component is a request error
/// rather than a silent concatenation.
///
/// # Examples
///
/// ```
/// # #[cfg(not(windows))] {
/// assert_eq!(sysutils::path_join("/tmp", "x")?, "/tmp/x");
/// assert_eq!(sysutils::path_join("/tmp/", "x")?, "/tmp/x");
/// # }
/// # Ok::<(), sysutils::Error>(())
/// ```
pub fn path_join(first: &str, last: &str) -> Result<String, Error> {
    if first.is_empty() || last.is_empty() {
        return Err(Error::EmptyPathComponent);
    }
    let mut joined = String::with_capacity(first.len() + last.len() + 1);
    joined.push_str(first);
    if !joined.ends_with(SEPARATOR) {
        joined.push(SEPARATOR);
    }
    joined.push_str(last);
    Ok(joined)
}
