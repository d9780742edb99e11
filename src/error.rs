use std::path::PathBuf;
use std::{error, fmt, io};

/// The error type for every fallible operation in this crate.
///
/// Two families matter to callers: *request* errors, which indicate a
/// malformed call (a bad access-mode string, an empty path component) and
/// point at a defect in the calling code, and *resource* errors, which carry
/// the underlying OS diagnostic for an environment failure and are always
/// recoverable. [`Error::is_request_error`] distinguishes them.
#[derive(Debug)]
pub enum Error {
    /// An access-mode string contained a character outside `r`, `w`, `x`.
    InvalidModeChar(char),
    /// An access-mode string was empty. Omit the mode to get the default
    /// (read) instead of passing an empty string.
    EmptyMode,
    /// A component handed to [`path_join`](crate::path_join) was empty.
    EmptyPathComponent,
    /// The current working directory could not be determined.
    CurrentDir(io::Error),
    /// An operation on `path` failed with the underlying OS error.
    Io {
        /// The path the failing operation was applied to.
        path: PathBuf,
        /// The OS-level cause.
        source: io::Error,
    },
}

impl Error {
    /// Whether this error indicates caller misuse rather than an environment
    /// failure.
    ///
    /// Embedding hosts conventionally treat request errors as fatal to the
    /// calling unit and everything else as a recoverable failed result; the
    /// CLI maps the two families to distinct exit codes.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidModeChar(_) | Error::EmptyMode | Error::EmptyPathComponent
        )
    }

    /// The OS error behind this failure, if there is one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::CurrentDir(err) | Error::Io { source: err, .. } => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModeChar(ch) => {
                write!(f, "invalid access mode character {ch:?}, expected only 'r', 'w' or 'x'")
            }
            Error::EmptyMode => write!(f, "empty access mode string"),
            Error::EmptyPathComponent => write!(f, "empty path component"),
            Error::CurrentDir(err) => {
                write!(f, "failed to determine the current working directory: {err}")
            }
            Error::Io { path, source } => write!(f, "{source} at path {path:?}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::CurrentDir(err) | Error::Io { source: err, .. } => Some(err),
            _ => None,
        }
    }
}

pub(crate) trait IoResultExt<T> {
    fn with_path<P>(self, path: P) -> Result<T, Error>
    where
        P: Into<PathBuf>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path<P>(self, path: P) -> Result<T, Error>
    where
        P: Into<PathBuf>,
    {
        self.map_err(|source| Error::Io {
            path: path.into(),
            source,
        })
    }
}
