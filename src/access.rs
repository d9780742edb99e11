use std::path::Path;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{Error, IoResultExt};
use crate::imp;

bitflags! {
    /// The set of capabilities probed by [`check_access`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessMask: u8 {
        /// The path can be read.
        const READ = 1;
        /// The path can be written.
        const WRITE = 1 << 1;
        /// The path can be executed (or, for a directory, searched).
        const EXECUTE = 1 << 2;
    }
}

impl Default for AccessMask {
    /// Read-only, the mask used when a caller leaves the mode unspecified.
    fn default() -> AccessMask {
        AccessMask::READ
    }
}

impl FromStr for AccessMask {
    type Err = Error;

    /// Parse a mode string over the alphabet `r`, `w`, `x`.
    ///
    /// Repeated characters are allowed and idempotent. Any other character is
    /// a request error, never silently ignored. The empty string is rejected:
    /// an *absent* mode selects the default, an empty one is a caller bug.
    fn from_str(s: &str) -> Result<AccessMask, Error> {
        if s.is_empty() {
            return Err(Error::EmptyMode);
        }
        let mut mask = AccessMask::empty();
        for ch in s.chars() {
            mask |= match ch {
                'r' => AccessMask::READ,
                'w' => AccessMask::WRITE,
                'x' => AccessMask::EXECUTE,
                other => return Err(Error::InvalidModeChar(other)),
            };
        }
        Ok(mask)
    }
}

/// Check whether the calling process currently has every capability in
/// `mask` on `path`.
///
/// Returns `Ok(())` when access is granted. Denial, a missing path, or any
/// other OS failure is returned as a structured error carrying the OS
/// diagnostic, so callers can tell "permission denied" from "no such path".
/// The check never creates, deletes, or mutates anything.
///
/// # Caveats
///
/// This is an advisory, best-effort observation. Nothing prevents the
/// permission from changing between this check and a subsequent open — the
/// classic check/use gap. Callers needing a guarantee should just attempt
/// the operation and handle its error.
///
/// # Examples
///
/// ```
/// use sysutils::AccessMask;
///
/// sysutils::check_access("Cargo.toml", AccessMask::READ)?;
///
/// let mask: AccessMask = "rw".parse()?;
/// assert_eq!(mask, AccessMask::READ | AccessMask::WRITE);
/// # Ok::<(), sysutils::Error>(())
/// ```
pub fn check_access<P: AsRef<Path>>(path: P, mask: AccessMask) -> Result<(), Error> {
    let path = path.as_ref();
    imp::check_access(path, mask).with_path(path)
}
