//! A small filesystem utility surface.
//!
//! Four operations, each a direct blocking call into the OS:
//!
//! - [`check_access`] probes read/write/execute permission on a path.
//! - [`current_dir`] returns the process's current working directory.
//! - [`create_temp_file`] (and [`create_temp_file_in`]) atomically creates a
//!   uniquely named, empty, owner-only-writable file and returns its path.
//! - [`remove_path`] removes a single file or empty directory.
//!
//! [`path_join`] is the string-level building block the temporary-file engine
//! is built on: a mechanical join that never duplicates the separator.
//!
//! # Design
//!
//! There is no shared state between calls. The working directory is resolved
//! per request, never cached, and the file-creation permission mask is never
//! touched: temporary files are created with explicit permissions instead of
//! narrowing the process umask, so concurrent callers never observe each
//! other.
//!
//! # Security
//!
//! Temporary file names are drawn from an OS-seeded random source and the
//! name is claimed with an exclusive-create open, so selecting a name and
//! creating the file is a single atomic step — another process can neither
//! predict the name nor pre-create it to win a race. Files are born with mode
//! `0o600` on Unix regardless of the inherited umask.
//!
//! [`check_access`] is advisory: the permission observed can change before
//! the caller acts on it. That check/use gap is inherent to the operation and
//! documented rather than hidden.
//!
//! # Examples
//!
//! ```
//! let path = sysutils::create_temp_file()?;
//! assert!(sysutils::check_access(&path, sysutils::AccessMask::WRITE).is_ok());
//! sysutils::remove_path(&path)?;
//! # Ok::<(), sysutils::Error>(())
//! ```

const NUM_RETRIES: u32 = 1 << 31;
const NUM_RAND_CHARS: usize = 6;

mod access;
mod cwd;
mod error;
mod imp;
mod path;
mod remove;
mod temp;
mod util;

pub use crate::access::{check_access, AccessMask};
pub use crate::cwd::current_dir;
pub use crate::error::Error;
pub use crate::path::{path_join, SEPARATOR};
pub use crate::remove::remove_path;
pub use crate::temp::{create_temp_file, create_temp_file_in, TEMP_PREFIX};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
