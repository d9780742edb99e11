use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::ffi::OsStringExt;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use rustix::fs::Access;

use crate::access::AccessMask;

// Owner read/write only. Passing the mode explicitly means the umask never
// needs to be narrowed, so no process-global state is involved.
const TEMP_FILE_MODE: u32 = 0o600;

// Initial getcwd buffer guess; the syscall wrapper grows it on ERANGE.
const CWD_INITIAL_CAPACITY: usize = 512;

pub fn create_exclusive(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .mode(TEMP_FILE_MODE)
        .open(path)
}

pub fn check_access(path: &Path, mask: AccessMask) -> io::Result<()> {
    rustix::fs::access(path, access_flags(mask)).map_err(io::Error::from)
}

fn access_flags(mask: AccessMask) -> Access {
    let mut probe = Access::EXISTS;
    if mask.contains(AccessMask::READ) {
        probe |= Access::READ_OK;
    }
    if mask.contains(AccessMask::WRITE) {
        probe |= Access::WRITE_OK;
    }
    if mask.contains(AccessMask::EXECUTE) {
        probe |= Access::EXEC_OK;
    }
    probe
}

pub fn current_dir() -> io::Result<PathBuf> {
    let cwd = rustix::process::getcwd(Vec::with_capacity(CWD_INITIAL_CAPACITY))
        .map_err(io::Error::from)?;
    Ok(PathBuf::from(OsString::from_vec(cwd.into_bytes())))
}
