use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::access::AccessMask;

pub fn create_exclusive(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(path)
}

// There is no access(2) here; approximate it from the entry's metadata.
// Read and execute reduce to existence, write additionally requires the
// read-only attribute to be clear.
pub fn check_access(path: &Path, mask: AccessMask) -> io::Result<()> {
    let meta = fs::metadata(path)?;
    if mask.contains(AccessMask::WRITE) && meta.permissions().readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "path is read-only",
        ));
    }
    Ok(())
}

pub fn current_dir() -> io::Result<PathBuf> {
    std::env::current_dir()
}
