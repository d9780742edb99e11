use std::cell::RefCell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use fastrand::Rng;

use crate::error::{Error, IoResultExt};

thread_local! {
    static RNG: RefCell<Rng> = RefCell::new(seeded_rng());
}

#[cfg(feature = "getrandom")]
fn seeded_rng() -> Rng {
    let mut seed = [0u8; 8];
    match getrandom::fill(&mut seed) {
        Ok(()) => Rng::with_seed(u64::from_ne_bytes(seed)),
        Err(_) => Rng::new(),
    }
}

#[cfg(not(feature = "getrandom"))]
fn seeded_rng() -> Rng {
    Rng::new()
}

fn reseed() {
    RNG.with(|rng| *rng.borrow_mut() = seeded_rng());
}

/// Generate a candidate file name: `prefix` followed by `rand_len` random
/// alphanumeric characters.
pub(crate) fn tmpname(prefix: &str, rand_len: usize) -> OsString {
    let mut name = OsString::with_capacity(prefix.len() + rand_len);
    name.push(prefix);
    let mut char_buf = [0u8; 4];
    RNG.with(|rng| {
        let mut rng = rng.borrow_mut();
        for _ in 0..rand_len {
            name.push(rng.alphanumeric().encode_utf8(&mut char_buf));
        }
    });
    name
}

// A collision streak this long means something other than bad luck, most
// likely a generator another process has managed to predict. Reseed from the
// OS once and keep going.
const RESEED_AFTER: u32 = 8;

/// Keep proposing fresh names under `dir` until `create` claims one.
///
/// `create` must fail with `AlreadyExists` if and only if it lost the name to
/// somebody else; any other error aborts the loop. The name lottery is
/// bounded so a persistently lying filesystem cannot spin us forever.
pub(crate) fn create_helper<R>(
    dir: &Path,
    prefix: &str,
    rand_len: usize,
    mut create: impl FnMut(PathBuf) -> io::Result<R>,
) -> Result<R, Error> {
    for attempt in 0..crate::NUM_RETRIES {
        if attempt == RESEED_AFTER {
            reseed();
        }
        let path = dir.join(tmpname(prefix, rand_len));
        return match create(path) {
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!(attempt, "temporary name collided, retrying");
                continue;
            }
            other => other.with_path(dir),
        };
    }
    Err(Error::Io {
        path: dir.to_path_buf(),
        source: io::Error::new(
            io::ErrorKind::AlreadyExists,
            "too many temporary files exist",
        ),
    })
}
