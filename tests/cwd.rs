//! The working directory is process-global, so every test that touches it
//! lives in this binary and serializes behind one lock.

use std::sync::{Mutex, MutexGuard};
use std::{env, fs, process};

static CWD_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn matches_the_process_working_directory() {
    let _guard = lock();
    assert_eq!(
        sysutils::current_dir().unwrap(),
        env::current_dir().unwrap()
    );
}

#[test]
fn is_absolute() {
    let _guard = lock();
    assert!(sysutils::current_dir().unwrap().is_absolute());
}

#[test]
fn tracks_directory_changes() {
    let _guard = lock();
    let original = env::current_dir().unwrap();

    let dir = env::temp_dir().join(format!("sysutils-chdir-{}", process::id()));
    fs::create_dir_all(&dir).unwrap();
    // temp_dir may itself be a symlink; compare against the resolved path.
    let resolved = fs::canonicalize(&dir).unwrap();

    env::set_current_dir(&resolved).unwrap();
    let reported = sysutils::current_dir();
    env::set_current_dir(&original).unwrap();

    assert_eq!(reported.unwrap(), resolved);
    fs::remove_dir_all(&dir).unwrap();
}
