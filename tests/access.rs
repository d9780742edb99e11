use std::io;

use sysutils::{check_access, AccessMask};

#[test]
fn default_mask_is_read_only() {
    assert_eq!(AccessMask::default(), AccessMask::READ);
}

#[test]
fn parses_mode_combinations() {
    assert_eq!("r".parse::<AccessMask>().unwrap(), AccessMask::READ);
    assert_eq!(
        "wx".parse::<AccessMask>().unwrap(),
        AccessMask::WRITE | AccessMask::EXECUTE
    );
    assert_eq!("rwx".parse::<AccessMask>().unwrap(), AccessMask::all());
    // Repeats are idempotent.
    assert_eq!("rr".parse::<AccessMask>().unwrap(), AccessMask::READ);
}

#[test]
fn rejects_unknown_mode_characters() {
    let err = "rz".parse::<AccessMask>().unwrap_err();
    assert!(err.is_request_error());
}

#[test]
fn rejects_the_empty_mode_string() {
    let err = "".parse::<AccessMask>().unwrap_err();
    assert!(err.is_request_error());
}

#[test]
fn readable_path_passes() {
    // Integration tests run with the crate root as working directory.
    check_access("Cargo.toml", AccessMask::READ).unwrap();
}

#[test]
fn missing_path_reports_not_found() {
    let err = check_access("definitely/not/here", AccessMask::READ).unwrap_err();
    assert!(!err.is_request_error());
    assert_eq!(err.io_error().unwrap().kind(), io::ErrorKind::NotFound);
}

#[cfg(unix)]
#[test]
fn write_probe_on_read_only_file_reports_denial() {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};
    use std::{env, fs, process};

    let dir = env::temp_dir().join(format!("sysutils-denied-{}", process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = sysutils::create_temp_file_in(&dir).unwrap();

    // access(2) grants everything to root; nothing to observe there.
    if fs::metadata(&path).unwrap().uid() == 0 {
        fs::remove_dir_all(&dir).unwrap();
        return;
    }

    fs::set_permissions(&path, fs::Permissions::from_mode(0o400)).unwrap();
    let err = check_access(&path, AccessMask::WRITE).unwrap_err();
    assert_eq!(
        err.io_error().unwrap().kind(),
        io::ErrorKind::PermissionDenied
    );
    // The probe itself left the file alone.
    assert!(path.exists());
    fs::remove_dir_all(&dir).unwrap();
}
