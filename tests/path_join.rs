use sysutils::{path_join, SEPARATOR};

#[test]
fn inserts_exactly_one_separator() {
    let sep = SEPARATOR;
    assert_eq!(path_join("a", "b").unwrap(), format!("a{sep}b"));
}

#[test]
fn no_duplicate_when_first_ends_with_separator() {
    let sep = SEPARATOR;
    let first = format!("a{sep}");
    assert_eq!(path_join(&first, "b").unwrap(), format!("a{sep}b"));
}

#[cfg(unix)]
#[test]
fn unix_examples() {
    assert_eq!(path_join("/tmp", "x").unwrap(), "/tmp/x");
    assert_eq!(path_join("/tmp/", "x").unwrap(), "/tmp/x");
}

#[test]
fn empty_components_are_request_errors() {
    let err = path_join("", "b").unwrap_err();
    assert!(err.is_request_error());
    let err = path_join("a", "").unwrap_err();
    assert!(err.is_request_error());
}

#[test]
fn does_not_normalize() {
    let sep = SEPARATOR;
    // Dot segments and internal separator runs pass through untouched.
    let first = format!("a{sep}..{sep}{sep}b");
    assert_eq!(
        path_join(&first, ".").unwrap(),
        format!("a{sep}..{sep}{sep}b{sep}.")
    );
}
