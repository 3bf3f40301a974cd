use super::*;

// Native builds have no window; every operation reports the backend missing.

#[test]
fn native_reads_are_unavailable() {
    assert!(matches!(BrowserStorage.get("user"), Err(StorageError::Unavailable)));
}

#[test]
fn native_writes_are_unavailable() {
    assert!(matches!(BrowserStorage.set("user", "{}"), Err(StorageError::Unavailable)));
    assert!(matches!(BrowserStorage.remove("user"), Err(StorageError::Unavailable)));
}
