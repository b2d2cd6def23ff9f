//! Tests for error handling under adverse filesystem conditions

#[cfg(unix)]
mod unix_tests {
    use cpenv_fs::{Error, copy_file, walk};
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn copy_into_readonly_directory_preserves_existing_destination() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let source = dir.path().join("new.env");
        fs::write(&source, "NEW=1").unwrap();

        let parent = dir.path().join("locked");
        fs::create_dir(&parent).unwrap();
        let destination = parent.join(".env");
        fs::write(&destination, "OLD=1").unwrap();
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        let result = copy_file(&source, &destination);

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));

        assert!(matches!(result, Err(Error::Copy { .. })), "got {result:?}");
        assert_eq!(fs::read_to_string(&destination).unwrap(), "OLD=1");
    }

    #[test]
    fn unreadable_source_is_a_copy_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let source = dir.path().join("secret.env");
        fs::write(&source, "S=1").unwrap();
        fs::set_permissions(&source, Permissions::from_mode(0o000)).unwrap();
        let destination = dir.path().join("out.env");

        let result = copy_file(&source, &destination);

        let _ = fs::set_permissions(&source, Permissions::from_mode(0o644));

        assert!(matches!(result, Err(Error::Copy { .. })));
        assert!(!destination.exists());
    }

    #[test]
    fn unreadable_subdirectory_aborts_walk() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("a.env"), "A=1").unwrap();
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        let result = walk(dir.path());

        let _ = fs::set_permissions(&locked, Permissions::from_mode(0o755));

        match result {
            Err(Error::Traversal { path, .. }) => assert_eq!(path, locked),
            other => panic!("expected traversal error, got {other:?}"),
        }
    }
}
