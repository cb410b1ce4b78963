//! # Site Scanner
//!
//! Enumeration of site directories. A "site" is an immediate child directory
//! of the scan base path; in the inspection workflow each one corresponds to a
//! physical location whose thermal captures are stored beneath it.
//!
//! The scan is a single blocking `read_dir` pass. Base-path failures map onto
//! an explicit taxonomy (`PathNotFound`, `NotADirectory`, `PermissionDenied`)
//! so callers can decide whether to abort or continue.

use std::fs;
use std::io;
use std::path::Path;

use crate::utils::error::{Error, Result};

/// Lists the immediate child directories of `base_path`.
///
/// Returns the entry names (not full paths) of every child that is a
/// directory at check time. Symbolic links are followed: a link that resolves
/// to a directory is listed, a link to a file or a dangling link is not.
///
/// Ordering is whatever the underlying filesystem enumeration yields; no
/// stable order is guaranteed. Non-UTF-8 names are rendered lossily rather
/// than dropped.
pub fn list_site_directories<P: AsRef<Path>>(base_path: P) -> Result<Vec<String>> {
    let base_path = base_path.as_ref();

    let entries = fs::read_dir(base_path).map_err(|e| classify_scan_error(base_path, e))?;

    let mut sites = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| classify_scan_error(base_path, e))?;

        if is_directory(&entry) {
            sites.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(sites)
}

/// Directory test for a single entry, following symlinks.
fn is_directory(entry: &fs::DirEntry) -> bool {
    match entry.file_type() {
        Ok(file_type) if file_type.is_symlink() => {
            // `metadata` resolves the link; a dangling link is not a directory
            fs::metadata(entry.path())
                .map(|m| m.is_dir())
                .unwrap_or(false)
        }
        Ok(file_type) => file_type.is_dir(),
        Err(_) => false,
    }
}

/// Maps an enumeration failure onto the scanner error taxonomy.
fn classify_scan_error(base_path: &Path, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::PathNotFound(base_path.to_path_buf()),
        io::ErrorKind::PermissionDenied => Error::PermissionDenied(base_path.to_path_buf()),
        io::ErrorKind::NotADirectory => Error::NotADirectory(base_path.to_path_buf()),
        // Windows reports a file base path with a platform-specific kind
        _ if base_path.is_file() => Error::NotADirectory(base_path.to_path_buf()),
        _ => Error::with_source(
            &format!("cannot scan {}", base_path.display()),
            Box::new(err),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn as_set(names: Vec<String>) -> BTreeSet<String> {
        names.into_iter().collect()
    }

    #[test]
    fn test_lists_directories_not_files() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path();

        fs::create_dir(base_path.join("A"))?;
        fs::create_dir(base_path.join("B"))?;
        File::create(base_path.join("C.txt"))?;

        let sites = as_set(list_site_directories(base_path)?);

        assert_eq!(
            sites,
            BTreeSet::from(["A".to_string(), "B".to_string()])
        );
        assert!(!sites.contains("C.txt"));

        Ok(())
    }

    #[test]
    fn test_empty_base_path_yields_empty_list() -> Result<()> {
        let temp_dir = TempDir::new()?;

        let sites = list_site_directories(temp_dir.path())?;
        assert!(sites.is_empty());

        Ok(())
    }

    #[test]
    fn test_nested_directories_are_not_recursed() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path();

        fs::create_dir_all(base_path.join("Site1").join("nested"))?;

        let sites = list_site_directories(base_path)?;
        assert_eq!(sites, vec!["Site1".to_string()]);

        Ok(())
    }

    #[test]
    fn test_missing_base_path_is_path_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = list_site_directories(&missing).unwrap_err();
        assert!(matches!(err, Error::PathNotFound(path) if path == missing));
    }

    #[test]
    fn test_file_base_path_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.csv");
        File::create(&file_path).unwrap();

        let err = list_site_directories(&file_path).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(path) if path == file_path));
    }

    #[test]
    fn test_scan_is_idempotent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path();

        fs::create_dir(base_path.join("North"))?;
        fs::create_dir(base_path.join("South"))?;
        File::create(base_path.join("index.json"))?;

        let first = as_set(list_site_directories(base_path)?);
        let second = as_set(list_site_directories(base_path)?);
        assert_eq!(first, second);

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_follow_their_target() -> Result<()> {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path();

        fs::create_dir(base_path.join("real"))?;
        File::create(base_path.join("data.bmt"))?;
        symlink(base_path.join("real"), base_path.join("dir-link"))?;
        symlink(base_path.join("data.bmt"), base_path.join("file-link"))?;
        symlink(base_path.join("gone"), base_path.join("dangling"))?;

        let sites = as_set(list_site_directories(base_path)?);

        assert_eq!(
            sites,
            BTreeSet::from(["real".to_string(), "dir-link".to_string()])
        );

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_base_path_is_permission_denied() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new()?;
        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked)?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        let result = list_site_directories(&locked);

        // restore so TempDir can clean up
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

        match result {
            // root is not subject to permission bits, nothing to assert
            Ok(_) => {}
            Err(err) => {
                assert!(matches!(err, Error::PermissionDenied(path) if path == locked));
            }
        }

        Ok(())
    }
}
