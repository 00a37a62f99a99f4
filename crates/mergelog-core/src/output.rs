//! Changelog file output.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{CoreError, CoreResult};

/// Replaces the file at `path` with `contents`.
///
/// The contents go to a temporary file next to the target, which is then
/// renamed over it, so the target is either fully rewritten or left as it
/// was. An existing target keeps its permissions, and a symlinked target is
/// rewritten through the link.
///
/// # Errors
///
/// Returns [`CoreError::Write`] if the file cannot be written.
pub fn write_changelog(path: &Path, contents: &str) -> CoreResult<()> {
    let write_error = |source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_error)?;
    let dir = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    match fs::metadata(&target) {
        Ok(metadata) => file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_error)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(write_error(err)),
    }

    file.persist(&target).map_err(|err| write_error(err.error))?;

    debug!(path = %target.display(), bytes = contents.len(), "wrote changelog");
    Ok(())
}

/// Follows `path` if it is a symlink, so the link itself survives the rename.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            // A dangling link is replaced like a missing file
            Ok(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
        }
        Ok(_) => Ok(path.to_path_buf()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(err) => Err(err),
    }
}
