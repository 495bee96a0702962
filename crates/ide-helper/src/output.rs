//! Banner text and file output shared by every export stage.

use crate::{ExportError, Result};
use std::fs;
use std::io::Write as _;
use std::path::Path;

/// Command name used in the banner when none is configured.
pub const DEFAULT_COMMAND: &str = "graphql ide-helper";

/// Header placed at the top of every generated file.
///
/// ```
/// let banner = graphql_ide_helper::banner("graphql ide-helper");
/// assert!(banner.starts_with("# File generated by \"graphql ide-helper\".\n"));
/// assert!(banner.ends_with("autogenerated.\n"));
/// ```
#[must_use]
pub fn banner(command: &str) -> String {
    format!(
        "# File generated by \"{command}\".\n\
         # Do not edit this file directly.\n\
         # This file should be ignored by git as it can be autogenerated.\n"
    )
}

/// Write `contents` to `path` through a temp file in the same directory.
///
/// Readers see either the previous file or the complete new one.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let write_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = temp_file_in(dir).map_err(write_error)?;
    file.write_all(contents).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote generated file");
    Ok(())
}

/// Temp file with the mode a plain `fs::write` creates (`0o666` less umask).
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    use std::os::unix::fs::PermissionsExt as _;
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    tempfile::NamedTempFile::new_in(dir)
}

/// Remove `path`; returns whether a file was removed.
pub(crate) fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Removed generated file");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ExportError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}
