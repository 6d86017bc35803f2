//! Output writing.
//!
//! Generated text is written to a temporary file next to the destination and
//! renamed over it once complete, so a failed run never leaves a truncated
//! file behind for the build to pick up.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

use crate::error::GenError;

/// Atomically replace `path` with `contents`.
///
/// Any existing file at `path` is overwritten and keeps its permissions. A new
/// file gets the same mode `File::create` would give it (0o666 minus umask on
/// unix). The parent directory must already exist.
pub fn write_text_atomic(path: &Path, contents: &str) -> Result<(), GenError> {
    let write_err = |source: io::Error| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    // Temp files default to 0o600; open with 0o666 so the umask applies
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
