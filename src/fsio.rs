//! Reads and writes the text files involved in rendering a page.

use crate::error::RenderError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Reads the whole file at `path` as UTF-8.
pub fn read_text(path: &Path) -> Result<String, RenderError> {
    fs::read_to_string(path).map_err(|source| RenderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates or replaces the file at `path` with `content`.
///
/// The content is written to a temporary file next to `path` and then moved
/// over it, so readers never observe a partially written page. The parent
/// directory must already exist.
pub fn write_text(path: &Path, content: &str) -> Result<(), RenderError> {
    let write_error = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::Builder::new()
        .prefix(".md-render-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .map_err(write_error)?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(write_error)?;

    let permissions = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(write_error)?;
    }

    temp_file
        .persist(path)
        .map_err(|err| write_error(err.error))?;
    Ok(())
}

// Temporary files are created owner-only; a new page should be world-readable.
#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
