use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

/// Write `content` to `path` through a sibling temp file.
///
/// Either the complete file appears at `path` or nothing does. A file that
/// shows up at `path` while the temp file is being written is left alone and
/// reported as `AlreadyExists`.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut prefix = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    prefix.push(".");

    let mut tmp = Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist_noclobber(path).map_err(|e| e.error)?;
    Ok(())
}
