// Card Editor - platform/fs.rs
//
// Filesystem helpers: bounded whole-file reads and atomic writes.

use crate::util::error::ReadError;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Read a card file as UTF-8 text.
///
/// The size is checked from metadata before any bytes are read, so an
/// oversized file is rejected without loading it into memory.
pub fn read_card_file(path: &Path, max_size: u64) -> Result<String, ReadError> {
    let metadata = std::fs::metadata(path).map_err(|e| ReadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > max_size {
        return Err(ReadError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| ReadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| ReadError::InvalidEncoding {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Card file read");
    Ok(text)
}

/// Write `bytes` to `path` atomically (write temp, rename over target).
///
/// A failure between write and rename leaves any previous file at `path`
/// intact. The temp file is removed on failure.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    write_atomic_with(path, |file| file.write_all(bytes))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "File written");
    Ok(())
}

/// Create the temp file, let `fill` write it, then rename over `path`.
fn write_atomic_with<F>(path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let tmp = temp_path(path);
    let written = File::create(&tmp).and_then(|mut file| {
        fill(&mut file)?;
        file.sync_all()
    });

    if let Err(e) = written.and_then(|()| std::fs::rename(&tmp, path)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// Sibling temp path: `name.ext` -> `name.ext.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
