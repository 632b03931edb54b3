//! File access used by buffers
//! Buffers only define the line split / serialize contract; the bytes move
//! through this trait so tests can run without touching the disk.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub trait FileIo {
    /// Read the whole file
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file contents with `bytes`
    fn write_all(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    /// Whether the file exists and refuses writes
    fn is_read_only(&self, _path: &Path) -> bool {
        false
    }
}

/// Filesystem implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct FsIo;

impl FileIo for FsIo {
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    /// Atomic write through a temporary file in the same directory
    fn write_all(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let temp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("file")
        ));

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        Ok(())
    }

    fn is_read_only(&self, path: &Path) -> bool {
        fs::metadata(path)
            .map(|m| m.permissions().readonly())
            .unwrap_or(false)
    }
}
