use std::{fs::File, io::Read, path::Path};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory, sizing the buffer from metadata when available.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let hint = file.metadata().map(|m| usize::try_from(m.len()).unwrap_or(0)).unwrap_or(0);
        let mut buf = Vec::with_capacity(hint);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
