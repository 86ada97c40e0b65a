// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
        let mut file = AtomicFile::create(path)?;
        file.write_all(data)?;
        file.commit()
    }
}

/// A file that only appears at its destination once [`AtomicFile::commit`] succeeds.
///
/// Bytes go to a temporary file in the destination directory; dropping without a
/// commit removes it and leaves any existing destination untouched.
#[derive(Debug)]
pub struct AtomicFile {
    target: PathBuf,
    temp: BufWriter<NamedTempFile>,
}

impl AtomicFile {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let target = path.as_ref().to_path_buf();
        let parent = parent_dir(&target);
        let temp = tempfile::Builder::new().prefix(".collected_files").suffix(".tmp").tempfile_in(parent)?;
        Ok(Self { target, temp: BufWriter::new(temp) })
    }

    pub fn temp_path(&self) -> &Path {
        self.temp.get_ref().path()
    }

    pub fn commit(self) -> io::Result<()> {
        let temp = self.temp.into_inner().map_err(io::IntoInnerError::into_error)?;
        // Best-effort durability; the rename below is what makes the output visible.
        let _ = temp.as_file().sync_all();
        apply_default_permissions(temp.as_file(), &self.target);
        temp.persist(&self.target).map_err(|err| err.error)?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent_dir(&self.target)) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

// Temp files are created owner-only; keep the mode of the file being replaced, or use
// the usual 0644 for a new one.
#[cfg(unix)]
fn apply_default_permissions(file: &File, target: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match std::fs::metadata(target) {
        Ok(existing) => existing.permissions(),
        Err(_) => std::fs::Permissions::from_mode(0o644),
    };
    let _ = file.set_permissions(permissions);
}

#[cfg(not(unix))]
fn apply_default_permissions(_file: &File, _target: &Path) {}
