//! Size-rotated line writer for the span file.
//!
//! When the active file reaches its size limit it is shifted into numbered
//! backups: `zevents-spans.jsonl` becomes `zevents-spans.jsonl.1`, `.1`
//! becomes `.2`, and so on. The oldest backup beyond the retention count is
//! deleted.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Backups kept after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct FileWriter {
    /// Path of the active file.
    file_path: PathBuf,
    /// Size at which the next write rotates first.
    max_bytes: u64,
    /// Number of `.N` backups kept.
    max_backups: usize,
    /// Lazily opened handle; reset to `None` on rotation.
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Writer with the default limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Writer rotating once the file reaches `max_bytes`, keeping
    /// `max_backups` numbered backups.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Active file; backups are written next to it
    /// * `max_bytes` - Size at which the next write rotates first
    /// * `max_backups` - Numbered backups kept (`0` discards the old file)
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// The line is flushed before returning.
    ///
    /// # Parameters
    ///
    /// * `line` - One serialized record (a newline is added)
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file, or
    /// an error if the internal lock is poisoned.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::other(format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let Some(file) = writer.as_mut() else {
            return Err(std::io::Error::other("trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() >= self.max_bytes)
    }

    /// Shifts `path.N-1` → `path.N` down to `path` → `path.1`.
    fn rotate(&self) -> std::io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = backup_path(&self.file_path, self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = backup_path(&self.file_path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, index + 1))?;
            }
        }

        fs::rename(&self.file_path, backup_path(&self.file_path, 1))
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(read(&path), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = FileWriter::with_limits(path.clone(), 4, 2);

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();
        writer.write_line("third").unwrap();

        assert_eq!(read(&path), "third\n");
        assert_eq!(read(&backup_path(&path, 1)), "second\n");
        assert_eq!(read(&backup_path(&path, 2)), "first\n");
    }

    #[test]
    fn drops_backups_beyond_retention() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = FileWriter::with_limits(path.clone(), 4, 1);

        for line in ["one", "two", "three"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "three\n");
        assert_eq!(read(&backup_path(&path, 1)), "two\n");
        assert!(!backup_path(&path, 2).exists());
    }

    #[test]
    fn file_at_exact_limit_rotates_before_next_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = FileWriter::with_limits(path.clone(), 4, 2);

        writer.write_line("abc").unwrap();
        writer.write_line("de").unwrap();

        assert_eq!(read(&path), "de\n");
        assert_eq!(read(&backup_path(&path, 1)), "abc\n");
    }

    #[test]
    fn file_below_limit_keeps_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let writer = FileWriter::with_limits(path.clone(), 10, 2);

        writer.write_line("ab").unwrap();
        writer.write_line("cd").unwrap();

        assert_eq!(read(&path), "ab\ncd\n");
        assert!(!backup_path(&path, 1).exists());
    }

    #[test]
    fn backup_names_append_index() {
        let path = Path::new("/data/zevents-spans.jsonl");
        assert_eq!(backup_path(path, 3), PathBuf::from("/data/zevents-spans.jsonl.3"));
    }
}
