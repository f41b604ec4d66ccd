//! File logging for the `budget` binary
//!
//! Every run appends to `budget.log` in the data directory. A log that has
//! grown past [`Rotation::max_bytes`] is cut down to its newest whole lines
//! before the subscriber opens it.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "budget.log";

const ROTATED_MARKER: &[u8] = b"--- budget.log rotated ---\n";

/// Size limits applied when a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub max_bytes: u64,
    pub keep_bytes: u64,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            max_bytes: 2 * 1024 * 1024,
            keep_bytes: 512 * 1024,
        }
    }
}

impl Rotation {
    /// Trim `path` if it is over the limit. Returns the number of bytes dropped.
    pub fn apply(&self, path: &Path) -> io::Result<u64> {
        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };
        if size <= self.max_bytes {
            return Ok(0);
        }

        let start = size.saturating_sub(self.keep_bytes);
        let mut tail = Vec::new();
        {
            let mut file = File::open(path)?;
            file.seek(SeekFrom::Start(start))?;
            file.read_to_end(&mut tail)?;
        }

        let first_line = match tail.iter().position(|&b| b == b'\n') {
            Some(newline) if start > 0 => newline + 1,
            _ => 0,
        };
        let kept = &tail[first_line..];

        let mut file = File::create(path)?;
        file.write_all(ROTATED_MARKER)?;
        file.write_all(kept)?;

        Ok(size - kept.len() as u64)
    }
}

/// `MakeWriter` over one append-mode file handle shared by every event
#[derive(Clone)]
struct AppendLog(Arc<Mutex<File>>);

struct AppendLogGuard(Arc<Mutex<File>>);

impl Write for AppendLogGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).flush()
    }
}

impl<'a> MakeWriter<'a> for AppendLog {
    type Writer = AppendLogGuard;

    fn make_writer(&'a self) -> Self::Writer {
        AppendLogGuard(Arc::clone(&self.0))
    }
}

/// Install the global subscriber and return the log path.
///
/// `RUST_LOG` wins over `level`. Without it the app logs at `level` and
/// `budget_core` at `warn`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let dropped = match Rotation::default().apply(&log_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Warning: could not trim {}: {e}", log_path.display());
            0
        }
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("budget={level},budget_core=warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(AppendLog(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), dropped, "Logging started");
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SMALL: Rotation = Rotation {
        max_bytes: 500,
        keep_bytes: 100,
    };

    #[test]
    fn test_small_log_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "one\ntwo\n").unwrap();

        assert_eq!(SMALL.apply(&path).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_rotation_keeps_whole_recent_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let content: String = (0..100).map(|i| format!("line {i:03}\n")).collect();
        fs::write(&path, &content).unwrap();

        let dropped = SMALL.apply(&path).unwrap();

        let rotated = fs::read_to_string(&path).unwrap();
        let mut lines = rotated.lines();
        assert_eq!(lines.next(), Some("--- budget.log rotated ---"));
        let kept: Vec<&str> = lines.collect();
        assert!(!kept.is_empty());
        assert!(kept.iter().all(|l| l.starts_with("line ") && l.len() == 8));
        assert_eq!(kept.last(), Some(&"line 099"));
        assert_eq!(dropped, (content.len() - kept.len() * 9) as u64);
    }

    #[test]
    fn test_missing_log_is_fine() {
        let dir = tempdir().unwrap();
        assert_eq!(SMALL.apply(&dir.path().join(LOG_FILE_NAME)).unwrap(), 0);
    }
}
