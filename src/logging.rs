//! Persistent file logging for YaHomie.
//!
//! `env_logger` does the filtering (`RUST_LOG`, default `info`) and formatting;
//! its output is piped into a writer that appends to a daily log file in the
//! app log directory, with size-based rotation and cleanup of old files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use env_logger::{Env, Target};

use crate::error::{AppError, AppResult};

/// Maximum log file size before rotation (5MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum number of log files to keep
const MAX_LOG_FILES: usize = 5;

const LOG_FILE_PREFIX: &str = "yahomie";

/// Install the global logger, writing into `log_dir`.
pub fn init(log_dir: &Path) -> AppResult<()> {
    fs::create_dir_all(log_dir).map_err(|e| AppError::io(log_dir, e))?;
    cleanup_old_logs(log_dir);

    let writer = LogFileWriter::open(log_dir.to_path_buf())?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(writer)))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    log::info!("[LOGGING] Logging system initialized");
    log::info!("[LOGGING] Log directory: {:?}", log_dir);
    Ok(())
}

/// Get the path for the current log file (one per day)
fn current_log_path(log_dir: &Path) -> PathBuf {
    let date = Local::now().format("%Y-%m-%d");
    log_dir.join(format!("{}_{}.log", LOG_FILE_PREFIX, date))
}

/// Clean up old log files, keeping only the most recent MAX_LOG_FILES
fn cleanup_old_logs(log_dir: &Path) {
    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    let mut log_files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "log")
                .unwrap_or(false)
        })
        .collect();

    // Newest first
    log_files.sort_by(|a, b| {
        let a_time = a.metadata().and_then(|m| m.modified()).ok();
        let b_time = b.metadata().and_then(|m| m.modified()).ok();
        b_time.cmp(&a_time)
    });

    for file in log_files.into_iter().skip(MAX_LOG_FILES) {
        let _ = fs::remove_file(file.path());
    }
}

/// Appends formatted records to the current log file and rotates it once it
/// grows past `MAX_LOG_SIZE`.
struct LogFileWriter {
    dir: PathBuf,
    path: PathBuf,
    file: File,
    written: u64,
}

impl LogFileWriter {
    fn open(dir: PathBuf) -> AppResult<Self> {
        let path = current_log_path(&dir);
        let file = open_append(&path).map_err(|e| AppError::io(&path, e))?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            dir,
            path,
            file,
            written,
        })
    }

    fn rotate(&mut self) {
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
        let rotated = self
            .dir
            .join(format!("{}_{}.log", LOG_FILE_PREFIX, timestamp));
        let _ = fs::rename(&self.path, &rotated);

        // Keep writing to the old handle if a fresh file can't be opened
        let path = current_log_path(&self.dir);
        if let Ok(file) = open_append(&path) {
            self.path = path;
            self.file = file;
            self.written = 0;
        }

        cleanup_old_logs(&self.dir);
    }
}

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        #[cfg(debug_assertions)]
        {
            let _ = io::stderr().write_all(buf);
        }

        self.file.write_all(buf)?;
        self.written += buf.len() as u64;

        if self.written > MAX_LOG_SIZE {
            self.rotate();
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("yahomie_logs_{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_current_log_path_format() {
        let path = current_log_path(Path::new("/logs"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();

        assert!(name.starts_with("yahomie_"), "unexpected name: {}", name);
        assert!(name.ends_with(".log"));
        // yahomie_YYYY-MM-DD.log
        assert_eq!(name.len(), "yahomie_".len() + 10 + ".log".len());
    }

    #[test]
    fn test_cleanup_keeps_most_recent_files() {
        let dir = temp_dir();
        for i in 0..(MAX_LOG_FILES + 3) {
            fs::write(dir.join(format!("yahomie_old_{}.log", i)), b"x").unwrap();
        }
        fs::write(dir.join("notes.txt"), b"keep me").unwrap();

        cleanup_old_logs(&dir);

        let logs = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "log").unwrap_or(false))
            .count();
        assert_eq!(logs, MAX_LOG_FILES);
        assert!(dir.join("notes.txt").exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_writer_appends_to_daily_file() {
        let dir = temp_dir();
        let mut writer = LogFileWriter::open(dir.clone()).expect("open failed");

        writer.write_all(b"[INFO] first\n").unwrap();
        writer.write_all(b"[INFO] second\n").unwrap();
        writer.flush().unwrap();

        let content = fs::read_to_string(current_log_path(&dir)).unwrap();
        assert_eq!(content, "[INFO] first\n[INFO] second\n");
        assert_eq!(writer.written, content.len() as u64);

        fs::remove_dir_all(&dir).ok();
    }
}
