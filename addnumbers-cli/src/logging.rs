use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::EnvFilter;

const LOG_DIR_NAME: &str = ".addnumbers";
const DEFAULT_LOG_FILE: &str = "mcp.log";

/// A thread-safe writer that flushes and syncs every write.
///
/// In MCP mode stdout carries protocol traffic, so logs go to a file and must
/// reach disk immediately to be useful when the client kills the server.
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file mutex was poisoned"))
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock()?;
        let written = file.write(buf)?;
        file.flush()?;
        file.sync_all()?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self.lock()?;
        file.flush()?;
        file.sync_all()
    }
}

/// Pick the log level from the global flags; MCP mode always logs at debug.
pub fn log_level(quiet: bool, debug: bool, verbose: bool, is_mcp_mode: bool) -> Level {
    if is_mcp_mode {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    }
}

/// Path of the MCP log file, `~/.addnumbers/<ADDNUMBERS_LOG_FILE or mcp.log>`
pub fn mcp_log_path() -> PathBuf {
    let log_dir = dirs::home_dir()
        .map(|home| home.join(LOG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_DIR_NAME));
    let file_name =
        std::env::var("ADDNUMBERS_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    log_dir.join(file_name)
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global tracing subscriber.
///
/// Interactive commands log to stderr. MCP mode logs to [`mcp_log_path`],
/// falling back to stderr when the file cannot be opened.
pub fn init_logging(level: Level, is_mcp_mode: bool) {
    if is_mcp_mode {
        match open_mcp_log_file() {
            Ok(file) => {
                let shared = Arc::new(Mutex::new(file));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(level))
                    .with_writer(move || FileWriterGuard::new(shared.clone()))
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!("Failed to open log file, using stderr: {e}");
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(io::stderr)
        .init();
}

fn open_mcp_log_file() -> io::Result<File> {
    let path = mcp_log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
