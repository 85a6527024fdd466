use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "zide.log";
const DEFAULT_FILTER: &str = "zide=info";

/// Keeps the file writer alive and hands the UI its copy of the log lines.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    ui_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    pub fn take_log_rx(&mut self) -> Option<Receiver<String>> {
        self.ui_rx.take()
    }
}

#[derive(Clone)]
struct TeeMakeWriter {
    file: NonBlocking,
    ui_tx: Sender<String>,
}

/// One writer per event: bytes go straight to the file and are buffered for the UI,
/// which receives them line by line when the writer is dropped.
struct TeeWriter {
    file: NonBlocking,
    ui_buf: Vec<u8>,
    ui_tx: Sender<String>,
}

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            file: self.file.make_writer(),
            ui_buf: Vec::with_capacity(256),
            ui_tx: self.ui_tx.clone(),
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        self.ui_buf.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for TeeWriter {
    fn drop(&mut self) {
        if self.ui_buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.ui_buf);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            // The UI may already be gone during shutdown.
            let _ = self.ui_tx.send(line.to_string());
        }
    }
}

fn log_dir() -> Option<PathBuf> {
    zide::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("zide").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

/// Daily rolling file plus the status bar channel. Returns `None` if no log directory is
/// usable or a subscriber is already installed.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file, file_guard) = tracing_appender::non_blocking(file_appender);
    let (ui_tx, ui_rx) = mpsc::channel::<String>();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(TeeMakeWriter { file, ui_tx })
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        "tracing initialized"
    );

    Some(LoggingGuard {
        _file_guard: file_guard,
        ui_rx: Some(ui_rx),
    })
}
