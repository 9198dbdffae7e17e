//! Storage file watcher for cross-instance sync
//!
//! Another running instance writing the storage file shows up here as a
//! `Message::StorageChanged`. The parent directory is watched because the
//! file is replaced by rename on every write.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use gitguide_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Default debounce duration in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Watches a single storage file
pub struct StorageWatcher {
    /// Storage file path
    path: PathBuf,
    debounce: Duration,
    /// Handle to stop the watcher
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl StorageWatcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            stop_tx: None,
        }
    }

    /// Set debounce duration in milliseconds
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start watching for changes
    ///
    /// Sends `Message::StorageChanged` or `Message::WatcherError` to the channel
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<()> {
        if self.is_running() {
            return Err(Error::watcher("Watcher is already running"));
        }

        let Some(file_name) = self.path.file_name().map(|n| n.to_os_string()) else {
            return Err(Error::watcher(format!(
                "Not a file path: {}",
                self.path.display()
            )));
        };
        let directory = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let debounce = self.debounce;
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();

        self.stop_tx = Some(stop_tx);

        // Spawn the watcher in a blocking task
        tokio::task::spawn_blocking(move || {
            Self::run_watcher(directory, file_name, debounce, message_tx, stop_rx);
        });

        Ok(())
    }

    /// Stop the watcher
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Check if watcher is running
    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    /// Internal: run the blocking watcher
    fn run_watcher(
        directory: PathBuf,
        file_name: OsString,
        debounce: Duration,
        message_tx: mpsc::Sender<Message>,
        mut stop_rx: tokio::sync::oneshot::Receiver<()>,
    ) {
        let tx_clone = message_tx.clone();

        let debouncer_result = new_debouncer(
            debounce,
            None, // No tick rate override
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    let touched = events.iter().any(|event| {
                        event
                            .paths
                            .iter()
                            .any(|path| path.file_name() == Some(file_name.as_os_str()))
                    });

                    if touched {
                        debug!("Storage file changed on disk");
                        let _ = tx_clone.blocking_send(Message::StorageChanged);
                    }
                }
                Err(errors) => {
                    for error in errors {
                        warn!("Storage watcher error: {:?}", error);
                        let _ = tx_clone.blocking_send(Message::WatcherError {
                            message: error.to_string(),
                        });
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create storage watcher: {}", e);
                let _ = message_tx.blocking_send(Message::WatcherError {
                    message: format!("Failed to create watcher: {}", e),
                });
                return;
            }
        };

        if let Err(e) = debouncer.watch(&directory, RecursiveMode::NonRecursive) {
            warn!("Failed to watch {}: {}", directory.display(), e);
            let _ = message_tx.blocking_send(Message::WatcherError {
                message: format!("Failed to watch {}: {}", directory.display(), e),
            });
            return;
        }
        info!("Watching storage in: {}", directory.display());

        // Keep running until stop signal
        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    info!("Storage watcher stopping");
                    break;
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }
    }
}

impl Drop for StorageWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
