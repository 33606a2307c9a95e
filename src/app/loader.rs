// Card Editor - app/loader.rs
//
// Single-shot asynchronous card file reads.
//
// Architecture:
//   - `FileLoader` lives on the UI thread; the read runs on a background thread.
//   - The background thread sends exactly one `LoadOutcome` over an mpsc
//     channel and exits.
//   - Only the most recent read is tracked. Starting another read while one
//     is in flight drops the earlier receiver, so its result is discarded.
//   - There is no cancellation and no timeout.

use crate::platform::fs;
use crate::util::error::ReadError;
use std::path::PathBuf;
use std::sync::mpsc;

/// Result of one background read.
#[derive(Debug)]
pub struct LoadOutcome {
    /// File that was read.
    pub path: PathBuf,
    /// Full file text, or why it could not be read.
    pub result: Result<String, ReadError>,
}

/// Runs card file reads on a background thread.
#[derive(Default)]
pub struct FileLoader {
    rx: Option<mpsc::Receiver<LoadOutcome>>,
}

impl FileLoader {
    pub fn new() -> Self {
        Self { rx: None }
    }

    /// Start reading `path` in the background.
    pub fn start(&mut self, path: PathBuf, max_size: u64) {
        if self.rx.is_some() {
            tracing::warn!(
                path = %path.display(),
                "Read already in flight; its result will be discarded"
            );
        }

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        tracing::info!(path = %path.display(), "Reading card file");
        std::thread::spawn(move || {
            let result = fs::read_card_file(&path, max_size);
            // Receiver gone means the read was superseded or the UI closed.
            let _ = tx.send(LoadOutcome { path, result });
        });
    }

    /// True while a read has been started and its outcome not yet collected.
    pub fn is_loading(&self) -> bool {
        self.rx.is_some()
    }

    /// Collect the outcome of the current read without blocking.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.rx = None;
                Some(outcome)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                // Reader thread exited without sending (it panicked).
                tracing::error!("Card file reader stopped without a result");
                self.rx = None;
                None
            }
        }
    }
}
