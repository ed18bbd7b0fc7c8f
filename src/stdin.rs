//! Bounded stdin reading.
//!
//! Reading piped input is the only blocking step of a resolution. It is
//! always given a timeout: on expiry the read is abandoned and
//! [`StdinError::Timeout`] is returned instead of hanging.

use std::io::{IsTerminal, Read};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Error returned by a stdin source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StdinError {
    #[error("timed out after {timeout_ms}ms waiting for stdin")]
    Timeout { timeout_ms: u128 },

    #[error("failed to read stdin: {0}")]
    Read(String),
}

/// Something that can supply input text within a timeout.
pub trait StdinSource {
    fn read(&self, timeout: Duration) -> Result<String, StdinError>;
}

/// Reads the process's standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessStdin;

impl ProcessStdin {
    /// Whether stdin is connected to a terminal (nothing piped in).
    pub fn is_terminal() -> bool {
        std::io::stdin().is_terminal()
    }
}

impl StdinSource for ProcessStdin {
    fn read(&self, timeout: Duration) -> Result<String, StdinError> {
        read_with_timeout(std::io::stdin(), timeout)
    }
}

/// Read all of `reader` on a helper thread, waiting at most `timeout`.
///
/// On timeout the helper thread is detached; it exits once the reader
/// reaches EOF or the process ends.
pub fn read_with_timeout<R>(mut reader: R, timeout: Duration) -> Result<String, StdinError>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut buf = String::new();
        let result = reader
            .read_to_string(&mut buf)
            .map(|_| buf)
            .map_err(|e| StdinError::Read(e.to_string()));
        // The receiver is gone after a timeout; nothing to report then.
        let _ = tx.send(result);
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(StdinError::Timeout {
            timeout_ms: timeout.as_millis(),
        }),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(StdinError::Read(
            "reader thread exited without a result".to_string(),
        )),
    }
}

/// A fixed input, for tests and embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticStdin(pub String);

impl StdinSource for StaticStdin {
    fn read(&self, _timeout: Duration) -> Result<String, StdinError> {
        Ok(self.0.clone())
    }
}
