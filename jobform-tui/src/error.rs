//! Runtime error types.

use thiserror::Error;

/// Faults from the terminal runtime.
///
/// The form layer itself never faults; everything here is about the host
/// environment (terminal setup, drawing, logger bootstrap).
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Terminal setup, drawing, or teardown failed.
    #[error("terminal I/O: {0}")]
    Io(#[from] std::io::Error),
    /// The file logger could not be initialized.
    #[error("logger init: {0}")]
    Logger(#[from] log::SetLoggerError),
}
