//! Application error types
//!
//! One enum per collaborator so the UI can decide how loud to be:
//! printing failures are shown as a failure notice, sharing failures just
//! end the flow.

use receipt_core::FileHandle;
use receipt_printer::PrintError;
use thiserror::Error;

/// Print or export request rejected by the printing service
#[derive(Debug, Error)]
pub enum PrintingFailure {
    #[error("No printer selected and no default printer configured")]
    NoPrinter,

    #[error("Invalid printer target: {0}")]
    InvalidTarget(String),

    #[error(transparent)]
    Printer(#[from] PrintError),

    #[error("Export failed: {0}")]
    Export(#[from] std::io::Error),
}

pub type PrintingResult<T> = Result<T, PrintingFailure>;

/// Share flow ended without handing the file over
#[derive(Debug, Error)]
pub enum SharingFailure {
    /// The share target was closed without completing
    #[error("Share dismissed")]
    Dismissed,

    #[error("Share failed: {0}")]
    Failed(String),

    /// The share handler could not be started
    #[error("Failed to launch share handler: {0}")]
    Launch(#[source] std::io::Error),
}

pub type SharingResult<T> = Result<T, SharingFailure>;

/// Failure anywhere in export + share
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Printing(#[from] PrintingFailure),

    /// The file was written but could not be shared
    #[error("Exported to {} but sharing failed: {source}", handle.path().display())]
    Sharing {
        handle: FileHandle,
        #[source]
        source: SharingFailure,
    },
}

/// Invalid configuration value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid timezone {0:?}")]
    InvalidTimezone(String),

    #[error("Invalid {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Invalid PRINTERS list: {0}")]
    InvalidPrinters(#[from] serde_json::Error),
}
