//! Printer delivery errors

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between a finished byte buffer and the
/// device (or spool file) that should receive it
#[derive(Debug, Error)]
pub enum PrintError {
    /// TCP connect to a network printer was refused or failed
    #[error("Cannot reach printer at {addr}: {source}")]
    Connection {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The job could not be written out
    #[error("Printer write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Spool target is not available
    #[error("Printer offline: {0}")]
    Offline(String),

    /// No connection within the configured timeout
    #[error("Printer at {0} did not answer within {1:?}")]
    Timeout(SocketAddr, Duration),

    /// Address could not be parsed
    #[error("Invalid printer address: {0}")]
    InvalidAddress(String),

    /// Printer url uses a scheme this crate cannot drive
    #[error("Unsupported printer url: {0}")]
    UnsupportedUrl(String),
}

pub type PrintResult<T> = Result<T, PrintError>;
