//! Core application plumbing: configuration and error types

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{
    ConfigError, ExportError, PrintingFailure, PrintingResult, SharingFailure, SharingResult,
};
