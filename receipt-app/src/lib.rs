//! # receipt-app
//!
//! Interactive receipt builder.
//!
//! ## Modules
//!
//! - [`app`]: application controller (form, receipt, printer choice)
//! - [`services`]: platform collaborator traits and the share command
//! - [`printing`]: HTML and ESC/POS realizations, local print service
//! - [`console`]: line-oriented front end
//! - [`core`]: configuration and error types
//! - [`utils`]: logging

pub mod app;
pub mod console;
pub mod core;
pub mod printing;
pub mod services;
pub mod utils;

// Re-exports
pub use app::{App, ItemForm};
pub use console::{Command, Console};
pub use crate::core::{Config, ExportError, PrintingFailure, SharingFailure};
pub use printing::{EscPosQrRenderer, EscPosReceipt, HtmlReceipt, LocalPrintService};
pub use services::{
    CommandSharer, PrinterSelector, PrintingService, QrCode, QrRenderer, SharingService,
};
