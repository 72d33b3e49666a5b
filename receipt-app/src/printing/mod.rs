//! Printing
//!
//! Realizations of a receipt [`Document`](receipt_core::Document):
//! - [`EscPosReceipt`]: ESC/POS bytes for thermal printers
//! - [`HtmlReceipt`]: the exported HTML page
//!
//! [`LocalPrintService`] sends tickets to network or spool printers and
//! writes exports under the work directory.

pub mod html;
pub mod qr;
pub mod service;
pub mod ticket;

pub use html::HtmlReceipt;
pub use qr::EscPosQrRenderer;
pub use service::LocalPrintService;
pub use ticket::EscPosReceipt;
