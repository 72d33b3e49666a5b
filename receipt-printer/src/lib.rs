//! # receipt-printer
//!
//! ESC/POS printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building (text, alignment, separators, QR codes, cut)
//! - Network printing (TCP port 9100)
//! - Spool printing to a file (virtual printer)
//!
//! Business logic (WHAT to print) stays in application code:
//! - Receipt documents → receipt-core
//! - Document to ESC/POS/HTML rendering → receipt-app
//!
//! ## Example
//!
//! ```ignore
//! use receipt_printer::{Align, EscPosBuilder, NetworkPrinter, Printer, TextSize};
//!
//! let mut builder = EscPosBuilder::new(48);
//! builder
//!     .align(Align::Center)
//!     .size(TextSize::Double)
//!     .line("Insyllium")
//!     .size(TextSize::Normal)
//!     .rule('=')
//!     .align(Align::Left)
//!     .line_lr("Coffee", "$2.50")
//!     .cut();
//!
//! let printer = NetworkPrinter::new("192.168.1.100", 9100)?;
//! printer.print(&builder.build()).await?;
//! ```

mod error;
mod escpos;
mod printer;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use escpos::{Align, EscPosBuilder, TextSize, text_width};
pub use printer::{DEFAULT_PORT, NetworkPrinter, Printer, SpoolPrinter};
