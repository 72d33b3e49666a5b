//! # receipt-core
//!
//! Receipt model and rendering rules, free of any IO.
//!
//! ## Scope
//!
//! This crate owns WHAT a receipt is:
//! - [`LineItem`] validation and two-decimal price normalisation
//! - [`ReceiptBuilder`]: the append-only, ordered item list
//! - [`compute_total`] and [`render_document`]: the derived views
//! - Value types shared with the printing side ([`PrinterHandle`], [`FileHandle`])
//!
//! Realizing a [`Document`] as HTML or ESC/POS, and talking to printers,
//! lives in `receipt-app` and `receipt-printer`.
//!
//! ## Example
//!
//! ```
//! use receipt_core::{ReceiptBuilder, compute_total};
//!
//! let mut receipt = ReceiptBuilder::new();
//! receipt.add_item("Coffee", "2.5")?;
//! receipt.add_item("Bagel", "3")?;
//!
//! assert_eq!(compute_total(receipt.items()).to_string(), "5.50");
//! # Ok::<(), receipt_core::ValidationError>(())
//! ```

pub mod error;
pub mod models;
pub mod money;
pub mod receipt;

// Re-exports
pub use error::{ReceiptResult, ValidationError};
pub use models::{ContentType, FileHandle, LineItem, PrinterHandle, PrinterSelection};
pub use receipt::{
    Document, DocumentHeader, DocumentTemplate, ReceiptBuilder, ReceiptState, compute_total,
    render_document,
};
