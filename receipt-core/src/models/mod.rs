//! Receipt data models

pub mod file;
pub mod line_item;
pub mod printer;

pub use file::{ContentType, FileHandle};
pub use line_item::LineItem;
pub use printer::{PrinterHandle, PrinterSelection};
