//! Platform collaborators
//!
//! The application talks to printing, sharing, printer selection and QR
//! encoding only through these traits. Local implementations live in
//! [`crate::printing`], [`sharing`] and [`crate::console`]; tests swap in
//! recording fakes.

pub mod sharing;

use receipt_core::{ContentType, Document, FileHandle, PrinterHandle, PrinterSelection};

use crate::core::{PrintingResult, SharingResult};

pub use sharing::CommandSharer;

/// Prints and exports documents
#[allow(async_fn_in_trait)]
pub trait PrintingService {
    /// Print `document` on `target`, or on the default printer when `None`
    async fn print(&self, document: &Document, target: Option<&PrinterHandle>)
    -> PrintingResult<()>;

    /// Write `document` to a file and hand back its location
    async fn export_to_file(&self, document: &Document) -> PrintingResult<FileHandle>;

    /// Print a standalone visual code
    async fn print_code(&self, code: &QrCode, target: Option<&PrinterHandle>)
    -> PrintingResult<()>;
}

/// Asks the user to pick a printer
#[allow(async_fn_in_trait)]
pub trait PrinterSelector {
    /// Whether selection is available on this platform at all
    fn is_supported(&self) -> bool {
        true
    }

    /// Present the picker. A cancelled picker yields [`PrinterSelection::None`].
    async fn select(&self) -> PrinterSelection;
}

/// Hands an exported file to whatever the platform uses for sharing
#[allow(async_fn_in_trait)]
pub trait SharingService {
    async fn share(&self, handle: &FileHandle, content_type: ContentType) -> SharingResult<()>;
}

/// Encodes a payload as a printable visual code
pub trait QrRenderer {
    fn render(&self, payload: &str, size: u32) -> QrCode;
}

/// Printer-ready QR symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    /// Text encoded in the symbol
    pub payload: String,
    /// Module size in dots
    pub size: u8,
    /// ESC/POS commands that store and print the symbol
    pub commands: Vec<u8>,
}
