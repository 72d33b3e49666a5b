//! Application controller
//!
//! Owns the entry form, the receipt being built and the chosen printer.
//! Every user action is one method; handlers get the state by `&mut`.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use receipt_core::{
    Document, DocumentTemplate, FileHandle, LineItem, PrinterSelection, ReceiptBuilder,
    ReceiptResult,
};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use crate::core::{ExportError, PrintingResult};
use crate::services::{PrinterSelector, PrintingService, QrRenderer, SharingService};

/// Text fields of the item entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub item_name: String,
    pub item_price: String,
}

impl ItemForm {
    pub fn clear(&mut self) {
        self.item_name.clear();
        self.item_price.clear();
    }
}

pub struct App {
    form: ItemForm,
    receipt: ReceiptBuilder,
    selection: PrinterSelection,
    template: DocumentTemplate,
    timezone: Tz,
}

impl App {
    pub fn new(template: DocumentTemplate, timezone: Tz) -> Self {
        Self {
            form: ItemForm::default(),
            receipt: ReceiptBuilder::new(),
            selection: PrinterSelection::None,
            template,
            timezone,
        }
    }

    // === Form ===

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn set_item_name(&mut self, name: impl Into<String>) {
        self.form.item_name = name.into();
    }

    pub fn set_item_price(&mut self, price: impl Into<String>) {
        self.form.item_price = price.into();
    }

    /// Add the form contents as a line item
    ///
    /// Clears both fields on success. On failure the fields keep what the
    /// user typed so it can be corrected.
    pub fn add_item(&mut self) -> ReceiptResult<LineItem> {
        let item = self
            .receipt
            .add_item(&self.form.item_name, &self.form.item_price)?;
        self.form.clear();
        Ok(item)
    }

    // === Views ===

    pub fn items(&self) -> &[LineItem] {
        self.receipt.items()
    }

    pub fn total(&self) -> Decimal {
        self.receipt.total()
    }

    pub fn selection(&self) -> &PrinterSelection {
        &self.selection
    }

    /// Render the current receipt as of `now`, in the configured timezone
    pub fn document(&self, now: DateTime<Utc>) -> Document {
        self.template
            .render(self.receipt.items(), &now.with_timezone(&self.timezone))
    }

    // === Actions ===

    /// Print on the selected printer, or the service default
    #[instrument(skip(self, service), fields(items = self.receipt.len()))]
    pub async fn print_receipt<P: PrintingService>(
        &self,
        service: &P,
        now: DateTime<Utc>,
    ) -> PrintingResult<()> {
        let document = self.document(now);
        service.print(&document, self.selection.handle()).await?;
        info!("Receipt printed");
        Ok(())
    }

    /// Export to a file and hand it to the share flow
    ///
    /// On a sharing failure the error still carries the exported handle.
    #[instrument(skip(self, service, sharer), fields(items = self.receipt.len()))]
    pub async fn export_receipt<P: PrintingService, S: SharingService>(
        &self,
        service: &P,
        sharer: &S,
        now: DateTime<Utc>,
    ) -> Result<FileHandle, ExportError> {
        let document = self.document(now);
        let handle = service.export_to_file(&document).await?;
        info!(path = %handle.path().display(), "Receipt file has been saved");

        if let Err(source) = sharer.share(&handle, handle.content_type()).await {
            warn!(error = %source, "Share did not complete");
            return Err(ExportError::Sharing { handle, source });
        }
        Ok(handle)
    }

    /// Ask the selector for a printer
    ///
    /// A cancelled picker clears any previous choice. Does nothing when the
    /// selector is not supported.
    pub async fn select_printer<S: PrinterSelector>(&mut self, selector: &S) -> &PrinterSelection {
        if !selector.is_supported() {
            warn!("Printer selection not supported");
            return &self.selection;
        }

        self.selection = selector.select().await;
        match &self.selection {
            PrinterSelection::Selected(handle) => info!(printer = %handle, "Printer selected"),
            PrinterSelection::None => info!("Printer selection cleared"),
        }
        &self.selection
    }

    /// Print a standalone QR code ticket
    #[instrument(skip(self, service, renderer))]
    pub async fn print_qr<P: PrintingService, Q: QrRenderer>(
        &self,
        service: &P,
        renderer: &Q,
        payload: &str,
        size: u32,
    ) -> PrintingResult<()> {
        let code = renderer.render(payload, size);
        service.print_code(&code, self.selection.handle()).await
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DocumentTemplate::default(), Tz::UTC)
    }
}
