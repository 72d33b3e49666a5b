//! Receipt ticket renderer
//!
//! Renders a [`Document`] into ESC/POS format for thermal printers.

use receipt_core::Document;
use receipt_printer::{Align, EscPosBuilder, TextSize};

use crate::services::QrCode;

/// Receipt ticket renderer
#[derive(Debug, Clone)]
pub struct EscPosReceipt {
    width: usize,
}

impl EscPosReceipt {
    /// Create a renderer with the paper width in characters
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render a document to ESC/POS bytes, optionally closing with a QR code
    pub fn render(&self, doc: &Document, qr: Option<&QrCode>) -> Vec<u8> {
        let mut b = EscPosBuilder::new(self.width);

        self.render_header(&mut b, doc);
        self.render_items(&mut b, doc);
        self.render_footer(&mut b, doc, qr);

        b.build()
    }

    /// Render a ticket that carries nothing but a QR code
    pub fn render_code(&self, code: &QrCode) -> Vec<u8> {
        let mut b = EscPosBuilder::new(self.width);
        b.align(Align::Center)
            .raw(&code.commands)
            .newline()
            .align(Align::Left)
            .feed(3)
            .cut();
        b.build()
    }

    /// Brand, title and date/time, centered
    fn render_header(&self, b: &mut EscPosBuilder, doc: &Document) {
        b.align(Align::Center)
            .size(TextSize::Double)
            .bold(true)
            .line(&doc.header.brand)
            .bold(false)
            .size(TextSize::Normal)
            .rule('-');

        b.size(TextSize::DoubleHeight)
            .line(&doc.header.title)
            .size(TextSize::Normal)
            .line(&doc.date_time_line());

        b.align(Align::Left).rule('=');
    }

    /// Item lines and the bold total, amounts right-aligned
    fn render_items(&self, b: &mut EscPosBuilder, doc: &Document) {
        for line in &doc.item_lines {
            // Item names may contain ": " themselves, the price never does
            match line.rsplit_once(": ") {
                Some((name, price)) => b.line_lr(name, price),
                None => b.line(line),
            };
        }

        b.rule('-').bold(true);
        match doc.total_line.split_once(": ") {
            Some((label, amount)) => b.line_lr(label, amount),
            None => b.line(&doc.total_line),
        };
        b.bold(false).rule('=');
    }

    fn render_footer(&self, b: &mut EscPosBuilder, doc: &Document, qr: Option<&QrCode>) {
        b.align(Align::Center).line(&doc.footer);
        if let Some(code) = qr {
            b.newline().raw(&code.commands).newline();
        }
        b.align(Align::Left).feed(3).cut();
    }
}

impl Default for EscPosReceipt {
    fn default() -> Self {
        Self::new(48)
    }
}
