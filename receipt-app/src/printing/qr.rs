//! QR codes as ESC/POS printer-side symbols
//!
//! The printer does the encoding; we only send the store/print commands.

use receipt_printer::EscPosBuilder;

use crate::services::{QrCode, QrRenderer};

/// Largest module size ESC/POS accepts
pub const MAX_MODULE_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, Default)]
pub struct EscPosQrRenderer;

impl QrRenderer for EscPosQrRenderer {
    fn render(&self, payload: &str, size: u32) -> QrCode {
        let size = size.clamp(1, MAX_MODULE_SIZE) as u8;

        let mut b = EscPosBuilder::fragment(0);
        b.qr_code(payload, size);

        QrCode {
            payload: payload.to_string(),
            size,
            commands: b.build(),
        }
    }
}
