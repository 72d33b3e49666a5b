//! Local printing service
//!
//! Routes rendered tickets to printers by url and writes exports to disk.
//!
//! Printer urls:
//! - `tcp://host:port`, `host:port` or a bare IP: raw TCP network printer
//! - `file:///path/to/spool`: spool file

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use chrono::Utc;
use receipt_core::{ContentType, Document, FileHandle, PrinterHandle};
use receipt_printer::{NetworkPrinter, Printer, SpoolPrinter};
use tracing::{error, info, instrument};

use super::html::HtmlReceipt;
use super::ticket::EscPosReceipt;
use crate::core::{Config, PrintingFailure, PrintingResult};
use crate::services::{PrintingService, QrCode};

/// Resolved printer for one job
#[derive(Debug)]
enum Target {
    Network(NetworkPrinter),
    Spool(SpoolPrinter),
}

impl Target {
    fn parse(url: &str, timeout: Duration) -> PrintingResult<Self> {
        let url = url.trim();
        if url.starts_with("file://") {
            return Ok(Self::Spool(SpoolPrinter::from_url(url)?));
        }

        let addr = url.strip_prefix("tcp://").unwrap_or(url);
        if addr.contains("://") {
            return Err(PrintingFailure::InvalidTarget(url.to_string()));
        }
        let printer = NetworkPrinter::from_addr(addr)
            .map_err(|_| PrintingFailure::InvalidTarget(url.to_string()))?
            .with_timeout(timeout);
        Ok(Self::Network(printer))
    }

    async fn send(&self, data: &[u8]) -> PrintingResult<()> {
        match self {
            Self::Network(p) => p.print(data).await?,
            Self::Spool(p) => p.print(data).await?,
        }
        Ok(())
    }
}

/// Prints ESC/POS tickets and exports HTML files
pub struct LocalPrintService {
    ticket: EscPosReceipt,
    html: HtmlReceipt,
    export_dir: PathBuf,
    default_printer: Option<PrinterHandle>,
    timeout: Duration,
    qr_footer: Option<QrCode>,
    export_seq: AtomicU32,
}

impl LocalPrintService {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            ticket: EscPosReceipt::default(),
            html: HtmlReceipt::new(),
            export_dir: export_dir.into(),
            default_printer: None,
            timeout: Duration::from_secs(5),
            qr_footer: None,
            export_seq: AtomicU32::new(0),
        }
    }

    /// Build from application config
    ///
    /// `qr_footer` is appended to every printed receipt when set.
    pub fn from_config(config: &Config, qr_footer: Option<QrCode>) -> Self {
        Self {
            ticket: EscPosReceipt::new(config.paper_width),
            default_printer: config.default_printer_handle(),
            timeout: config.printer_timeout(),
            qr_footer,
            ..Self::new(config.export_dir())
        }
    }

    pub fn with_default_printer(mut self, printer: PrinterHandle) -> Self {
        self.default_printer = Some(printer);
        self
    }

    pub fn with_paper_width(mut self, width: usize) -> Self {
        self.ticket = EscPosReceipt::new(width);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_qr_footer(mut self, code: QrCode) -> Self {
        self.qr_footer = Some(code);
        self
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Pick the url for a job: explicit target first, then the default printer
    fn resolve<'a>(&'a self, target: Option<&'a PrinterHandle>) -> PrintingResult<&'a str> {
        target
            .and_then(|h| h.url.as_deref())
            .or_else(|| self.default_printer.as_ref().and_then(|h| h.url.as_deref()))
            .ok_or(PrintingFailure::NoPrinter)
    }

    async fn send(&self, target: Option<&PrinterHandle>, data: &[u8]) -> PrintingResult<()> {
        let url = self.resolve(target)?;
        let printer = Target::parse(url, self.timeout)?;

        if let Err(e) = printer.send(data).await {
            error!(url, error = %e, "Print failed");
            return Err(e);
        }

        info!(url, bytes = data.len(), "Print job sent");
        Ok(())
    }

    fn next_export_path(&self) -> PathBuf {
        let seq = self.export_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let stamp = Utc::now().format("%Y%m%d-%H%M%S");
        self.export_dir.join(format!(
            "receipt-{}-{}.{}",
            stamp,
            seq,
            ContentType::Html.extension()
        ))
    }
}

impl PrintingService for LocalPrintService {
    #[instrument(skip(self, document), fields(items = document.item_lines.len()))]
    async fn print(
        &self,
        document: &Document,
        target: Option<&PrinterHandle>,
    ) -> PrintingResult<()> {
        let data = self.ticket.render(document, self.qr_footer.as_ref());
        self.send(target, &data).await
    }

    #[instrument(skip(self, document), fields(dir = %self.export_dir.display()))]
    async fn export_to_file(&self, document: &Document) -> PrintingResult<FileHandle> {
        tokio::fs::create_dir_all(&self.export_dir).await?;

        let path = self.next_export_path();
        tokio::fs::write(&path, self.html.render(document)).await?;

        info!(path = %path.display(), "Receipt exported");
        Ok(FileHandle::new(path, ContentType::Html))
    }

    #[instrument(skip(self, code), fields(payload_len = code.payload.len()))]
    async fn print_code(
        &self,
        code: &QrCode,
        target: Option<&PrinterHandle>,
    ) -> PrintingResult<()> {
        let data = self.ticket.render_code(code);
        self.send(target, &data).await
    }
}
