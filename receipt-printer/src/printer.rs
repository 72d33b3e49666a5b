//! Byte sinks for finished tickets
//!
//! - [`NetworkPrinter`]: raw TCP, the "JetDirect" port most thermal printers expose
//! - [`SpoolPrinter`]: appends to a local file, a virtual printer

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, info, instrument, warn};

use crate::error::{PrintError, PrintResult};

/// Raw TCP port most thermal printers listen on
pub const DEFAULT_PORT: u16 = 9100;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Anything that accepts a complete ESC/POS job
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Deliver one job
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Cheap reachability probe
    async fn is_online(&self) -> bool;
}

#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        Self::from_addr(&format!("{host}:{port}"))
    }

    /// Parse `ip:port`, or a bare IP which gets [`DEFAULT_PORT`]
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        let addr = addr.trim();
        let parsed = match addr.parse::<SocketAddr>() {
            Ok(parsed) => parsed,
            Err(_) => format!("{addr}:{DEFAULT_PORT}")
                .parse()
                .map_err(|_| PrintError::InvalidAddress(addr.to_string()))?,
        };

        Ok(Self {
            addr: parsed,
            timeout: CONNECT_TIMEOUT,
        })
    }

    /// Connect timeout for print jobs
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    async fn connect(&self, timeout: Duration) -> PrintResult<TcpStream> {
        tokio::time::timeout(timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(self.addr, timeout))?
            .map_err(|source| PrintError::Connection {
                addr: self.addr,
                source,
            })
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(self, data), fields(addr = %self.addr, bytes = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        let mut stream = self.connect(self.timeout).await?;
        debug!("Connected");

        stream.write_all(data).await?;
        stream.flush().await?;
        // Half-close so the printer sees end of job
        stream.shutdown().await?;

        info!("Job delivered");
        Ok(())
    }

    #[instrument(skip(self), fields(addr = %self.addr))]
    async fn is_online(&self) -> bool {
        match self.connect(PROBE_TIMEOUT).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Printer unreachable");
                false
            }
        }
    }
}

/// Virtual printer appending every job to a file
///
/// Stands in for hardware on machines without a printer. A print server
/// can also pick jobs up from the spool file.
#[derive(Debug, Clone)]
pub struct SpoolPrinter {
    path: PathBuf,
}

impl SpoolPrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create from a `file://` url
    pub fn from_url(url: &str) -> PrintResult<Self> {
        let path = url
            .strip_prefix("file://")
            .filter(|p| !p.is_empty())
            .ok_or_else(|| PrintError::UnsupportedUrl(url.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn spool_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Printer for SpoolPrinter {
    #[instrument(skip(self, data), fields(path = %self.path.display(), bytes = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        if !self.is_online().await {
            return Err(PrintError::Offline(format!(
                "spool directory missing: {}",
                self.spool_dir().display()
            )));
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(data).await?;
        file.flush().await?;

        info!("Job spooled");
        Ok(())
    }

    async fn is_online(&self) -> bool {
        tokio::fs::metadata(self.spool_dir())
            .await
            .is_ok_and(|m| m.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_port() {
        let printer = NetworkPrinter::new("192.168.1.100", 9101).unwrap();
        assert_eq!(printer.addr().port(), 9101);
    }

    #[test]
    fn test_bare_ip_gets_default_port() {
        let printer = NetworkPrinter::from_addr(" 192.168.1.100 ").unwrap();
        assert_eq!(printer.addr().port(), DEFAULT_PORT);
    }

    #[test]
    fn test_hostname_is_rejected() {
        assert!(matches!(
            NetworkPrinter::from_addr("printer.local"),
            Err(PrintError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_spool_from_url() {
        let printer = SpoolPrinter::from_url("file:///var/spool/receipts.bin").unwrap();
        assert_eq!(printer.path(), Path::new("/var/spool/receipts.bin"));

        assert!(matches!(
            SpoolPrinter::from_url("ipp://printer"),
            Err(PrintError::UnsupportedUrl(_))
        ));
        assert!(SpoolPrinter::from_url("file://").is_err());
    }
}
