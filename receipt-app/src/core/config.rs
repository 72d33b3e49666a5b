use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use receipt_core::{DocumentTemplate, PrinterHandle};

use super::error::ConfigError;

/// Application configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./work_dir | Working directory (logs, exports) |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level / filter directive |
/// | LOG_JSON | false | JSON console logs |
/// | RECEIPT_BRAND | Insyllium | Receipt header brand |
/// | RECEIPT_TITLE | Receipt | Receipt header title |
/// | RECEIPT_FOOTER | Thanks for choosing us | Receipt footer |
/// | RECEIPT_TIMEZONE | UTC | IANA timezone for the date/time line |
/// | PAPER_WIDTH | 48 | Ticket width in characters |
/// | DEFAULT_PRINTER | - | Printer url used when nothing is selected |
/// | PRINTERS | [] | JSON list of `{"name", "url"}` offered by `select` |
/// | PRINTER_TIMEOUT_MS | 5000 | Network printer connect timeout |
/// | SHARE_COMMAND | xdg-open / open | Program that opens exported files |
/// | RECEIPT_QR_PAYLOAD | - | QR payload appended to printed tickets |
/// | QR_SIZE | 8 | QR module size (1-16) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/receipts DEFAULT_PRINTER=tcp://192.168.1.50:9100 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for logs and exported files
    pub work_dir: PathBuf,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,

    // === Receipt ===
    pub brand: String,
    pub title: String,
    pub footer: String,
    pub timezone: Tz,

    // === Printing ===
    pub paper_width: usize,
    pub default_printer: Option<String>,
    pub printers: Vec<PrinterHandle>,
    pub printer_timeout_ms: u64,
    pub qr_payload: Option<String>,
    pub qr_size: u32,

    // === Sharing ===
    pub share_command: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults. Unparseable numbers
    /// fall back too; an unknown timezone or a malformed `PRINTERS` list
    /// is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let template = DocumentTemplate::default();
        let trimmed = |key: &str| lookup(key).map(|v| v.trim().to_string());
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let tz_name = lookup("RECEIPT_TIMEZONE").unwrap_or_else(|| "UTC".into());
        let timezone =
            Tz::from_str(tz_name.trim()).map_err(|_| ConfigError::InvalidTimezone(tz_name))?;

        let printers: Vec<PrinterHandle> = match non_empty("PRINTERS") {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        let paper_width: usize = trimmed("PAPER_WIDTH")
            .and_then(|v| v.parse().ok())
            .unwrap_or(48);
        if paper_width == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PAPER_WIDTH",
                value: "0".into(),
            });
        }

        Ok(Self {
            work_dir: lookup("WORK_DIR")
                .unwrap_or_else(|| "./work_dir".into())
                .into(),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: trimmed("LOG_JSON").and_then(|v| v.parse().ok()).unwrap_or(false),

            brand: lookup("RECEIPT_BRAND").unwrap_or(template.brand),
            title: lookup("RECEIPT_TITLE").unwrap_or(template.title),
            footer: lookup("RECEIPT_FOOTER").unwrap_or(template.footer),
            timezone,

            paper_width,
            default_printer: non_empty("DEFAULT_PRINTER"),
            printers,
            printer_timeout_ms: trimmed("PRINTER_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            qr_payload: non_empty("RECEIPT_QR_PAYLOAD"),
            qr_size: trimmed("QR_SIZE").and_then(|v| v.parse().ok()).unwrap_or(8),

            share_command: non_empty("SHARE_COMMAND").unwrap_or_else(default_share_command),
        })
    }

    /// Directory for rotating log files
    pub fn log_dir(&self) -> PathBuf {
        self.work_dir.join("logs")
    }

    /// Directory exported receipts are written to
    pub fn export_dir(&self) -> PathBuf {
        self.work_dir.join("exports")
    }

    pub fn printer_timeout(&self) -> Duration {
        Duration::from_millis(self.printer_timeout_ms)
    }

    /// Receipt template with the configured header and footer
    pub fn document_template(&self) -> DocumentTemplate {
        DocumentTemplate {
            brand: self.brand.clone(),
            title: self.title.clone(),
            footer: self.footer.clone(),
            ..DocumentTemplate::default()
        }
    }

    /// Handle for `DEFAULT_PRINTER`, if set
    pub fn default_printer_handle(&self) -> Option<PrinterHandle> {
        self.default_printer
            .as_ref()
            .map(|url| PrinterHandle::new("default", Some(url.clone())))
    }

    /// Create the working directory tree
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.log_dir())?;
        std::fs::create_dir_all(self.export_dir())?;
        Ok(())
    }
}

fn default_share_command() -> String {
    if cfg!(target_os = "macos") {
        "open".into()
    } else {
        "xdg-open".into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.work_dir, PathBuf::from("./work_dir"));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.timezone, Tz::UTC);
        assert_eq!(config.paper_width, 48);
        assert!(config.default_printer.is_none());
        assert!(config.printers.is_empty());
        assert_eq!(config.printer_timeout(), Duration::from_secs(5));
        assert_eq!(config.qr_size, 8);
        assert_eq!(config.document_template(), DocumentTemplate::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("WORK_DIR", "/tmp/receipts"),
            ("LOG_JSON", "true"),
            ("RECEIPT_BRAND", "Corner Cafe"),
            ("RECEIPT_TIMEZONE", "Europe/Madrid"),
            ("PAPER_WIDTH", "32"),
            ("DEFAULT_PRINTER", "tcp://192.168.1.50:9100"),
            (
                "PRINTERS",
                r#"[{"name":"Bar","url":"192.168.1.60"},{"name":"Spool","url":"file:///tmp/spool.bin"}]"#,
            ),
        ])
        .unwrap();

        assert_eq!(config.export_dir(), PathBuf::from("/tmp/receipts/exports"));
        assert!(config.log_json);
        assert_eq!(config.document_template().brand, "Corner Cafe");
        assert_eq!(config.timezone, chrono_tz::Europe::Madrid);
        assert_eq!(config.paper_width, 32);
        assert_eq!(
            config.default_printer_handle().and_then(|h| h.url),
            Some("tcp://192.168.1.50:9100".to_string())
        );
        assert_eq!(config.printers.len(), 2);
        assert_eq!(config.printers[0].name, "Bar");
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = config_from(&[("PAPER_WIDTH", "wide"), ("QR_SIZE", "")]).unwrap();
        assert_eq!(config.paper_width, 48);
        assert_eq!(config.qr_size, 8);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("RECEIPT_TIMEZONE", "Mars/Olympus")]),
            Err(ConfigError::InvalidTimezone(_))
        ));
        assert!(matches!(
            config_from(&[("PRINTERS", "not json")]),
            Err(ConfigError::InvalidPrinters(_))
        ));
        assert!(matches!(
            config_from(&[("PAPER_WIDTH", "0")]),
            Err(ConfigError::InvalidValue { name: "PAPER_WIDTH", .. })
        ));
    }
}
