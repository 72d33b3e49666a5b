//! Printer handle and selection

use serde::{Deserialize, Serialize};

/// A printer known to the printing side
///
/// `url` is an address understood by the printing service
/// (`tcp://host:port`, `host:port` or `file:///path`). `None` means the
/// platform default target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterHandle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PrinterHandle {
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }
}

impl std::fmt::Display for PrinterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{} ({})", self.name, url),
            None => f.write_str(&self.name),
        }
    }
}

/// Result of a user-driven printer selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PrinterSelection {
    Selected(PrinterHandle),
    #[default]
    None,
}

impl PrinterSelection {
    /// The selected handle, if any
    pub fn handle(&self) -> Option<&PrinterHandle> {
        match self {
            Self::Selected(handle) => Some(handle),
            Self::None => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

impl From<Option<PrinterHandle>> for PrinterSelection {
    fn from(value: Option<PrinterHandle>) -> Self {
        value.map_or(Self::None, Self::Selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_option() {
        let handle = PrinterHandle::new("Front desk", Some("tcp://10.0.0.5:9100".to_string()));
        let selection = PrinterSelection::from(Some(handle.clone()));
        assert_eq!(selection.handle(), Some(&handle));
        assert!(selection.is_selected());

        assert_eq!(PrinterSelection::from(None), PrinterSelection::None);
        assert_eq!(PrinterSelection::default().handle(), None);
    }

    #[test]
    fn test_handle_url_is_optional_in_json() {
        let handle: PrinterHandle = serde_json::from_str(r#"{"name":"Default"}"#).unwrap();
        assert_eq!(handle.url, None);
        assert_eq!(handle.to_string(), "Default");
    }
}
