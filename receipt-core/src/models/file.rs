//! Exported file handle

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Content type descriptor handed to the share flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Html,
}

impl ContentType {
    /// MIME type string
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}

/// A file produced by exporting a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    path: PathBuf,
    content_type: ContentType,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>, content_type: ContentType) -> Self {
        Self {
            path: path.into(),
            content_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// `file://` URI for the handle
    pub fn uri(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_handle_uri() {
        let handle = FileHandle::new("/tmp/receipt.html", ContentType::Html);
        assert_eq!(handle.uri(), "file:///tmp/receipt.html");
        assert_eq!(handle.content_type().mime(), "text/html");
        assert_eq!(ContentType::Html.to_string(), "text/html");
        assert_eq!(ContentType::Html.extension(), "html");
    }
}
