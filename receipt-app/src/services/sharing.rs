//! Share exported files through a desktop opener
//!
//! Runs `xdg-open` (or `open` on macOS, or whatever `SHARE_COMMAND` names)
//! with the file path. The opener decides which application receives it.

use std::process::Stdio;

use receipt_core::{ContentType, FileHandle};
use tokio::process::Command;
use tracing::{info, instrument, warn};

use super::SharingService;
use crate::core::{SharingFailure, SharingResult};

#[derive(Debug, Clone)]
pub struct CommandSharer {
    program: String,
    args: Vec<String>,
}

impl CommandSharer {
    /// Parse a command line like `"xdg-open"` or `"gio open"`
    ///
    /// The file path is appended as the last argument.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        Self {
            program,
            args: parts.collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SharingService for CommandSharer {
    #[instrument(skip(self, handle), fields(program = %self.program, path = %handle.path().display()))]
    async fn share(&self, handle: &FileHandle, content_type: ContentType) -> SharingResult<()> {
        if self.program.is_empty() {
            return Err(SharingFailure::Failed("no share command configured".into()));
        }

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(handle.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(SharingFailure::Launch)?;

        if !status.success() {
            warn!(%status, "Share command did not complete");
            return Err(SharingFailure::Failed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        info!(content_type = %content_type, "File shared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let sharer = CommandSharer::new("gio open");
        assert_eq!(sharer.program(), "gio");
        assert_eq!(sharer.args, vec!["open".to_string()]);

        let sharer = CommandSharer::new("  ");
        assert_eq!(sharer.program(), "");
    }

    #[tokio::test]
    async fn test_empty_command_fails() {
        let sharer = CommandSharer::new("");
        let handle = FileHandle::new("/tmp/receipt.html", ContentType::Html);

        assert!(matches!(
            sharer.share(&handle, ContentType::Html).await,
            Err(SharingFailure::Failed(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_program_fails_to_launch() {
        let sharer = CommandSharer::new("definitely-not-a-real-opener-4821");
        let handle = FileHandle::new("/tmp/receipt.html", ContentType::Html);

        assert!(matches!(
            sharer.share(&handle, ContentType::Html).await,
            Err(SharingFailure::Launch(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_status_maps_to_result() {
        let handle = FileHandle::new("/tmp/receipt.html", ContentType::Html);

        assert!(CommandSharer::new("true").share(&handle, ContentType::Html).await.is_ok());
        assert!(matches!(
            CommandSharer::new("false").share(&handle, ContentType::Html).await,
            Err(SharingFailure::Failed(_))
        ));
    }
}
