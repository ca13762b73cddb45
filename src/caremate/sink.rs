//! Delivery of export output: the system clipboard and downloaded documents.
//!
//! Formatters never call into this module. The session hands their output to an
//! [`ExportSink`] through an [`Exporter`], which tracks the [`ExportStatus`] and turns
//! failures into logged warnings instead of errors. Nothing is retried.

use crate::error::{CareMateError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Where export output can be delivered.
pub trait ExportSink {
    fn copy_text(&mut self, text: &str) -> Result<()>;

    /// Saves `content` under `filename` and returns the written path.
    fn download_document(&mut self, content: &str, filename: &str) -> Result<PathBuf>;
}

/// Clipboard through the platform's copy tool, downloads into a directory.
#[derive(Debug, Clone)]
pub struct SystemSink {
    download_dir: PathBuf,
}

impl SystemSink {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }
}

impl ExportSink for SystemSink {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }

    fn download_document(&mut self, content: &str, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.download_dir)?;
        let path = self.download_dir.join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }
}

/// Copies text to the system clipboard.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_into("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_into("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_into("xsel", &["--clipboard", "--input"], text))
            .map_err(|e| CareMateError::Sink(format!("{}. Install xclip or xsel.", e)))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_into("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(CareMateError::Sink(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CareMateError::Sink(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CareMateError::Sink(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| CareMateError::Sink(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CareMateError::Sink(format!("{} exited with error", program)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    Copying,
    Copied,
    Generating,
}

/// Drives a sink and tracks the export status.
#[derive(Debug)]
pub struct Exporter<K: ExportSink> {
    sink: K,
    status: ExportStatus,
}

impl<K: ExportSink> Exporter<K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            status: ExportStatus::Idle,
        }
    }

    pub fn status(&self) -> ExportStatus {
        self.status
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Copies text. On success the status stays `Copied` until the next export; on
    /// failure a warning is logged and the status returns to `Idle`.
    pub fn copy(&mut self, text: &str) -> bool {
        self.status = ExportStatus::Copying;
        match self.sink.copy_text(text) {
            Ok(()) => {
                debug!(bytes = text.len(), "copied export to clipboard");
                self.status = ExportStatus::Copied;
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to copy export");
                self.status = ExportStatus::Idle;
                false
            }
        }
    }

    /// Writes a document. The status is `Generating` while the sink works and `Idle`
    /// afterwards, whatever the outcome.
    pub fn download(&mut self, content: &str, filename: &str) -> Option<PathBuf> {
        self.status = ExportStatus::Generating;
        let outcome = self.sink.download_document(content, filename);
        self.status = ExportStatus::Idle;
        match outcome {
            Ok(path) => {
                debug!(path = %path.display(), "downloaded export");
                Some(path)
            }
            Err(e) => {
                warn!(error = %e, filename, "failed to generate document");
                None
            }
        }
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Records deliveries in memory and can be told to fail.
    #[derive(Debug, Default)]
    pub struct MemorySink {
        pub copied: Vec<String>,
        pub downloads: Vec<(String, String)>,
        pub fail: bool,
    }

    impl MemorySink {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    impl ExportSink for MemorySink {
        fn copy_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(CareMateError::Sink("clipboard unavailable".into()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }

        fn download_document(&mut self, content: &str, filename: &str) -> Result<PathBuf> {
            if self.fail {
                return Err(CareMateError::Sink("disk full".into()));
            }
            self.downloads
                .push((filename.to_string(), content.to_string()));
            Ok(PathBuf::from(filename))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::MemorySink;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn successful_copy_ends_copied() {
        let mut exporter = Exporter::new(MemorySink::default());
        assert_eq!(exporter.status(), ExportStatus::Idle);
        assert!(exporter.copy("hello"));
        assert_eq!(exporter.status(), ExportStatus::Copied);
        assert_eq!(exporter.sink().copied, vec!["hello".to_string()]);
    }

    #[test]
    fn failures_return_to_idle() {
        let mut exporter = Exporter::new(MemorySink::failing());
        assert!(!exporter.copy("hello"));
        assert_eq!(exporter.status(), ExportStatus::Idle);
        assert!(exporter.download("<html>", "guide.html").is_none());
        assert_eq!(exporter.status(), ExportStatus::Idle);
    }

    #[test]
    fn download_ends_idle() {
        let mut exporter = Exporter::new(MemorySink::default());
        assert!(exporter.copy("x"));
        let path = exporter.download("<html>", "guide.html").unwrap();
        assert_eq!(path, PathBuf::from("guide.html"));
        assert_eq!(exporter.status(), ExportStatus::Idle);
    }

    #[test]
    fn system_sink_writes_into_download_dir() {
        let dir = TempDir::new().unwrap();
        let mut sink = SystemSink::new(dir.path().join("downloads"));
        let path = sink.download_document("<p>hi</p>", "guide.html").unwrap();
        assert_eq!(path, dir.path().join("downloads").join("guide.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<p>hi</p>");
    }
}
