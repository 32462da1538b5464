//! Export destinations for generated address lists

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use super::serializer::write_document;
use crate::error::{PatternEmailError, Result};
use crate::pattern::Combinator;
use crate::types::EXPORT_FILE_NAME;

/// Summary of a finished export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    /// File path, or `-` for stdout
    pub destination: String,
    pub addresses: u64,
    pub bytes: u64,
    pub generated_at: DateTime<Utc>,
}

/// Trait for export destinations
pub trait Exporter {
    /// Write every address produced by `combinator` under `domain`
    fn export(&self, combinator: Combinator<'_>, domain: &str) -> Result<ExportReport>;

    /// Human readable destination
    fn destination(&self) -> String;
}

/// Writes the document to a file
#[derive(Debug, Clone)]
pub struct FileExporter {
    path: PathBuf,
    show_progress: bool,
}

impl FileExporter {
    /// Export to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            show_progress: false,
        }
    }

    /// Show a progress bar on stderr while writing
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: impl std::fmt::Display) -> PatternEmailError {
        PatternEmailError::io(err.to_string(), Some(self.path.to_string_lossy().to_string()))
    }

    fn progress_bar(&self, total: u128) -> Result<ProgressBar> {
        if !self.show_progress {
            return Ok(ProgressBar::hidden());
        }

        let pb = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .map_err(|e| PatternEmailError::internal(e.to_string()))?
                .progress_chars("#>-"),
        );
        Ok(pb)
    }
}

impl Default for FileExporter {
    fn default() -> Self {
        Self::new(EXPORT_FILE_NAME)
    }
}

impl Exporter for FileExporter {
    fn export(&self, combinator: Combinator<'_>, domain: &str) -> Result<ExportReport> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                PatternEmailError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = CountingWriter::new(BufWriter::new(file));

        let pb = self.progress_bar(combinator.total())?;
        let addresses = write_document(pb.wrap_iter(combinator), domain, &mut writer)
            .map_err(|e| self.io_error(e))?;
        pb.finish_and_clear();

        tracing::info!(
            path = %self.path.display(),
            addresses,
            bytes = writer.bytes,
            "Export finished"
        );

        Ok(ExportReport {
            destination: self.destination(),
            addresses,
            bytes: writer.bytes,
            generated_at: Utc::now(),
        })
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes the document to standard output, byte for byte as a file would hold it
#[derive(Debug, Clone, Default)]
pub struct StdoutExporter;

impl Exporter for StdoutExporter {
    fn export(&self, combinator: Combinator<'_>, domain: &str) -> Result<ExportReport> {
        let stdout = std::io::stdout();
        let mut writer = CountingWriter::new(BufWriter::new(stdout.lock()));
        let addresses = write_document(combinator, domain, &mut writer)?;
        let bytes = writer.bytes;

        tracing::info!(addresses, bytes, "Export to stdout finished");

        Ok(ExportReport {
            destination: self.destination(),
            addresses,
            bytes,
            generated_at: Utc::now(),
        })
    }

    fn destination(&self) -> String {
        "-".to_string()
    }
}

/// Counts bytes passed through to the inner writer
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pattern, PatternSet, RangeMode};

    #[test]
    fn test_file_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join(EXPORT_FILE_NAME);
        let patterns = PatternSet::single(Pattern::new(3, 1, 4).with_prefix("u"));

        let exporter = FileExporter::new(&path);
        let report = exporter
            .export(Combinator::new(&patterns, RangeMode::Legacy), "x.com")
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "u000@x.com\nu001@x.com\nu002@x.com\nu003@x.com");
        assert_eq!(report.addresses, 4);
        assert_eq!(report.bytes, content.len() as u64);
        assert_eq!(report.destination, path.display().to_string());
    }

    #[test]
    fn test_file_export_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        let patterns = PatternSet::single(Pattern::new(3, 1, 0));

        let report = FileExporter::new(&path)
            .export(Combinator::new(&patterns, RangeMode::Legacy), "x.com")
            .unwrap();

        assert_eq!(report.addresses, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(FileExporter::default().path(), Path::new(EXPORT_FILE_NAME));
    }
}
