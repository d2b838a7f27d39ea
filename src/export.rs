use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::error::ConvertError;
use crate::reference;
use crate::render::{render_reference, Document};

/// Destination for rendered notes.
pub trait DocumentSink {
    /// Write `content` under `filename`, returning where it landed.
    fn write(&mut self, filename: &str, content: &str) -> io::Result<PathBuf>;
}

/// Writes each note as a file inside one directory.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Creates `dir` (and parents) when missing.
    pub fn create(dir: &Path, diag: &dyn Diagnostics) -> Result<Self, ConvertError> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| ConvertError::CreateOutputDir {
                path: dir.to_path_buf(),
                source,
            })?;
            diag.info(&format!("Created output directory: {}", dir.display()));
        }
        Ok(DirSink {
            dir: dir.to_path_buf(),
        })
    }
}

impl DocumentSink for DirSink {
    fn write(&mut self, filename: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.dir.join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    WrittenFallback,
    Failed,
}

/// Write under the title-derived name, retrying once under the fallback name.
pub fn write_with_fallback(
    sink: &mut dyn DocumentSink,
    doc: &Document,
    diag: &dyn Diagnostics,
) -> WriteOutcome {
    match sink.write(&doc.filename, &doc.content) {
        Ok(path) => {
            diag.info(&format!("Created file '{}'", path.display()));
            return WriteOutcome::Written;
        }
        Err(e) => diag.error(&format!("Error writing '{}': {}", doc.filename, e)),
    }

    diag.info(&format!(
        "Retrying with fallback filename '{}'",
        doc.fallback_filename
    ));
    match sink.write(&doc.fallback_filename, &doc.content) {
        Ok(path) => {
            diag.info(&format!("Created file '{}' (fallback)", path.display()));
            WriteOutcome::WrittenFallback
        }
        Err(e) => {
            diag.error(&format!(
                "Error writing fallback '{}': {}",
                doc.fallback_filename, e
            ));
            WriteOutcome::Failed
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub total: usize,
    pub written: usize,
    pub fallback: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl ConvertStats {
    pub fn print(&self) {
        println!(
            "Converted {} references: {} written, {} via fallback name, {} failed, {} skipped.",
            self.total, self.written, self.fallback, self.failed, self.skipped,
        );
    }
}

/// Read the export and return its top-level array.
pub fn load_references(path: &Path) -> Result<Vec<Value>, ConvertError> {
    let raw = fs::read_to_string(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| ConvertError::DecodeInput {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(ConvertError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Decode and render one array element; malformed elements are reported and yield `None`.
pub fn render_value(value: Value, index: usize, diag: &dyn Diagnostics) -> Option<Document> {
    match reference::from_value(value) {
        Ok(r) => Some(render_reference(&r, index, diag)),
        Err(e) => {
            diag.error(&format!("Skipping reference #{}: {}", index + 1, e));
            None
        }
    }
}

/// Convert every record in order. A failing record never stops the batch.
pub fn convert_all(
    values: Vec<Value>,
    sink: &mut dyn DocumentSink,
    diag: &dyn Diagnostics,
    pb: &ProgressBar,
) -> ConvertStats {
    let mut stats = ConvertStats {
        total: values.len(),
        ..Default::default()
    };

    for (i, value) in values.into_iter().enumerate() {
        match render_value(value, i, diag) {
            Some(doc) => match write_with_fallback(sink, &doc, diag) {
                WriteOutcome::Written => stats.written += 1,
                WriteOutcome::WrittenFallback => stats.fallback += 1,
                WriteOutcome::Failed => stats.failed += 1,
            },
            None => stats.skipped += 1,
        }
        pb.inc(1);
    }

    stats
}

// ── Tests ──
