//! Directory batch processing.
//!
//! Every PDF in an input directory is turned into `<stem>.json` in the output
//! directory. A document that fails still gets an output file describing the
//! failure; only an unusable output directory stops the batch.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::detect::has_pdf_extension;
use crate::error::Result;
use crate::extract::OutlineExtractor;
use crate::model::Outline;
use crate::render::{to_json, JsonFormat};

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Process documents in parallel (one document per task)
    pub parallel: bool,

    /// Layout of the written JSON files
    pub json_format: JsonFormat,
}

impl BatchOptions {
    /// Create batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process documents one after another.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            json_format: JsonFormat::Pretty,
        }
    }
}

/// Result for one input document.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub source: PathBuf,
    pub output: PathBuf,
    pub outline: Outline,

    /// Set when the output file could not be written
    pub write_error: Option<String>,
}

impl BatchEntry {
    /// Whether the document produced an outline without error and was written.
    pub fn is_success(&self) -> bool {
        !self.outline.is_error() && self.write_error.is_none()
    }
}

/// Outcome of a batch run, entries in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Number of documents processed.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of documents with a clean outline on disk.
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.is_success()).count()
    }

    /// Number of documents that failed or could not be written.
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }
}

/// List the PDF files of a directory, sorted by path.
///
/// Only regular files directly inside `dir` are considered; the extension
/// match is case-insensitive. A missing directory yields an empty list.
pub fn find_pdf_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot read input directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_pdf_extension(path))
        .collect();
    files.sort();
    files
}

/// Path of the JSON output written for `source`.
pub fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{}.json", stem))
}

/// Output paths for `sources`, one per source and pairwise distinct.
///
/// Stems are compared case-insensitively, so `a.pdf` and `a.PDF` do not
/// share `a.json` on any filesystem. The first source keeps `<stem>.json`;
/// later ones get `<stem>-2.json`, `<stem>-3.json` and so on.
pub fn output_paths_for(sources: &[PathBuf], output_dir: &Path) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    sources
        .iter()
        .map(|source| {
            let mut path = output_path_for(source, output_dir);
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mut n = 2;
            while !taken.insert(path.to_string_lossy().to_lowercase()) {
                path = output_dir.join(format!("{}-{}.json", stem, n));
                n += 1;
            }
            if n > 2 {
                log::warn!(
                    "{} shares its output name, writing {}",
                    source.display(),
                    path.display()
                );
            }
            path
        })
        .collect()
}

/// Process every PDF in `input_dir` and write the outlines to `output_dir`.
///
/// # Errors
/// Fails only when the output directory cannot be created.
pub fn process_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    extractor: &OutlineExtractor,
    input_dir: P,
    output_dir: Q,
    options: &BatchOptions,
) -> Result<BatchReport> {
    process_directory_with(extractor, input_dir, output_dir, options, |_| {})
}

/// Like [`process_directory`], calling `on_entry` as each document finishes.
///
/// In parallel mode `on_entry` is called from worker threads in completion
/// order; the returned report is still in input order.
pub fn process_directory_with<P, Q, F>(
    extractor: &OutlineExtractor,
    input_dir: P,
    output_dir: Q,
    options: &BatchOptions,
    on_entry: F,
) -> Result<BatchReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: Fn(&BatchEntry) + Sync,
{
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let files = find_pdf_files(input_dir.as_ref());
    log::info!(
        "Processing {} PDF file(s) from {}",
        files.len(),
        input_dir.as_ref().display()
    );

    let outputs = output_paths_for(&files, output_dir);
    let process = |(source, output): (&PathBuf, &PathBuf)| {
        let entry = process_to(extractor, source, output.clone(), options.json_format);
        on_entry(&entry);
        entry
    };

    let entries: Vec<BatchEntry> = if options.parallel {
        files.par_iter().zip(outputs.par_iter()).map(process).collect()
    } else {
        files.iter().zip(outputs.iter()).map(process).collect()
    };

    let report = BatchReport { entries };
    log::info!(
        "Batch finished: {} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );
    Ok(report)
}

/// Extract one document and write its JSON.
pub fn process_file(
    extractor: &OutlineExtractor,
    source: &Path,
    output_dir: &Path,
    format: JsonFormat,
) -> BatchEntry {
    process_to(extractor, source, output_path_for(source, output_dir), format)
}

fn process_to(
    extractor: &OutlineExtractor,
    source: &Path,
    output: PathBuf,
    format: JsonFormat,
) -> BatchEntry {
    let outline = extractor.extract(source);
    let write_error = match write_outline(&outline, &output, format) {
        Ok(()) => None,
        Err(e) => {
            log::warn!("Cannot write {}: {}", output.display(), e);
            Some(e.to_string())
        }
    };

    BatchEntry {
        source: source.to_path_buf(),
        output,
        outline,
        write_error,
    }
}

fn write_outline(outline: &Outline, path: &Path, format: JsonFormat) -> Result<()> {
    let json = to_json(outline, format)?;
    fs::write(path, json)?;
    Ok(())
}
