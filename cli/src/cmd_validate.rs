//! `abikit validate` — parse every ABI JSON file under a directory.

use abikit_parser::batch;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Per-file outcome of a validation run.
#[derive(Debug, Default)]
struct Report {
    /// (path, element count)
    valid: Vec<(PathBuf, usize)>,
    /// (path, read or parse error)
    failed: Vec<(PathBuf, String)>,
}

pub fn run(dir: &Path) -> Result<()> {
    let paths: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
        .map(|e| e.into_path())
        .collect();

    if paths.is_empty() {
        anyhow::bail!("no ABI files found in '{}'", dir.display());
    }

    let report = validate_paths(paths);

    for (path, elements) in &report.valid {
        println!("  ✓ {} ({} elements)", path.display(), elements);
    }
    for (path, err) in &report.failed {
        eprintln!("  ✗ {}: {}", path.display(), err);
    }

    println!(
        "\n{} files valid, {} files with errors",
        report.valid.len(),
        report.failed.len()
    );
    if !report.failed.is_empty() {
        anyhow::bail!("{} ABI files failed validation", report.failed.len());
    }
    Ok(())
}

/// Read each file, then batch-parse whatever could be read. An unreadable
/// file is reported alongside parse failures and never stops the run.
fn validate_paths(paths: Vec<PathBuf>) -> Report {
    let mut report = Report::default();
    let mut readable = Vec::with_capacity(paths.len());
    let mut documents = Vec::with_capacity(paths.len());

    for path in paths {
        match std::fs::read_to_string(&path) {
            Ok(doc) => {
                readable.push(path);
                documents.push(doc);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read ABI file");
                report.failed.push((path, format!("read failed: {e}")));
            }
        }
    }
    debug!(files = documents.len(), "validating ABI files");

    let result = batch::parse_documents(&documents);
    for (idx, abi) in result.parsed {
        report.valid.push((readable[idx].clone(), abi.len()));
    }
    for (idx, err) in result.errors {
        report.failed.push((readable[idx].clone(), err.to_string()));
    }
    report
}
