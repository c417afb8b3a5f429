//! Report directory persistence: write/read/verify a [`ComparisonReport`].
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json                  -- full report, timings included
//!   report_digest_basis.json     -- canonical JSON, normative projection only
//!   report_digest.txt            -- ASCII digest string (e.g. "sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Extra file → error
//! - Digest basis that does not match `report.json` → error
//! - Stored digest that does not match the basis → error

use std::collections::BTreeSet;
use std::path::Path;

use pathlab_kernel::proof::hash::{canonical_hash, ContentHash};
use pathlab_kernel::proof::hash_domain::HashDomain;

use crate::error::HarnessError;
use crate::report::ComparisonReport;

const REPORT_FILENAME: &str = "report.json";
const DIGEST_BASIS_FILENAME: &str = "report_digest_basis.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

const REPORT_FILENAMES: &[&str] = &[REPORT_FILENAME, DIGEST_BASIS_FILENAME, DIGEST_FILENAME];

/// Error writing or reading a report directory.
#[derive(Debug)]
pub enum ReportDirError {
    /// I/O error.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// A file outside the layout exists in the directory.
    ExtraFile { name: String },
    /// `report.json` is not valid JSON or not a valid report.
    Report(HarnessError),
    /// `report_digest_basis.json` is not the basis of `report.json`.
    BasisMismatch,
    /// `report_digest.txt` does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportDirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ExtraFile { name } => write!(f, "unexpected extra file: {name}"),
            Self::Report(e) => write!(f, "invalid report: {e}"),
            Self::BasisMismatch => write!(f, "digest basis does not match report.json"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored={stored}, recomputed={recomputed}"
                )
            }
        }
    }
}

impl std::error::Error for ReportDirError {}

/// Write `report` to `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`ReportDirError`] on I/O failure or canonical JSON error.
pub fn write_report_dir(report: &ComparisonReport, dir: &Path) -> Result<(), ReportDirError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    let full = serde_json::to_vec_pretty(&report.to_json_value()).map_err(|e| {
        ReportDirError::Io {
            detail: format!("serialize report: {e}"),
        }
    })?;
    let basis = report.digest_basis_bytes().map_err(ReportDirError::Report)?;

    write_atomic(dir.join(REPORT_FILENAME), &full)?;
    write_atomic(dir.join(DIGEST_BASIS_FILENAME), &basis)?;
    write_atomic(dir.join(DIGEST_FILENAME), report.digest.as_str().as_bytes())?;
    Ok(())
}

/// Read a report directory, fail-closed.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any validation failure.
pub fn read_report_dir(dir: &Path) -> Result<ComparisonReport, ReportDirError> {
    let report_bytes = read_required(dir, REPORT_FILENAME)?;
    let basis_bytes = read_required(dir, DIGEST_BASIS_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    for name in list_files(dir)? {
        if !REPORT_FILENAMES.contains(&name.as_str()) {
            return Err(ReportDirError::ExtraFile { name });
        }
    }

    let recomputed = canonical_hash(HashDomain::ComparisonReport, &basis_bytes);
    let stored = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    if recomputed.as_str() != stored {
        return Err(ReportDirError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }

    let value: serde_json::Value =
        serde_json::from_slice(&report_bytes).map_err(|e| {
            ReportDirError::Report(HarnessError::MalformedReport {
                detail: format!("{e}"),
            })
        })?;
    let report = ComparisonReport::from_json_value(&value).map_err(ReportDirError::Report)?;
    if report.digest_basis_bytes().map_err(ReportDirError::Report)? != basis_bytes {
        return Err(ReportDirError::BasisMismatch);
    }
    Ok(report)
}

/// Read and check a report directory, returning its digest.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any validation failure.
pub fn verify_report_dir(dir: &Path) -> Result<ContentHash, ReportDirError> {
    read_report_dir(dir).map(|report| report.digest)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Write bytes to a path via temp file + rename. On failure the temp file
/// is removed.
fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<(), ReportDirError> {
    let path = path.as_ref();
    let dir = path.parent().ok_or_else(|| ReportDirError::Io {
        detail: "no parent directory".into(),
    })?;

    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    let written = std::fs::write(&temp_path, content)
        .map_err(|e| format!("write {}: {e}", temp_path.display()))
        .and_then(|()| {
            std::fs::rename(&temp_path, path).map_err(|e| {
                format!("rename {} → {}: {e}", temp_path.display(), path.display())
            })
        });
    if let Err(detail) = written {
        let _ = std::fs::remove_file(&temp_path);
        return Err(ReportDirError::Io { detail });
    }
    Ok(())
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir`, skipping temp files left by `write_atomic`.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirError> {
    let io = |e: std::io::Error| ReportDirError::Io {
        detail: format!("read_dir: {e}"),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if !entry.file_type().map_err(io)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with(".tmp_") {
                files.insert(name.to_string());
            }
        }
    }
    Ok(files)
}
