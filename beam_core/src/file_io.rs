//! # File I/O Module
//!
//! Result file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility when reading back
//!
//! ## File Format
//!
//! Run summaries are JSON: a metadata block (schema version, timestamp,
//! search configuration) followed by the winners of each section family in
//! display units.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::optimizer::optimize;
//! use beam_core::calculations::search::SearchConfig;
//! use beam_core::file_io::{load_run_json, save_run_json};
//! use beam_core::materials::builtin_materials;
//! use beam_core::report::run_summary;
//! use std::path::Path;
//!
//! let run = optimize(&builtin_materials(), &SearchConfig::default())?;
//! let path = Path::new("results/run.json");
//!
//! save_run_json(&run_summary(&run), path)?;
//! let summary = load_run_json(path)?;
//! println!("{} candidates", summary.meta.evaluated);
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::search::SearchConfig;
use crate::errors::{CalcError, CalcResult};
use crate::report::FamilyReport;

/// Current run summary schema version
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Provenance of a run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Schema version for compatibility checking
    pub schema_version: String,
    /// When the run finished
    pub generated_at: DateTime<Utc>,
    /// Search constants used for every material and family
    pub config: SearchConfig,
    /// Candidates evaluated across all searches
    pub evaluated: usize,
}

/// JSON summary of a full run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub meta: RunMetadata,
    pub families: Vec<FamilyReport>,
}

/// Write `contents` to `path` atomically.
///
/// The save process:
/// 1. Write to a temporary file (`<path>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over `path` (atomic on most filesystems)
pub fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Save a run summary as pretty-printed JSON with atomic write semantics.
pub fn save_run_json(summary: &RunSummary, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(summary)?;
    write_atomic(path, json.as_bytes())
}

/// Load a run summary, rejecting incompatible schema versions.
///
/// # Returns
///
/// * `Ok(RunSummary)` - Successfully loaded summary
/// * `Err(CalcError::InvalidInput)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_run_json(path: &Path) -> CalcResult<RunSummary> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let summary: RunSummary = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&summary.meta.schema_version)?;

    Ok(summary)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    let mismatch = || {
        CalcError::invalid_input(
            "schema_version",
            file_version,
            format!("Incompatible with schema version {}", SCHEMA_VERSION),
        )
    };

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor version may have breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
