//! Persisted screenshot-analysis cache.
//!
//! Vision calls are the slow, quota-limited part of a run, so their
//! results are persisted as a flat JSON array of
//! [`AnalysisRecord`] values in a file named
//! `video_analysis_<test_name>_<run_id>.json` under the cache directory.
//!
//! The contract is trust-if-present: when the file exists it is loaded
//! verbatim, with no invalidation policy beyond file existence; age and
//! completeness are not checked. A file that exists but cannot be read
//! or parsed is an explicit error, kept separate from the absent case so
//! the caller can decide whether to degrade to a fresh analysis.

use std::path::{Path, PathBuf};

use jiff::Timestamp;

use crate::{
    error::{AnalyzerError, Result},
    models::AnalysisRecord,
};

/// Returns the cache filename for a test run.
pub fn analysis_file_name(test_name: &str, run_id: &str) -> String {
    format!("video_analysis_{test_name}_{run_id}.json")
}

/// Loads the cached analysis for a test run, if one exists.
///
/// Returns `Ok(None)` when no cache file exists for `(test_name,
/// run_id)`. An existing file is trusted verbatim.
///
/// # Errors
///
/// Returns [`AnalyzerError::FileSystem`] when an existing file cannot be
/// read and [`AnalyzerError::Serialization`] when its content is not a
/// valid record array.
pub fn load(
    cache_dir: &Path,
    test_name: &str,
    run_id: &str,
) -> Result<Option<Vec<AnalysisRecord>>> {
    let path = cache_dir.join(analysis_file_name(test_name, run_id));
    if !path.exists() {
        return Ok(None);
    }

    if let Ok(modified) = path.metadata().and_then(|m| m.modified()) {
        log::info!(
            "Found existing analysis file {} (last modified {})",
            path.display(),
            Timestamp::try_from(modified)
                .map(|t| t.to_string())
                .unwrap_or_else(|_| "unknown".to_string())
        );
    }

    let text = std::fs::read_to_string(&path).map_err(|e| AnalyzerError::file_system(&path, e))?;
    let records: Vec<AnalysisRecord> = serde_json::from_str(&text)?;
    log::info!("Loaded cached analysis with {} screenshots", records.len());
    Ok(Some(records))
}

/// Saves an analysis to the cache, creating the directory as needed.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`AnalyzerError::FileSystem`] when the directory or file
/// cannot be written.
pub fn save(
    cache_dir: &Path,
    test_name: &str,
    run_id: &str,
    records: &[AnalysisRecord],
) -> Result<PathBuf> {
    std::fs::create_dir_all(cache_dir).map_err(|e| AnalyzerError::file_system(cache_dir, e))?;

    let path = cache_dir.join(analysis_file_name(test_name, run_id));
    let text = serde_json::to_string_pretty(records)?;
    std::fs::write(&path, text).map_err(|e| AnalyzerError::file_system(&path, e))?;

    log::info!("Analysis saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_records() -> Vec<AnalysisRecord> {
        vec![
            AnalysisRecord {
                screenshot: "click_start_1.png".to_string(),
                analysis: "1. Current State Description: login page".to_string(),
            },
            AnalysisRecord {
                screenshot: "click_end_2.png".to_string(),
                analysis: "1. Current State Description: home page".to_string(),
            },
        ]
    }

    #[test]
    fn file_name_follows_convention() {
        assert_eq!(
            analysis_file_name("Search_test", "run_20250607_134626"),
            "video_analysis_Search_test_run_20250607_134626.json"
        );
    }

    #[test]
    fn absent_cache_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load(dir.path(), "t", "r").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let records = sample_records();

        let written = save(dir.path(), "t", "r", &records).unwrap();
        assert!(written.ends_with("video_analysis_t_r.json"));

        let loaded = load(dir.path(), "t", "r").unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn corrupt_cache_is_an_error_not_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(analysis_file_name("t", "r"));
        std::fs::write(&path, "{ not an array").unwrap();

        let result = load(dir.path(), "t", "r");
        assert!(matches!(result, Err(AnalyzerError::Serialization { .. })));
    }
}
