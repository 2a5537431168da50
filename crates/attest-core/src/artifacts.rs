//! Location conventions for test-run artifacts on disk.
//!
//! A test run is identified by `(test_name, run_id)` and leaves two
//! artifact trees behind:
//!
//! - execution logs under `<log_root>/<test_name>/<run_id>/`, named
//!   `log_between_sender-user-rec-chat_manager_<...>.json`
//! - screenshots under `<proof_root>/<test_name>/<run_id>/screenshots/`

use std::path::{Path, PathBuf};

use crate::error::{AnalyzerError, Result};

/// Filename prefix of execution log files.
const LOG_FILE_PREFIX: &str = "log_between_sender-user-rec-chat_manager_";

/// Returns the most recently modified execution log for a test run.
///
/// Scans `<log_root>/<test_name>/<run_id>/` for files matching the
/// `log_between_sender-user-rec-chat_manager_*.json` convention and
/// picks the newest by modification time.
///
/// # Errors
///
/// Returns [`AnalyzerError::FileSystem`] when the run directory cannot
/// be read and [`AnalyzerError::NoLogFile`] when it holds no matching
/// file.
pub fn latest_log_file(log_root: &Path, test_name: &str, run_id: &str) -> Result<PathBuf> {
    let dir = log_root.join(test_name).join(run_id);
    let entries = std::fs::read_dir(&dir).map_err(|e| AnalyzerError::file_system(&dir, e))?;

    let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|e| AnalyzerError::file_system(&dir, e))?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(LOG_FILE_PREFIX) || !name.ends_with(".json") {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| AnalyzerError::file_system(&path, e))?;

        let newer = match &latest {
            Some((newest, _)) => modified > *newest,
            None => true,
        };
        if newer {
            latest = Some((modified, path));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or(AnalyzerError::NoLogFile { dir })
}

/// Returns the conventional screenshots directory for a test run.
pub fn screenshots_dir(proof_root: &Path, test_name: &str, run_id: &str) -> PathBuf {
    proof_root.join(test_name).join(run_id).join("screenshots")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screenshots_dir_follows_convention() {
        let dir = screenshots_dir(Path::new("opt/proofs"), "Search_test", "run_20250607_134626");
        assert_eq!(
            dir,
            Path::new("opt/proofs/Search_test/run_20250607_134626/screenshots")
        );
    }

    #[test]
    fn missing_run_directory_is_a_file_system_error() {
        let result = latest_log_file(Path::new("/nonexistent-root"), "t", "r");
        assert!(matches!(result, Err(AnalyzerError::FileSystem { .. })));
    }
}
