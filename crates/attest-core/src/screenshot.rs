//! Screenshot filename validation and directory listing.
//!
//! Screenshot filenames follow the shape
//! `<action>_<start|end>_<timestamp>.png`, for example
//! `click_start_1749284255204444500.png`. Two independent stages handle
//! them:
//!
//! 1. [`list_screenshots`] enumerates a run directory with a loose
//!    substring pre-filter (`_start_` / `_end_`), so partially-invalid
//!    names still reach the analysis stage.
//! 2. [`parse_screenshot_name`] applies the strict anchored pattern at
//!    analysis time and rejects non-conforming names wholesale.
//!
//! The split is deliberate: downstream consumers observe invalid names
//! as per-file [`AnalyzerError::InvalidFilename`] values and decide for
//! themselves whether one bad filename excludes a file or aborts the
//! whole pass.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{AnalyzerError, Result},
    models::{Phase, ScreenshotRef},
};

/// Anchored filename pattern: action, phase, timestamp.
static FILENAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)_(start|end)_(\d+)\.png$").expect("valid filename pattern"));

/// Parses a screenshot filename into its reference triple.
///
/// The pattern is anchored at both ends: any prefix or suffix outside
/// the exact `<word-chars>_<start|end>_<digits>.png` shape rejects the
/// whole name, never a partial match. The function is pure and
/// idempotent; nothing is cached between calls.
///
/// # Errors
///
/// Returns [`AnalyzerError::InvalidFilename`] naming the offending file
/// when the pattern does not match.
pub fn parse_screenshot_name(filename: &str) -> Result<ScreenshotRef> {
    let captures =
        FILENAME_PATTERN
            .captures(filename)
            .ok_or_else(|| AnalyzerError::InvalidFilename {
                filename: filename.to_string(),
            })?;

    let phase = Phase::from_str(&captures[2]).map_err(|_| AnalyzerError::InvalidFilename {
        filename: filename.to_string(),
    })?;

    Ok(ScreenshotRef {
        action_type: captures[1].to_string(),
        phase,
        timestamp: captures[3].to_string(),
    })
}

/// Lists candidate screenshots under a run directory, lexically sorted.
///
/// Applies only the loose pre-filter: `.png` entries whose name contains
/// `_start_` or `_end_`. Names that pass this filter but fail the strict
/// pattern are still listed; rejection happens later, per file, in
/// [`parse_screenshot_name`].
///
/// The lexical sort stands in for chronological order, which is only
/// correct while timestamps are encoded as order-preserving digit
/// strings. That is an assumption of the capture convention, not
/// something validated here.
///
/// # Errors
///
/// Returns [`AnalyzerError::FileSystem`] when the directory cannot be
/// read.
pub fn list_screenshots(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| AnalyzerError::file_system(dir, e))?;

    let mut screenshots = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AnalyzerError::file_system(dir, e))?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".png") {
            continue;
        }
        if name.contains("_start_") || name.contains("_end_") {
            screenshots.push(path);
        }
    }

    screenshots.sort();
    log::debug!(
        "Found {} candidate screenshots in {}",
        screenshots.len(),
        dir.display()
    );
    Ok(screenshots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_filename() {
        let parsed = parse_screenshot_name("click_start_1749284255204444500.png").unwrap();
        assert_eq!(parsed.action_type, "click");
        assert_eq!(parsed.phase, Phase::Start);
        assert_eq!(parsed.timestamp, "1749284255204444500");
    }

    #[test]
    fn parses_end_phase() {
        let parsed = parse_screenshot_name("type_end_1749284260000000000.png").unwrap();
        assert_eq!(parsed.action_type, "type");
        assert_eq!(parsed.phase, Phase::End);
    }

    #[test]
    fn rejects_nonconforming_name() {
        let result = parse_screenshot_name("weirdname.png");
        assert!(matches!(
            result,
            Err(AnalyzerError::InvalidFilename { filename }) if filename == "weirdname.png"
        ));
    }

    #[test]
    fn rejects_non_digit_timestamp() {
        assert!(parse_screenshot_name("foo_start_bar.png").is_err());
    }

    #[test]
    fn rejects_unknown_phase() {
        assert!(parse_screenshot_name("click_during_1749284255.png").is_err());
    }

    #[test]
    fn rejects_trailing_suffix() {
        // Anchored at both ends: no partial matches.
        assert!(parse_screenshot_name("click_start_123.png.bak").is_err());
        assert!(parse_screenshot_name("x click_start_123.png").is_err());
    }

    #[test]
    fn is_idempotent() {
        let name = "scroll_end_1749284270000000000.png";
        let first = parse_screenshot_name(name).unwrap();
        let second = parse_screenshot_name(name).unwrap();
        assert_eq!(first, second);
    }
}
