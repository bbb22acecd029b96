//! Screening criteria configuration.
//!
//! Layers, lowest first: built-in defaults, a JSON criteria file, then the
//! threshold flags. Interactive answers are applied on top by the prompt
//! flow. The criteria file may name any subset of fields:
//!
//! ```json
//! { "min_dividend_yield": 2.0, "max_pe_ratio": 22 }
//! ```

use crate::error::{CliError, Result};
use bluechip::screen::{ScreeningCriteria, SectorClass};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Get the default criteria file path.
///
/// Uses the platform config directory:
/// - Linux: `~/.config/bluechip/criteria.json`
/// - macOS: `~/Library/Application Support/bluechip/criteria.json`
/// - Windows: `%APPDATA%\bluechip\criteria.json`
pub(crate) fn default_criteria_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bluechip").join("criteria.json"))
}

/// Read criteria from a JSON file. Absent fields keep their defaults.
pub(crate) fn read_criteria(path: &Path) -> Result<ScreeningCriteria> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::CriteriaRead {
        path: path.to_path_buf(),
        source,
    })?;
    let criteria = serde_json::from_str(&contents).map_err(|source| CliError::CriteriaParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded criteria file");
    Ok(criteria)
}

/// Criteria from `explicit`, else from the default path when that file
/// exists, else the built-in defaults.
pub(crate) fn load_criteria(explicit: Option<&Path>) -> Result<ScreeningCriteria> {
    if let Some(path) = explicit {
        return read_criteria(path);
    }
    match default_criteria_path().filter(|path| path.is_file()) {
        Some(path) => read_criteria(&path),
        None => {
            debug!("no criteria file, using defaults");
            Ok(ScreeningCriteria::default())
        }
    }
}

/// Threshold overrides from flags or prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct CriteriaOverrides {
    pub(crate) min_yield: Option<f64>,
    pub(crate) max_pe: Option<f64>,
    pub(crate) min_roic: Option<f64>,
}

impl CriteriaOverrides {
    pub(crate) fn apply(&self, criteria: &mut ScreeningCriteria) {
        if let Some(v) = self.min_yield {
            criteria.min_dividend_yield = v;
        }
        if let Some(v) = self.max_pe {
            criteria.max_pe_ratio = v;
        }
        if let Some(v) = self.min_roic {
            criteria.min_roic = v;
        }
    }
}

/// Parse a `SYMBOL=SECTOR` override.
pub(crate) fn parse_sector_override(arg: &str) -> Result<(String, SectorClass)> {
    let invalid = || CliError::config(format!("invalid --sector '{arg}', expected SYMBOL=SECTOR"));

    let (symbol, name) = arg.split_once('=').ok_or_else(invalid)?;
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(invalid());
    }
    let class = SectorClass::from_name(name)
        .ok_or_else(|| CliError::config(format!("unknown sector '{}' for {symbol}", name.trim())))?;
    Ok((symbol, class))
}

/// Collect `--reit` and `--sector` overrides. Later entries win.
pub(crate) fn sector_overrides(
    reits: &[String],
    sectors: &[String],
) -> Result<Vec<(String, SectorClass)>> {
    let mut overrides: Vec<_> = reits
        .iter()
        .map(|s| (s.trim().to_uppercase(), SectorClass::Reit))
        .collect();
    for arg in sectors {
        overrides.push(parse_sector_override(arg)?);
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("criteria.json");
        std::fs::write(&path, r#"{"min_dividend_yield": 2.5, "max_pe_ratio": 20}"#).unwrap();

        let criteria = load_criteria(Some(&path)).unwrap();
        assert_eq!(criteria.min_dividend_yield, 2.5);
        assert_eq!(criteria.max_pe_ratio, 20.0);
        assert_eq!(criteria.min_roic, ScreeningCriteria::default().min_roic);
    }

    #[test]
    fn test_bad_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("criteria.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(read_criteria(&path), Err(CliError::CriteriaParse { .. })));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_criteria(Some(&dir.path().join("nope.json")));
        assert!(matches!(result, Err(CliError::CriteriaRead { .. })));
    }

    #[test]
    fn test_overrides_apply_on_top() {
        let mut criteria = ScreeningCriteria::default();
        CriteriaOverrides {
            min_yield: Some(3.0),
            max_pe: None,
            min_roic: Some(10.0),
        }
        .apply(&mut criteria);
        assert_eq!(criteria.min_dividend_yield, 3.0);
        assert_eq!(criteria.max_pe_ratio, 25.0);
        assert_eq!(criteria.min_roic, 10.0);
    }

    #[rstest]
    #[case("o=REIT", "O", SectorClass::Reit)]
    #[case("NEE = Utilities", "NEE", SectorClass::Utility)]
    #[case("wpc=real estate", "WPC", SectorClass::Reit)]
    #[case("KO=general", "KO", SectorClass::General)]
    #[case("XOM=Energy", "XOM", SectorClass::General)]
    fn test_parse_sector_override(
        #[case] arg: &str,
        #[case] symbol: &str,
        #[case] class: SectorClass,
    ) {
        assert_eq!(parse_sector_override(arg).unwrap(), (symbol.to_string(), class));
    }

    #[rstest]
    #[case("REIT")]
    #[case("=REIT")]
    #[case("KO=spaceships")]
    fn test_parse_sector_override_rejects(#[case] arg: &str) {
        assert!(matches!(
            parse_sector_override(arg),
            Err(CliError::Screen(bluechip::ScreenError::Configuration(_)))
        ));
    }

    #[test]
    fn test_sector_overrides_combines_flags() {
        let overrides =
            sector_overrides(&["o".to_string()], &["NEE=utility".to_string()]).unwrap();
        assert_eq!(
            overrides,
            [
                ("O".to_string(), SectorClass::Reit),
                ("NEE".to_string(), SectorClass::Utility)
            ]
        );
    }
}
