//! Layered settings: built-in defaults, an optional file, then environment.
//!
//! ```toml
//! export_path = "rounds.csv"
//! theme = "dark"
//!
//! [thresholds]
//! single_low = 1.2
//! ```
//!
//! Environment overrides use the `RISEWATCH_` prefix with `__` for nesting,
//! e.g. `RISEWATCH_THRESHOLDS__TIER_HIGH=3.5`.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::data::Thresholds;
use crate::error::Result;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::ui::ThemeChoice;

/// Runtime settings for a session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the CSV export is written.
    pub export_path: PathBuf,
    /// Colour theme selection.
    pub theme: ThemeChoice,
    /// Cutoffs for tiers, row styling and alerts.
    pub thresholds: Thresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            theme: ThemeChoice::Auto,
            thresholds: Thresholds::default(),
        }
    }
}

impl Settings {
    /// Load settings, reading `path` if given, and validate the thresholds.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix("RISEWATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.thresholds.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn defaults_use_fixed_constants() {
        let settings = Settings::default();
        assert_eq!(settings.export_path, PathBuf::from("historico_aviator.csv"));
        assert_eq!(settings.theme, ThemeChoice::Auto);
        assert_eq!(settings.thresholds.tier_high, 3.0);
        assert_eq!(settings.thresholds.tier_mid, 2.0);
        assert_eq!(settings.thresholds.row, 2.0);
        assert_eq!(settings.thresholds.consecutive_low, 2.0);
        assert_eq!(settings.thresholds.single_low, 1.5);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = toml_file(
            r#"
            export_path = "rounds.csv"
            theme = "light"

            [thresholds]
            single_low = 1.2
            "#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.export_path, PathBuf::from("rounds.csv"));
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.thresholds.single_low, 1.2);
        // Untouched keys keep their defaults
        assert_eq!(settings.thresholds.tier_high, 3.0);
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        let file = toml_file(
            r#"
            [thresholds]
            tier_mid = 5.0
            tier_high = 3.0
            "#,
        );

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, Error::InvalidThresholds(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/risewatch.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
