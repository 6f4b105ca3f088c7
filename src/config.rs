//! Report configuration.
//!
//! Parameters for every indicator, read from a TOML file. Each table and each
//! field is optional and falls back to the indicator's default.
//!
//! ```toml
//! [rsi]
//! window = 10
//!
//! [macd]
//! short = 8
//! long = 21
//! signal = 5
//! field = "high"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use ta_indicators::prelude::*;

use crate::error::{ReportError, Result};

/// Parameters for one report run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Latest-window moving average.
    pub moving_average: MovingAverageConfig,
    /// Simple moving average.
    pub sma: SmaConfig,
    /// SMA envelope.
    pub envelope: EnvelopeConfig,
    /// Mean absolute deviation.
    pub mad: MadConfig,
    /// Bollinger Bands.
    pub bollinger: BollingerConfig,
    /// Relative Strength Index.
    pub rsi: RsiConfig,
    /// Exponential moving average.
    pub ema: EmaConfig,
    /// MACD histogram.
    pub macd: MacdConfig,
}

impl ReportConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Toml`] for malformed TOML or unknown tables.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration file, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the file cannot be read and
    /// [`ReportError::Toml`] if it cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ta_core::CandleField;

    #[test]
    fn test_empty_config_is_default() {
        let config = ReportConfig::from_toml_str("").unwrap();
        assert_eq!(config.rsi.window, 14);
        assert_eq!(config.macd.short, 12);
        assert_eq!(config.bollinger.window, 20);
    }

    #[test]
    fn test_partial_tables() {
        let config = ReportConfig::from_toml_str(
            r#"
            [macd]
            long = 30
            field = "high"

            [envelope]
            percent = 5.0
            "#,
        )
        .unwrap();

        assert_eq!(config.macd.short, 12);
        assert_eq!(config.macd.long, 30);
        assert_eq!(config.macd.field, CandleField::High);
        assert_eq!(config.envelope.window, 20);
        assert_eq!(config.envelope.percent, 5.0);
    }

    #[test]
    fn test_unknown_table_rejected() {
        assert!(ReportConfig::from_toml_str("[stochastic]\nwindow = 3\n").is_err());
    }

    #[test]
    fn test_misspelled_key_rejected() {
        let err = ReportConfig::from_toml_str("[macd]\nsingal = 5\n").unwrap_err();
        assert!(matches!(err, ReportError::Toml(_)));
        assert!(ReportConfig::from_toml_str("[rsi]\nperiod = 10\n").is_err());
    }

    #[test]
    fn test_missing_path_is_default() {
        let config = ReportConfig::load(None).unwrap();
        assert_eq!(config.sma.window, 20);
    }
}
