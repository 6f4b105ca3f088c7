//! Candle input loading.
//!
//! Candle files are JSON with one array per OHLCV column:
//!
//! ```json
//! { "ohlcv": { "time": [0, 60000], "open": [1.0, 1.1], "high": [1.2, 1.3],
//!              "low": [0.9, 1.0], "close": [1.1, 1.2], "volume": [10.0, 12.0] } }
//! ```
//!
//! `time` is optional; when absent bars are numbered from zero.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use ta_core::Candle;
use tracing::debug;

use crate::error::{ReportError, Result};

#[derive(Debug, Deserialize)]
struct CandleFile {
    ohlcv: OhlcvColumns,
}

#[derive(Debug, Deserialize)]
struct OhlcvColumns {
    #[serde(default)]
    time: Option<Vec<i64>>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

impl OhlcvColumns {
    fn check_len(column: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(ReportError::LengthMismatch {
                column,
                expected,
                actual,
            })
        }
    }

    fn into_candles(self) -> Result<Vec<Candle<f64>>> {
        let len = self.close.len();
        Self::check_len("open", len, self.open.len())?;
        Self::check_len("high", len, self.high.len())?;
        Self::check_len("low", len, self.low.len())?;
        Self::check_len("volume", len, self.volume.len())?;
        if let Some(time) = &self.time {
            Self::check_len("time", len, time.len())?;
        }

        Ok((0..len)
            .map(|i| {
                let time = self.time.as_ref().map_or(i as i64, |t| t[i]);
                Candle::new(
                    time,
                    self.open[i],
                    self.high[i],
                    self.low[i],
                    self.close[i],
                    self.volume[i],
                )
            })
            .collect())
    }
}

/// Parse candles from a JSON reader.
///
/// # Errors
///
/// Returns [`ReportError::Json`] for malformed input and
/// [`ReportError::LengthMismatch`] when the columns differ in length.
pub fn read_candles<R: Read>(reader: R) -> Result<Vec<Candle<f64>>> {
    let file: CandleFile = serde_json::from_reader(reader)?;
    let candles = file.ohlcv.into_candles()?;
    debug!(count = candles.len(), "parsed candles");
    Ok(candles)
}

/// Load candles from a JSON file.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be opened, otherwise the
/// errors of [`read_candles`].
pub fn load_candles(path: &Path) -> Result<Vec<Candle<f64>>> {
    let file = File::open(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_candles(BufReader::new(file))
}

/// Close prices of `candles`, oldest first.
#[must_use]
pub fn closes(candles: &[Candle<f64>]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
