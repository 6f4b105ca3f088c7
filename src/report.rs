//! Run every indicator over one candle history.

use serde::Serialize;
use ta_core::{Candle, Indicator, Series};
use ta_indicators::prelude::*;
use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::input::closes;

/// Output of every indicator for one candle history.
///
/// NaN and infinite values serialize as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorReport {
    /// Number of input candles.
    pub candles: usize,
    /// Latest-window moving average of closes, absent when there are too few candles.
    pub moving_average: Option<f64>,
    /// Simple moving average of closes.
    pub sma: Series<f64>,
    /// SMA envelope of closes.
    pub envelope: EnvelopeOutput<f64>,
    /// Rolling mean absolute deviation of closes.
    pub mad: Series<f64>,
    /// Bollinger Bands of closes, one record per candle.
    pub bollinger: Vec<BandPoint<f64>>,
    /// RSI of closes.
    pub rsi: Series<f64>,
    /// EMA of the configured field.
    pub ema: Series<f64>,
    /// MACD histogram.
    pub macd: Series<f64>,
    /// Accumulation/Distribution line.
    pub ad: Series<f64>,
}

/// Compute the full report.
///
/// A moving average that cannot be formed is logged and left out rather than
/// failing the whole report; every other indicator signals short input in
/// its own output.
#[must_use]
pub fn build_report(candles: &[Candle<f64>], config: &ReportConfig) -> IndicatorReport {
    info!(candles = candles.len(), "computing indicator report");
    let prices = closes(candles);

    let moving_average = match MovingAverage::<f64>::new(config.moving_average.clone())
        .calculate(prices.as_slice())
    {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "skipping moving average");
            None
        }
    };

    let sma = simple_moving_average(&prices, config.sma.window);
    let envelope =
        moving_average_envelope(&prices, config.envelope.window, config.envelope.percent);
    let mad_out = mad(&prices, config.mad.window);
    let bollinger = bollinger_bands(&prices, config.bollinger.window, config.bollinger.num_std);
    let rsi_out = rsi(&prices, config.rsi.window);
    let ema_out = ema(candles, config.ema.window, config.ema.field);

    let short = ema(candles, config.macd.short, config.macd.field);
    let long = ema(candles, config.macd.long, config.macd.field);
    let macd_out = macd(candles, short.as_slice(), long.as_slice(), config.macd.signal);

    let ad = calculate_ad(candles);

    IndicatorReport {
        candles: candles.len(),
        moving_average,
        sma,
        envelope,
        mad: mad_out,
        bollinger,
        rsi: rsi_out,
        ema: ema_out,
        macd: macd_out,
        ad,
    }
}
