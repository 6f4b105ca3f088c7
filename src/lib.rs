//! # ta-report
//!
//! Runs the `ta-indicators` suite over a JSON candle history and renders the
//! results as JSON.
//!
//! ```rust
//! use ta_core::Candle;
//! use ta_report::{build_report, ReportConfig};
//!
//! let candles: Vec<Candle<f64>> = (0..50)
//!     .map(|i| {
//!         let c = 100.0 + f64::from(i);
//!         Candle::new(i64::from(i), c, c + 1.0, c - 1.0, c, 10.0)
//!     })
//!     .collect();
//!
//! let report = build_report(&candles, &ReportConfig::default());
//! assert_eq!(report.candles, 50);
//! assert_eq!(report.ad.len(), 50);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;
pub mod report;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use input::{load_candles, read_candles};
pub use report::{build_report, IndicatorReport};
