//! Core data types for pricewise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::IndicatorError;
use crate::indicators::{BollingerBandsResult, MacdResult};

/// Type alias for price values.
pub type Price = f64;

/// Type alias for traded volume values.
pub type Volume = f64;

/// The indicators the engine knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Simple Moving Average.
    Sma,
    /// Exponential Moving Average.
    Ema,
    /// Relative Strength Index.
    Rsi,
    /// Bollinger Bands.
    BollingerBands,
    /// Moving Average Convergence Divergence.
    Macd,
    /// On-Balance Volume.
    Obv,
}

impl IndicatorKind {
    /// Every supported indicator, in dependency order.
    pub const ALL: [IndicatorKind; 6] = [
        IndicatorKind::Sma,
        IndicatorKind::Ema,
        IndicatorKind::Rsi,
        IndicatorKind::BollingerBands,
        IndicatorKind::Macd,
        IndicatorKind::Obv,
    ];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            IndicatorKind::Sma => "SMA",
            IndicatorKind::Ema => "EMA",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::BollingerBands => "BBANDS",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Obv => "OBV",
        }
    }

    /// Whether the indicator needs a volume series next to prices.
    #[inline]
    pub fn requires_volume(self) -> bool {
        matches!(self, IndicatorKind::Obv)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sma" => Ok(IndicatorKind::Sma),
            "ema" => Ok(IndicatorKind::Ema),
            "rsi" => Ok(IndicatorKind::Rsi),
            "bbands" | "bollinger" | "bollinger_bands" => Ok(IndicatorKind::BollingerBands),
            "macd" => Ok(IndicatorKind::Macd),
            "obv" => Ok(IndicatorKind::Obv),
            other => Err(IndicatorError::invalid_argument(format!(
                "unknown indicator: {other}"
            ))),
        }
    }
}

/// A price series with optional volumes, as handed in by a host service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub prices: Vec<Price>,
    #[serde(default)]
    pub volumes: Option<Vec<Volume>>,
}

impl PriceSeries {
    /// Create a price-only series.
    pub fn new(prices: Vec<Price>) -> Self {
        Self {
            prices,
            volumes: None,
        }
    }

    /// Create a series carrying volumes as well.
    pub fn with_volumes(prices: Vec<Price>, volumes: Vec<Volume>) -> Self {
        Self {
            prices,
            volumes: Some(volumes),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Volumes as a slice, if present.
    pub fn volumes(&self) -> Option<&[Volume]> {
        self.volumes.as_deref()
    }
}

/// Output of a single indicator computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum IndicatorOutput {
    /// A single result series (SMA, EMA, RSI, OBV).
    Series(Vec<f64>),
    /// Middle, top and bottom bands.
    Bollinger(BollingerBandsResult),
    /// MACD line and signal line.
    Macd(MacdResult),
}

impl IndicatorOutput {
    /// Number of points in the output.
    pub fn len(&self) -> usize {
        match self {
            IndicatorOutput::Series(values) => values.len(),
            IndicatorOutput::Bollinger(bands) => bands.len(),
            IndicatorOutput::Macd(macd) => macd.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The plain series, if this is a single-series output.
    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            IndicatorOutput::Series(values) => Some(values),
            _ => None,
        }
    }
}
