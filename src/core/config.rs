//! Indicator parameters.

use serde::{Deserialize, Serialize};

use super::error::{IndicatorError, Result};

/// Default lookback window for SMA, EMA and Bollinger Bands.
pub const DEFAULT_WINDOW: usize = 20;

/// Default RSI lookback.
pub const DEFAULT_RSI_WINDOW: usize = 14;

/// Default Bollinger Bands standard deviation multiplier.
pub const DEFAULT_STD_DEV_MULTIPLIER: f64 = 2.0;

/// MACD fast EMA period.
pub const MACD_FAST_PERIOD: usize = 12;

/// MACD slow EMA period.
pub const MACD_SLOW_PERIOD: usize = 26;

/// MACD signal line EMA period.
pub const MACD_SIGNAL_PERIOD: usize = 9;

/// Index shift between the fast and slow EMA outputs for the same price.
pub const MACD_ALIGNMENT_OFFSET: usize = MACD_SLOW_PERIOD - MACD_FAST_PERIOD;

/// Shortest series MACD accepts.
pub const MACD_MIN_LENGTH: usize = MACD_SLOW_PERIOD + MACD_SIGNAL_PERIOD;

/// Parameters used when indicators are selected by kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Window for SMA, EMA and Bollinger Bands.
    pub window: usize,
    /// Window for RSI.
    pub rsi_window: usize,
    /// Bollinger Bands standard deviation multiplier.
    pub std_dev_multiplier: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            rsi_window: DEFAULT_RSI_WINDOW,
            std_dev_multiplier: DEFAULT_STD_DEV_MULTIPLIER,
        }
    }
}

impl IndicatorConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| IndicatorError::invalid_argument(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameters that are wrong regardless of the series length.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(IndicatorError::invalid_argument("window must be > 0"));
        }
        if self.rsi_window == 0 {
            return Err(IndicatorError::invalid_argument("rsi_window must be > 0"));
        }
        if !(self.std_dev_multiplier.is_finite() && self.std_dev_multiplier > 0.0) {
            return Err(IndicatorError::invalid_argument(
                "std_dev_multiplier must be a finite value > 0",
            ));
        }
        Ok(())
    }
}
