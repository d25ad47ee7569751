//! Volatility indicators: rolling standard deviation, Bollinger Bands.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::trend::sma;
use crate::core::buffer::{check_window, filled, window_count, with_capacity};
use crate::core::error::IndicatorError;
use crate::core::Result;

/// Rolling population standard deviation.
///
/// Element `i` is the standard deviation of `data[i..i + period]` about
/// `means[i]`, dividing by `period`.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period, `0 < period < data.len()`
/// * `means` - Per-window means, one per window position
///
/// # Returns
/// Vector of `data.len() - period + 1` standard deviations
pub fn std_devs(data: &[f64], period: usize, means: &[f64]) -> Result<Vec<f64>> {
    check_window("standard deviation", data.len(), period)?;
    let mut result = filled(window_count(data.len(), period), 0.0)?;
    std_devs_into(data, period, means, &mut result)?;
    Ok(result)
}

/// Rolling population standard deviation written into a caller buffer.
///
/// Both `means` and `out` must hold exactly `data.len() - period + 1` values.
pub fn std_devs_into(data: &[f64], period: usize, means: &[f64], out: &mut [f64]) -> Result<()> {
    check_window("standard deviation", data.len(), period)?;
    let expected = window_count(data.len(), period);
    if means.len() != expected {
        return Err(IndicatorError::length_mismatch(expected, means.len()));
    }
    if out.len() != expected {
        return Err(IndicatorError::length_mismatch(expected, out.len()));
    }

    for ((slot, window), &mean) in out.iter_mut().zip(data.windows(period)).zip(means) {
        *slot = population_std_dev(window, mean);
    }

    Ok(())
}

#[inline]
fn population_std_dev(window: &[f64], mean: f64) -> f64 {
    // A flat window has no spread even when its mean carries rounding error
    if window.iter().all(|&x| x == window[0]) {
        return 0.0;
    }
    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window.len() as f64;
    variance.sqrt()
}

/// Bollinger Bands result.
///
/// The struct is the sole owner of all three bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsResult {
    /// Middle band (SMA).
    pub middle: Vec<f64>,
    /// Upper band (SMA + std_dev * multiplier).
    pub top: Vec<f64>,
    /// Lower band (SMA - std_dev * multiplier).
    pub bottom: Vec<f64>,
}

impl BollingerBandsResult {
    #[inline]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// Distance between the top and bottom band at each point.
    pub fn bandwidth(&self) -> Vec<f64> {
        self.top
            .iter()
            .zip(&self.bottom)
            .map(|(top, bottom)| top - bottom)
            .collect()
    }
}

/// Bollinger Bands.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period (default: 20)
/// * `multiplier` - Standard deviation multiplier (default: 2.0), must be > 0
///
/// # Returns
/// BollingerBandsResult with `data.len() - period + 1` points per band,
/// aligned like [`sma`]
pub fn bollinger_bands(
    data: &[f64],
    period: usize,
    multiplier: f64,
) -> Result<BollingerBandsResult> {
    check_window("Bollinger Bands", data.len(), period)?;
    if multiplier.is_nan() || multiplier <= 0.0 {
        return Err(IndicatorError::invalid_argument(format!(
            "Bollinger Bands multiplier must be > 0, got {multiplier}"
        )));
    }
    debug!(len = data.len(), period, multiplier, "computing Bollinger Bands");

    let middle = sma(data, period).map_err(|e| {
        warn!(error = %e, "Bollinger middle band SMA failed");
        IndicatorError::computation_failed("Bollinger middle band SMA", e)
    })?;
    let deviations = std_devs(data, period, &middle)?;

    let len = middle.len();
    let mut top = with_capacity(len)?;
    let mut bottom = with_capacity(len)?;
    for (&mean, &std) in middle.iter().zip(&deviations) {
        top.push(mean + multiplier * std);
        bottom.push(mean - multiplier * std);
    }

    Ok(BollingerBandsResult {
        middle,
        top,
        bottom,
    })
}
