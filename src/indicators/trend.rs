//! Trend indicators: SMA, EMA.

use tracing::{debug, warn};

use crate::core::buffer::{check_window, window_count, with_capacity};
use crate::core::error::IndicatorError;
use crate::core::Result;

/// Simple Moving Average.
///
/// Element `i` of the output is the arithmetic mean of `data[i..i + period]`,
/// so the output has `data.len() - period + 1` values and element `i` lines
/// up with source index `i + period - 1`.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period, `0 < period < data.len()`
///
/// # Returns
/// Vector of SMA values
pub fn sma(data: &[f64], period: usize) -> Result<Vec<f64>> {
    check_window("SMA", data.len(), period)?;
    debug!(len = data.len(), period, "computing SMA");

    let mut result = with_capacity(window_count(data.len(), period))?;
    result.extend(data.windows(period).map(|w| mean(w, period)));

    Ok(result)
}

/// Simple Moving Average written into a caller-provided buffer.
///
/// `out` must hold exactly `data.len() - period + 1` values.
pub fn sma_into(data: &[f64], period: usize, out: &mut [f64]) -> Result<()> {
    check_window("SMA", data.len(), period)?;
    let expected = window_count(data.len(), period);
    if out.len() != expected {
        return Err(IndicatorError::length_mismatch(expected, out.len()));
    }

    for (slot, w) in out.iter_mut().zip(data.windows(period)) {
        *slot = mean(w, period);
    }

    Ok(())
}

/// Exponential Moving Average.
///
/// Seeded with the first SMA value, then
/// `ema[i] = alpha * (data[i + period - 1] - ema[i - 1]) + ema[i - 1]`
/// with `alpha = 2 / (period + 1)`. Output length and alignment match [`sma`].
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period (used to calculate smoothing factor)
///
/// # Returns
/// Vector of EMA values
pub fn ema(data: &[f64], period: usize) -> Result<Vec<f64>> {
    check_window("EMA", data.len(), period)?;
    debug!(len = data.len(), period, "computing EMA");

    let seed = sma(data, period)
        .map(|values| values[0])
        .map_err(|e| {
            warn!(error = %e, "EMA seed SMA failed");
            IndicatorError::computation_failed("EMA seed SMA", e)
        })?;

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut result = with_capacity(window_count(data.len(), period))?;
    result.push(seed);

    let mut prev = seed;
    for &price in &data[period..] {
        prev = alpha * (price - prev) + prev;
        result.push(prev);
    }

    Ok(result)
}

#[inline]
fn mean(window: &[f64], period: usize) -> f64 {
    window.iter().sum::<f64>() / period as f64
}
