//! Momentum indicators: RSI, MACD.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::trend::ema;
use crate::core::buffer::{check_window, with_capacity};
use crate::core::config::{
    MACD_ALIGNMENT_OFFSET, MACD_FAST_PERIOD, MACD_MIN_LENGTH, MACD_SIGNAL_PERIOD,
    MACD_SLOW_PERIOD,
};
use crate::core::error::IndicatorError;
use crate::core::Result;

/// Relative Strength Index (RSI), Wilder's method.
///
/// The first value averages the gains and losses of the first `period` price
/// changes. Later values apply Wilder smoothing,
/// `avg = (avg * (period - 1) + x) / period`. When the average loss is zero
/// the RSI is pinned to 100.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period, `0 < period < data.len()`
///
/// # Returns
/// Vector of `data.len() - period` RSI values on a 0-100 scale; element `j`
/// lines up with source index `j + period`.
pub fn rsi(data: &[f64], period: usize) -> Result<Vec<f64>> {
    check_window("RSI", data.len(), period)?;
    debug!(len = data.len(), period, "computing RSI");

    let n = data.len();
    let mut result = with_capacity(n - period)?;

    let mut changes = with_capacity(n - 1)?;
    changes.extend(data.windows(2).map(|w| w[1] - w[0]));

    // Initial averages over the first `period` changes
    let (gain_sum, loss_sum) = changes[..period]
        .iter()
        .fold((0.0, 0.0), |(g, l), &change| {
            let (gain, loss) = split_change(change);
            (g + gain, l + loss)
        });
    let mut avg_gain = gain_sum / period as f64;
    let mut avg_loss = loss_sum / period as f64;
    result.push(rsi_value(avg_gain, avg_loss));

    let weight = (period - 1) as f64;
    for &change in &changes[period..] {
        let (gain, loss) = split_change(change);
        avg_gain = (avg_gain * weight + gain) / period as f64;
        avg_loss = (avg_loss * weight + loss) / period as f64;
        result.push(rsi_value(avg_gain, avg_loss));
    }

    Ok(result)
}

/// Split a price change into (gain, loss) magnitudes.
#[inline]
fn split_change(change: f64) -> (f64, f64) {
    if change > 0.0 {
        (change, 0.0)
    } else if change < 0.0 {
        (0.0, -change)
    } else {
        (0.0, 0.0)
    }
}

#[inline]
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

/// MACD result structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdResult {
    /// MACD line (fast EMA - slow EMA).
    pub macd: Vec<f64>,
    /// Signal line (EMA of MACD line).
    pub signal: Vec<f64>,
}

impl MacdResult {
    #[inline]
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }

    /// Histogram (MACD line - signal line).
    pub fn histogram(&self) -> Vec<f64> {
        self.macd
            .iter()
            .zip(&self.signal)
            .map(|(m, s)| m - s)
            .collect()
    }
}

/// Moving Average Convergence Divergence (MACD) with the standard 12/26/9
/// periods.
///
/// The raw MACD line is `EMA12 - EMA26` over the source indices both EMAs
/// cover. The signal line is the 9-period EMA of that raw line, and the MACD
/// line is shifted to start at the signal line's first point.
///
/// # Arguments
/// * `data` - Price data (typically close prices), at least 35 values
///
/// # Returns
/// MacdResult with `data.len() - 34` points per line; element `i` lines up
/// with source index `i + 33`.
pub fn macd(data: &[f64]) -> Result<MacdResult> {
    let n = data.len();
    if n < MACD_MIN_LENGTH {
        return Err(IndicatorError::invalid_argument(format!(
            "MACD requires at least {MACD_MIN_LENGTH} prices, got {n}"
        )));
    }
    debug!(len = n, "computing MACD");

    let fast_ema = ema(data, MACD_FAST_PERIOD).map_err(|e| sub_failure("MACD fast EMA", e))?;
    let slow_ema = ema(data, MACD_SLOW_PERIOD).map_err(|e| sub_failure("MACD slow EMA", e))?;

    // fast_ema[i + 14] and slow_ema[i] describe the same source price
    let mut raw = with_capacity(slow_ema.len())?;
    raw.extend(
        fast_ema[MACD_ALIGNMENT_OFFSET..]
            .iter()
            .zip(&slow_ema)
            .map(|(fast, slow)| fast - slow),
    );

    let mut signal =
        ema(&raw, MACD_SIGNAL_PERIOD).map_err(|e| sub_failure("MACD signal EMA", e))?;

    let len = n - MACD_MIN_LENGTH + 1;
    signal.truncate(len);

    let start = MACD_SIGNAL_PERIOD - 1;
    let mut macd_line = with_capacity(len)?;
    macd_line.extend_from_slice(&raw[start..start + len]);

    Ok(MacdResult {
        macd: macd_line,
        signal,
    })
}

fn sub_failure(context: &str, err: IndicatorError) -> IndicatorError {
    warn!(error = %err, context, "sub-computation failed");
    IndicatorError::computation_failed(context, err)
}
