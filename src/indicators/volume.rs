//! Volume indicators: OBV.

use std::cmp::Ordering;

use tracing::debug;

use crate::core::buffer::with_capacity;
use crate::core::error::IndicatorError;
use crate::core::Result;

/// On Balance Volume (OBV).
///
/// Starts at zero and adds each bar's volume when the close rises, subtracts
/// it when the close falls, and carries the previous value otherwise.
///
/// # Arguments
/// * `close` - Close prices
/// * `volume` - Volume data, same length as `close`
///
/// # Returns
/// Vector of OBV values, one per input bar
pub fn obv(close: &[f64], volume: &[f64]) -> Result<Vec<f64>> {
    let n = close.len();
    if n == 0 {
        return Err(IndicatorError::empty_series("OBV"));
    }
    if n != volume.len() {
        return Err(IndicatorError::length_mismatch(n, volume.len()));
    }
    debug!(len = n, "computing OBV");

    let mut result = with_capacity(n)?;
    result.push(0.0);

    let mut running = 0.0;
    for (pair, &vol) in close.windows(2).zip(&volume[1..]) {
        match pair[1].partial_cmp(&pair[0]) {
            Some(Ordering::Greater) => running += vol,
            Some(Ordering::Less) => running -= vol,
            _ => {}
        }
        result.push(running);
    }

    Ok(result)
}
