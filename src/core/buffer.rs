//! Fallible allocation of result buffers.
//!
//! Indicator outputs are sized from caller input, so an oversized request
//! surfaces as [`IndicatorError::ComputationFailed`] instead of aborting.

use super::error::{IndicatorError, Result};

/// Allocate an empty vector with room for exactly `len` values.
pub(crate) fn with_capacity(len: usize) -> Result<Vec<f64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| IndicatorError::allocation_failed(len))?;
    Ok(buf)
}

/// Allocate a vector of `len` copies of `value`.
pub(crate) fn filled(len: usize, value: f64) -> Result<Vec<f64>> {
    let mut buf = with_capacity(len)?;
    buf.resize(len, value);
    Ok(buf)
}

/// Number of window positions over a series of `len` values.
#[inline]
pub(crate) fn window_count(len: usize, window: usize) -> usize {
    len - window + 1
}

/// Check the `0 < window < len` contract shared by every windowed indicator.
pub(crate) fn check_window(context: &str, len: usize, window: usize) -> Result<()> {
    if len == 0 {
        return Err(IndicatorError::empty_series(context));
    }
    if window == 0 || window >= len {
        return Err(IndicatorError::window_out_of_range(context, window, len));
    }
    Ok(())
}
