//! Indicator dispatch and parallel evaluation over many series.
//!
//! Every indicator is a pure function of its inputs, so independent series
//! can be fanned out across rayon's thread pool without coordination.

use rayon::prelude::*;
use tracing::debug;

use crate::core::config::IndicatorConfig;
use crate::core::error::IndicatorError;
use crate::core::types::{IndicatorKind, IndicatorOutput, PriceSeries};
use crate::core::Result;
use crate::indicators;

/// Run one indicator selected by kind.
///
/// `volumes` is only read by OBV, which fails with an invalid argument error
/// when it is missing.
pub fn compute(
    kind: IndicatorKind,
    prices: &[f64],
    volumes: Option<&[f64]>,
    config: &IndicatorConfig,
) -> Result<IndicatorOutput> {
    config.validate()?;

    let output = match kind {
        IndicatorKind::Sma => IndicatorOutput::Series(indicators::sma(prices, config.window)?),
        IndicatorKind::Ema => IndicatorOutput::Series(indicators::ema(prices, config.window)?),
        IndicatorKind::Rsi => IndicatorOutput::Series(indicators::rsi(prices, config.rsi_window)?),
        IndicatorKind::BollingerBands => IndicatorOutput::Bollinger(indicators::bollinger_bands(
            prices,
            config.window,
            config.std_dev_multiplier,
        )?),
        IndicatorKind::Macd => IndicatorOutput::Macd(indicators::macd(prices)?),
        IndicatorKind::Obv => {
            let volumes = volumes
                .ok_or_else(|| IndicatorError::invalid_argument("OBV requires a volume series"))?;
            IndicatorOutput::Series(indicators::obv(prices, volumes)?)
        }
    };

    Ok(output)
}

/// Run every applicable indicator over one series.
///
/// OBV is skipped when no volumes are supplied. Each indicator succeeds or
/// fails on its own, so a series too short for MACD still gets its SMA.
pub fn compute_all(
    prices: &[f64],
    volumes: Option<&[f64]>,
    config: &IndicatorConfig,
) -> Vec<(IndicatorKind, Result<IndicatorOutput>)> {
    IndicatorKind::ALL
        .iter()
        .filter(|kind| !kind.requires_volume() || volumes.is_some())
        .map(|&kind| (kind, compute(kind, prices, volumes, config)))
        .collect()
}

/// Run one indicator over many independent series in parallel.
///
/// Results come back in input order, one per series.
pub fn compute_many(
    series: &[PriceSeries],
    kind: IndicatorKind,
    config: &IndicatorConfig,
) -> Vec<Result<IndicatorOutput>> {
    debug!(
        series = series.len(),
        indicator = %kind,
        threads = rayon::current_num_threads(),
        "computing indicator batch"
    );

    series
        .par_iter()
        .map(|s| compute(kind, &s.prices, s.volumes(), config))
        .collect()
}
