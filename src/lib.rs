//! pricewise - technical indicator engine.
//!
//! This crate computes a fixed family of indicators from time-ordered price
//! (and volume) series:
//! - Trend: SMA, EMA
//! - Momentum: RSI, MACD
//! - Volatility: Bollinger Bands
//! - Volume: OBV
//!
//! Every indicator is a pure function of its inputs. Results are owned values
//! handed to the caller; nothing is cached or shared between calls, so
//! independent calls may run on any thread.

pub mod batch;
pub mod core;
pub mod indicators;

pub use crate::batch::{compute, compute_all, compute_many};
pub use crate::core::{
    IndicatorConfig, IndicatorError, IndicatorKind, IndicatorOutput, PriceSeries, Result,
};
pub use crate::indicators::{BollingerBandsResult, MacdResult};
