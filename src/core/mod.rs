//! Core types and utilities for pricewise.

pub(crate) mod buffer;
pub mod config;
pub mod error;
pub mod types;

pub use config::IndicatorConfig;
pub use error::{IndicatorError, Result};
pub use types::*;
