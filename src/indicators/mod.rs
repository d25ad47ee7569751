//! Technical indicators for pricewise.
//!
//! All indicators are pure functions that take slice inputs and return owned
//! `Vec` outputs holding only computed points: a windowed indicator returns
//! fewer values than it was given, never a warmup padding. Each public
//! function checks its arguments before allocating anything.

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::{macd, rsi, MacdResult};
pub use trend::{ema, sma, sma_into};
pub use volatility::{bollinger_bands, std_devs, std_devs_into, BollingerBandsResult};
pub use volume::obv;
