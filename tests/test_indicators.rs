//! Integration tests for pricewise indicators.

use pricewise::indicators::momentum::{macd, rsi};
use pricewise::indicators::trend::{ema, sma};
use pricewise::indicators::volatility::bollinger_bands;
use pricewise::indicators::volume::obv;
use serde::Deserialize;

#[derive(Deserialize)]
struct WindowCase {
    window: usize,
    expected: Vec<f64>,
}

#[derive(Deserialize)]
struct BollingerCase {
    window: usize,
    std_devs: f64,
    expected_middle: Vec<f64>,
    expected_top: Vec<f64>,
    expected_bottom: Vec<f64>,
}

#[derive(Deserialize)]
struct MacdCase {
    expected_macd: Vec<f64>,
    expected_signal: Vec<f64>,
}

#[derive(Deserialize)]
struct SeriesCase {
    expected: Vec<f64>,
}

#[derive(Deserialize)]
struct Golden {
    prices: Vec<f64>,
    volumes: Vec<f64>,
    sma: WindowCase,
    ema: WindowCase,
    rsi: WindowCase,
    bollinger: BollingerCase,
    macd: MacdCase,
    obv: SeriesCase,
}

fn golden() -> Golden {
    serde_json::from_str(include_str!("data/golden.json")).expect("golden fixture should parse")
}

fn assert_close(name: &str, actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "{name} length");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "{name} at index {i}: expected {e}, got {a}"
        );
    }
}

fn ascending(n: usize) -> Vec<f64> {
    (1..=n).map(|x| x as f64).collect()
}

#[test]
fn test_sma_golden() {
    let g = golden();
    let result = sma(&g.prices, g.sma.window).unwrap();
    assert_close("SMA", &result, &g.sma.expected, 1e-9);
}

#[test]
fn test_ema_golden() {
    let g = golden();
    let result = ema(&g.prices, g.ema.window).unwrap();
    assert_close("EMA", &result, &g.ema.expected, 1e-9);
}

#[test]
fn test_rsi_golden() {
    let g = golden();
    let result = rsi(&g.prices, g.rsi.window).unwrap();
    assert_close("RSI", &result, &g.rsi.expected, 1e-9);
}

#[test]
fn test_bollinger_golden() {
    let g = golden();
    let c = &g.bollinger;
    let result = bollinger_bands(&g.prices, c.window, c.std_devs).unwrap();
    assert_close("middle", &result.middle, &c.expected_middle, 1e-9);
    assert_close("top", &result.top, &c.expected_top, 1e-9);
    assert_close("bottom", &result.bottom, &c.expected_bottom, 1e-9);
}

#[test]
fn test_macd_golden() {
    let g = golden();
    let result = macd(&g.prices).unwrap();
    assert_eq!(result.len(), g.prices.len() - 34);
    assert_close("MACD", &result.macd, &g.macd.expected_macd, 1e-9);
    assert_close("signal", &result.signal, &g.macd.expected_signal, 1e-9);
}

#[test]
fn test_obv_golden() {
    let g = golden();
    let result = obv(&g.prices, &g.volumes).unwrap();
    assert_close("OBV", &result, &g.obv.expected, 1e-9);
}

#[test]
fn test_sma_ascending_thirty() {
    let prices = ascending(30);
    let result = sma(&prices, 5).unwrap();

    assert_eq!(result.len(), 26);
    assert!((result[0] - 3.0).abs() < 1e-12);
    assert!((result[25] - 28.0).abs() < 1e-12);
    for (i, value) in result.iter().enumerate() {
        assert!((value - (i as f64 + 3.0)).abs() < 1e-12);
    }
}

#[test]
fn test_ema_seeded_from_sma() {
    let g = golden();
    for window in [1, 5, 12, 26, 39] {
        let e = ema(&g.prices, window).unwrap();
        let s = sma(&g.prices, window).unwrap();
        assert_eq!(e.len(), s.len());
        assert_eq!(e[0], s[0], "seed mismatch for window {window}");
    }
}

#[test]
fn test_rsi_alignment_and_range() {
    let g = golden();
    let result = rsi(&g.prices, 14).unwrap();
    assert_eq!(result.len(), g.prices.len() - 14);

    for (i, &value) in result.iter().enumerate() {
        assert!(
            (0.0..=100.0).contains(&value),
            "RSI at index {} is out of range: {}",
            i,
            value
        );
    }
}

#[test]
fn test_bollinger_constant_series() {
    let prices = vec![101.25; 20];
    for window in 1..20 {
        let result = bollinger_bands(&prices, window, 2.0).unwrap();
        assert_eq!(result.len(), 20 - window + 1);
        assert_eq!(result.top, result.middle);
        assert_eq!(result.bottom, result.middle);
    }
}

#[test]
fn test_bollinger_middle_is_sma() {
    let g = golden();
    let bands = bollinger_bands(&g.prices, 20, 2.0).unwrap();
    let middle = sma(&g.prices, 20).unwrap();
    assert_eq!(bands.middle, middle);
}

#[test]
fn test_macd_length_boundary() {
    assert!(macd(&ascending(30)).unwrap_err().is_invalid_argument());
    assert!(macd(&ascending(34)).unwrap_err().is_invalid_argument());
    assert_eq!(macd(&ascending(35)).unwrap().len(), 1);
    assert_eq!(macd(&ascending(100)).unwrap().len(), 66);
}

#[test]
fn test_obv_non_decreasing_prices() {
    let prices = vec![1.0, 1.0, 2.0, 3.0, 3.0, 5.0, 8.0];
    let volumes = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
    let result = obv(&prices, &volumes).unwrap();

    assert_eq!(result[0], 0.0);
    assert!(result.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_invalid_window() {
    let data = ascending(10);

    for window in [0, 10, 11] {
        assert!(sma(&data, window).unwrap_err().is_invalid_argument());
        assert!(ema(&data, window).unwrap_err().is_invalid_argument());
        assert!(rsi(&data, window).unwrap_err().is_invalid_argument());
        assert!(bollinger_bands(&data, window, 2.0)
            .unwrap_err()
            .is_invalid_argument());
    }
}

#[test]
fn test_empty_data() {
    let empty: Vec<f64> = vec![];

    assert!(sma(&empty, 1).unwrap_err().is_invalid_argument());
    assert!(ema(&empty, 1).unwrap_err().is_invalid_argument());
    assert!(rsi(&empty, 1).unwrap_err().is_invalid_argument());
    assert!(bollinger_bands(&empty, 1, 2.0)
        .unwrap_err()
        .is_invalid_argument());
    assert!(macd(&empty).unwrap_err().is_invalid_argument());
    assert!(obv(&empty, &empty).unwrap_err().is_invalid_argument());
}

#[test]
fn test_inputs_untouched_across_threads() {
    let g = golden();
    let prices = std::sync::Arc::new(g.prices);
    let expected = sma(&prices, 10).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let prices = std::sync::Arc::clone(&prices);
            std::thread::spawn(move || sma(&prices, 10).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
