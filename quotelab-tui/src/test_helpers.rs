//! Shared fixtures for widget and app tests.

use chrono::NaiveDate;

use quotelab_core::analysis::{AnalyzedQuotes, SmaAnalyzer};
use quotelab_core::domain::Quote;
use quotelab_core::signals::classify;

use crate::app::AppState;

/// Synthetic daily quotes with closes `1..=n`, starting 2024-01-02.
pub fn make_quotes(n: usize) -> Vec<Quote> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let date = base + chrono::Duration::days(i as i64);
            let close = (i + 1) as f64;
            Quote {
                date,
                time_ms: Quote::time_ms_for(date),
                open: close,
                high: close + 1.0,
                low: (close - 1.0).max(0.1),
                close,
                adj_close: close,
                volume: 1000,
                sma: None,
            }
        })
        .collect()
}

/// Quotes analyzed with a short window so signals show up in small fixtures.
pub fn analyzed(n: usize, period: usize) -> AnalyzedQuotes {
    SmaAnalyzer::new(period).analyze(make_quotes(n))
}

/// A ready-to-draw app over `n` synthetic quotes (SMA period 10).
pub fn sample_app(n: usize) -> AppState {
    let quotes = analyzed(n, 10);
    let signals = classify(quotes.as_slice());
    AppState::new(quotes, signals, Vec::new(), "TEST".into(), 10)
}
