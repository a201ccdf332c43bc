//! Analysis over the full quote history.
//!
//! The analyzer mutates the sequence exactly once (filling in `sma`) and
//! then hands it back as [`AnalyzedQuotes`], which only exposes shared
//! slices. Everything downstream — filtering, classification, rendering —
//! reads views of that one sequence.

pub mod filter;
pub mod sma;

pub use filter::quotes_between;
pub use sma::{SmaAnalyzer, DEFAULT_PERIOD};

use crate::domain::{Quote, TimeInterval};

/// The fully analyzed quote sequence. Immutable from here on.
#[derive(Debug, Clone, Default)]
pub struct AnalyzedQuotes {
    quotes: Vec<Quote>,
}

impl AnalyzedQuotes {
    pub(crate) fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Interval spanning the first and last quote, or `None` when empty.
    /// This is what initializes the slider bounds.
    pub fn full_interval(&self) -> Option<TimeInterval> {
        let first = self.quotes.first()?;
        let last = self.quotes.last()?;
        Some(TimeInterval::new(first.time_ms, last.time_ms))
    }
}

impl std::ops::Deref for AnalyzedQuotes {
    type Target = [Quote];

    fn deref(&self) -> &[Quote] {
        &self.quotes
    }
}

/// Create synthetic quotes from close prices for testing.
///
/// Dates are consecutive days from 2024-01-02; open = prev close,
/// high/low bracket open and close, volume = 1000.
#[cfg(test)]
pub fn make_quotes(closes: &[f64]) -> Vec<Quote> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let date = base_date + chrono::Duration::days(i as i64);
            Quote {
                date,
                time_ms: Quote::time_ms_for(date),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                adj_close: close,
                volume: 1000,
                sma: None,
            }
        })
        .collect()
}
