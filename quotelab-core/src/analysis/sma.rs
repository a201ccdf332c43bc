//! Simple Moving Average analysis.
//!
//! Trailing mean of close prices over a fixed window, inclusive of the
//! current day. The first `period - 1` quotes have no value. Stored values
//! are rounded half-away-from-zero to the nearest integer, matching the
//! chart's integer average line.

use crate::analysis::AnalyzedQuotes;
use crate::domain::Quote;

/// Window length used by the standard pipeline.
pub const DEFAULT_PERIOD: usize = 100;

#[derive(Debug, Clone)]
pub struct SmaAnalyzer {
    period: usize,
}

impl SmaAnalyzer {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Quotes needed before the first value exists.
    pub fn lookback(&self) -> usize {
        self.period - 1
    }

    /// Fill in `sma` over the entire sequence and seal it.
    ///
    /// Runs in O(n) via an incremental window sum. Always operates on the
    /// full history — range filtering happens after analysis, never before.
    /// A sequence shorter than the period comes back untouched.
    pub fn analyze(&self, mut quotes: Vec<Quote>) -> AnalyzedQuotes {
        self.fill(&mut quotes);
        AnalyzedQuotes::new(quotes)
    }

    fn fill(&self, quotes: &mut [Quote]) {
        let n = quotes.len();
        if n < self.period {
            return;
        }

        // Initial window sum.
        let mut sum = 0.0;
        let mut nan_in_window = false;
        for q in quotes.iter().take(self.period) {
            if q.close.is_nan() {
                nan_in_window = true;
            }
            sum += q.close;
        }

        if !nan_in_window {
            quotes[self.period - 1].sma = Some(self.mean(sum));
        }

        // Roll the window forward: drop the leaving close, add the entering one.
        for i in self.period..n {
            let leaving = quotes[i - self.period].close;
            let entering = quotes[i].close;
            sum = sum - leaving + entering;

            // A NaN close anywhere in the window poisons the running sum, so
            // rescan and rebuild it whenever one enters, leaves, or was present.
            if entering.is_nan() || leaving.is_nan() || nan_in_window {
                nan_in_window = false;
                sum = 0.0;
                for q in &quotes[(i + 1 - self.period)..=i] {
                    if q.close.is_nan() {
                        nan_in_window = true;
                    }
                    sum += q.close;
                }
                if nan_in_window {
                    continue; // sma stays None for this window
                }
            }

            quotes[i].sma = Some(self.mean(sum));
        }
    }

    fn mean(&self, sum: f64) -> f64 {
        // Rounded half away from zero; prices are positive, so halves round up.
        (sum / self.period as f64).round()
    }
}
