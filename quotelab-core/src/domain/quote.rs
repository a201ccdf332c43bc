//! Quote — one trading day's price record plus derived fields.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// OHLC quote for a single trading day.
///
/// `time_ms` is derived once at parse time (UTC midnight of `date`) and is
/// what range filtering and chart positioning compare against. `sma` is
/// filled in by the analyzer once the quote has enough trailing history;
/// until then it is `None`, never zero.
///
/// Numeric fields that failed coercion at parse time hold `f64::NAN`; the
/// load reports those records as warnings, and any SMA window touching a
/// NaN close stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub date: NaiveDate,
    pub time_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Retained from the source for reference; excluded from analysis.
    pub adj_close: f64,
    /// Unused downstream; kept for completeness.
    pub volume: u64,
    pub sma: Option<f64>,
}

impl Quote {
    /// UTC-midnight millisecond timestamp for a trading day.
    pub fn time_ms_for(date: NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    pub fn has_sma(&self) -> bool {
        self.sma.is_some()
    }

    /// Returns true if any price field is NaN (partially malformed record).
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }
}
