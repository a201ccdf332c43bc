//! Inclusive time interval used by the range filter and the slider.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Quote;

/// A closed interval of millisecond timestamps, `[begin_ms, end_ms]`.
///
/// `begin_ms > end_ms` is a legal, empty interval — the filter and every
/// other consumer must treat it as "selects nothing" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub begin_ms: i64,
    pub end_ms: i64,
}

impl TimeInterval {
    pub fn new(begin_ms: i64, end_ms: i64) -> Self {
        Self { begin_ms, end_ms }
    }

    /// Interval spanning two trading days, inclusive.
    pub fn from_dates(begin: NaiveDate, end: NaiveDate) -> Self {
        Self {
            begin_ms: Quote::time_ms_for(begin),
            end_ms: Quote::time_ms_for(end),
        }
    }

    pub fn contains(&self, time_ms: i64) -> bool {
        self.begin_ms <= time_ms && time_ms <= self.end_ms
    }

    pub fn is_empty(&self) -> bool {
        self.begin_ms > self.end_ms
    }

    /// Width in milliseconds; zero for a single instant or an empty interval.
    pub fn span_ms(&self) -> i64 {
        (self.end_ms - self.begin_ms).max(0)
    }
}
