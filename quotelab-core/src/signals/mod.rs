//! Buy/sell classification against the trailing average.
//!
//! A quote whose close sits above its SMA is a bullish (buy) signal; below,
//! bearish (sell). Quotes without an SMA — the warmup prefix, short
//! sequences, NaN-poisoned windows — and quotes sitting exactly on the
//! average carry no signal at all.

use serde::{Deserialize, Serialize};

use crate::domain::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
}

impl Signal {
    pub fn label(self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
        }
    }
}

impl Quote {
    /// Classify this quote, or `None` when there is nothing to compare.
    ///
    /// A NaN close fails both comparisons and lands on `None` as well.
    pub fn signal(&self) -> Option<Signal> {
        let sma = self.sma?;
        if sma < self.close {
            Some(Signal::Buy)
        } else if self.close < sma {
            Some(Signal::Sell)
        } else {
            None
        }
    }
}

/// Signal partition of an analyzed sequence: indices into the input slice,
/// in input order. Indexed rather than cloned so the chart can place markers
/// by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalSets {
    pub buy: Vec<usize>,
    pub sell: Vec<usize>,
}

impl SignalSets {
    pub fn total(&self) -> usize {
        self.buy.len() + self.sell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }
}

/// Partition an analyzed sequence into buy and sell signal sets.
pub fn classify(quotes: &[Quote]) -> SignalSets {
    let mut sets = SignalSets::default();
    for (i, quote) in quotes.iter().enumerate() {
        match quote.signal() {
            Some(Signal::Buy) => sets.buy.push(i),
            Some(Signal::Sell) => sets.sell.push(i),
            None => {}
        }
    }
    sets
}
