//! Date-range filtering over the ordered quote sequence.

use crate::domain::{Quote, TimeInterval};

/// Select the quotes whose timestamp lies within `interval`, inclusive on
/// both ends.
///
/// The sequence is ordered by ascending date, so the selection is a
/// contiguous subslice — a view into the input, found by binary search.
/// Nothing is copied, mutated, or re-sorted. Empty results (including
/// inverted intervals) come back as the empty slice.
pub fn quotes_between(quotes: &[Quote], interval: TimeInterval) -> &[Quote] {
    if interval.is_empty() {
        return &[];
    }
    let start = quotes.partition_point(|q| q.time_ms < interval.begin_ms);
    let end = quotes.partition_point(|q| q.time_ms <= interval.end_ms);
    &quotes[start..end.max(start)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::make_quotes;

    #[test]
    fn filter_is_inclusive_on_both_ends() {
        let quotes = make_quotes(&[1.0, 2.0, 3.0]);
        let (t1, t2, t3) = (quotes[0].time_ms, quotes[1].time_ms, quotes[2].time_ms);

        let selected = quotes_between(&quotes, TimeInterval::new(t1, t2));
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].close, 1.0);
        assert_eq!(selected[1].close, 2.0);

        let all = quotes_between(&quotes, TimeInterval::new(t1, t3));
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn single_instant_selects_exactly_one_quote() {
        let quotes = make_quotes(&[1.0, 2.0, 3.0]);
        let t2 = quotes[1].time_ms;
        let selected = quotes_between(&quotes, TimeInterval::new(t2, t2));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].close, 2.0);
    }

    #[test]
    fn interval_past_the_end_selects_nothing() {
        let quotes = make_quotes(&[1.0, 2.0, 3.0]);
        let t3 = quotes[2].time_ms;
        let selected = quotes_between(&quotes, TimeInterval::new(t3 + 1, t3 + 100));
        assert!(selected.is_empty());
    }

    #[test]
    fn inverted_interval_selects_nothing() {
        let quotes = make_quotes(&[1.0, 2.0, 3.0]);
        let selected =
            quotes_between(&quotes, TimeInterval::new(quotes[2].time_ms, quotes[0].time_ms));
        assert!(selected.is_empty());
    }

    #[test]
    fn filter_does_not_mutate_the_source() {
        let quotes = make_quotes(&[1.0, 2.0, 3.0]);
        let before = quotes.clone();
        let _ = quotes_between(&quotes, TimeInterval::new(quotes[0].time_ms, quotes[1].time_ms));
        let _ = quotes_between(&quotes, TimeInterval::new(5, 4));
        assert_eq!(quotes, before);
    }

    #[test]
    fn result_is_a_view_into_the_input() {
        let quotes = make_quotes(&[1.0, 2.0, 3.0, 4.0]);
        let selected =
            quotes_between(&quotes, TimeInterval::new(quotes[1].time_ms, quotes[2].time_ms));
        assert!(std::ptr::eq(&quotes[1], &selected[0]));
    }

    #[test]
    fn empty_input_selects_nothing() {
        let quotes: Vec<crate::domain::Quote> = Vec::new();
        assert!(quotes_between(&quotes, TimeInterval::new(0, i64::MAX)).is_empty());
    }

    #[test]
    fn interval_between_two_quotes_selects_nothing() {
        let quotes = make_quotes(&[1.0, 2.0]);
        let mid = TimeInterval::new(quotes[0].time_ms + 1, quotes[1].time_ms - 1);
        assert!(quotes_between(&quotes, mid).is_empty());
    }
}
