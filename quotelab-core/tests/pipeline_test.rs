//! End-to-end pipeline tests: CSV bytes → parse → analyze → filter → classify.

use chrono::NaiveDate;
use quotelab_core::analysis::{quotes_between, SmaAnalyzer};
use quotelab_core::data::load_from_reader;
use quotelab_core::domain::TimeInterval;
use quotelab_core::signals::classify;

/// CSV with `n` records, closes 1..=n, consecutive days from 2020-01-01.
fn synthetic_csv(n: u32) -> String {
    let mut out = String::from("Date,Open,High,Low,Close,AdjClose,Volume\n");
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    for i in 0..n {
        let date = base + chrono::Duration::days(i as i64);
        let close = f64::from(i + 1);
        out.push_str(&format!(
            "{date},{open},{high},{low},{close},{close},1000\n",
            open = close,
            high = close + 1.0,
            low = close - 1.0,
        ));
    }
    out
}

#[test]
fn load_analyze_filter_last_ten_of_105() {
    let load = load_from_reader(synthetic_csv(105).as_bytes()).unwrap();
    assert!(load.warnings.is_empty());
    assert_eq!(load.quotes.len(), 105);

    let analyzed = SmaAnalyzer::new(100).analyze(load.quotes);

    // Filter to the last 10 records by date.
    let begin = analyzed[95].time_ms;
    let end = analyzed[104].time_ms;
    let view = quotes_between(analyzed.as_slice(), TimeInterval::new(begin, end));

    assert_eq!(view.len(), 10);
    assert_eq!(view[0].close, 96.0);
    assert_eq!(view[9].close, 105.0);

    // Every filtered quote sits past the warmup, so all carry an SMA, and
    // over a strictly increasing series the SMA is non-decreasing.
    let smas: Vec<f64> = view.iter().map(|q| q.sma.unwrap()).collect();
    assert!(smas.windows(2).all(|w| w[0] <= w[1]), "sma not monotone: {smas:?}");
}

#[test]
fn sma_values_come_from_the_full_history_not_the_view() {
    let load = load_from_reader(synthetic_csv(150).as_bytes()).unwrap();
    let analyzed = SmaAnalyzer::new(100).analyze(load.quotes);

    // mean(1..=100) = 50.5 → 51, mean(51..=150) = 100.5 → 101
    assert_eq!(analyzed[99].sma, Some(51.0));
    assert_eq!(analyzed[149].sma, Some(101.0));

    // A narrow view still sees the full-history values untouched.
    let view = quotes_between(
        analyzed.as_slice(),
        TimeInterval::new(analyzed[149].time_ms, analyzed[149].time_ms),
    );
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].sma, Some(101.0));
}

#[test]
fn short_history_yields_no_sma_and_no_signals() {
    let load = load_from_reader(synthetic_csv(99).as_bytes()).unwrap();
    let analyzed = SmaAnalyzer::new(100).analyze(load.quotes);

    assert!(analyzed.iter().all(|q| q.sma.is_none()));
    assert!(classify(analyzed.as_slice()).is_empty());
}

#[test]
fn rising_series_classifies_post_warmup_quotes_as_buys() {
    let load = load_from_reader(synthetic_csv(120).as_bytes()).unwrap();
    let analyzed = SmaAnalyzer::new(100).analyze(load.quotes);
    let sets = classify(analyzed.as_slice());

    // On a strictly increasing series every SMA lags the close.
    assert_eq!(sets.buy, (99..120).collect::<Vec<_>>());
    assert!(sets.sell.is_empty());
}

#[test]
fn malformed_records_degrade_locally_not_globally() {
    let mut csv = synthetic_csv(110);
    // Corrupt record 3's date and record 5's close (tail "4,5,5,1000").
    csv = csv.replacen("2020-01-03,", "garbage,", 1);
    csv = csv.replacen(",5,5,1000", ",five,5,1000", 1);

    let load = load_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(load.quotes.len(), 109); // date-corrupt record dropped
    assert_eq!(load.warnings.len(), 2);

    let analyzed = SmaAnalyzer::new(100).analyze(load.quotes);

    // The NaN close sits at index 3, so exactly the windows ending at
    // 99..=102 are poisoned; everything later recovers.
    assert!(analyzed[3].close.is_nan());
    for i in 99..=102 {
        assert_eq!(analyzed[i].sma, None, "window {i} should be poisoned");
    }
    for i in 103..109 {
        assert!(analyzed[i].sma.is_some(), "window {i} should have recovered");
    }
}
