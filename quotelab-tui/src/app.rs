//! Application state — single-owner, main-thread only.
//!
//! The analyzed sequence is read-only once it arrives here. Every key event
//! mutates at most the view interval (and small UI flags); the next frame
//! re-filters and redraws synchronously. There is no worker thread and no
//! way for two renders to overlap.

use chrono::{DateTime, NaiveDate};

use quotelab_core::analysis::{quotes_between, AnalyzedQuotes};
use quotelab_core::data::ParseWarning;
use quotelab_core::domain::{Quote, TimeInterval};
use quotelab_core::signals::SignalSets;

const DAY_MS: i64 = 86_400_000;

/// Which overlay is on top of the chart, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Warnings,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Step applied by the range keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSize {
    Day,
    Week,
    Month,
    Year,
}

impl StepSize {
    pub fn days(self) -> i64 {
        match self {
            StepSize::Day => 1,
            StepSize::Week => 7,
            StepSize::Month => 30,
            StepSize::Year => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StepSize::Day => "day",
            StepSize::Week => "week",
            StepSize::Month => "month",
            StepSize::Year => "year",
        }
    }

    pub fn next(self) -> StepSize {
        match self {
            StepSize::Day => StepSize::Week,
            StepSize::Week => StepSize::Month,
            StepSize::Month => StepSize::Year,
            StepSize::Year => StepSize::Day,
        }
    }
}

pub struct AppState {
    quotes: AnalyzedQuotes,
    pub signals: SignalSets,
    pub warnings: Vec<ParseWarning>,
    pub source_label: String,
    pub period: usize,

    /// Bounds of the whole history; `None` when the load produced no quotes.
    pub full: Option<TimeInterval>,
    /// Currently selected window. Always inside `full`, `begin <= end`.
    pub view: TimeInterval,
    pub step: StepSize,
    pub show_markers: bool,

    pub overlay: Overlay,
    pub warning_scroll: usize,
    pub status: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(
        quotes: AnalyzedQuotes,
        signals: SignalSets,
        warnings: Vec<ParseWarning>,
        source_label: String,
        period: usize,
    ) -> Self {
        let full = quotes.full_interval();
        let view = full.unwrap_or(TimeInterval::new(0, 0));

        let status = if warnings.is_empty() {
            None
        } else {
            Some((
                format!("{} record(s) had parse issues — press w", warnings.len()),
                StatusLevel::Warning,
            ))
        };

        Self {
            quotes,
            signals,
            warnings,
            source_label,
            period,
            full,
            view,
            step: StepSize::Month,
            show_markers: true,
            overlay: Overlay::None,
            warning_scroll: 0,
            status,
            running: true,
        }
    }

    /// The quotes inside the current view — a subslice of the analyzed
    /// sequence, recomputed on demand. Never triggers re-analysis.
    pub fn visible(&self) -> &[Quote] {
        quotes_between(self.quotes.as_slice(), self.view)
    }

    pub fn quotes(&self) -> &[Quote] {
        self.quotes.as_slice()
    }

    fn step_ms(&self) -> i64 {
        self.step.days() * DAY_MS
    }

    /// Slide the whole window by `direction` steps, keeping its width.
    pub fn shift_view(&mut self, direction: i64) {
        let Some(full) = self.full else { return };
        let width = self.view.span_ms();
        let begin = (self.view.begin_ms + direction * self.step_ms())
            .min(full.end_ms - width)
            .max(full.begin_ms);
        self.view = TimeInterval::new(begin, begin + width);
    }

    /// Move the left edge by `direction` steps; clamped to `[full.begin, end]`.
    pub fn adjust_begin(&mut self, direction: i64) {
        let Some(full) = self.full else { return };
        self.view.begin_ms = (self.view.begin_ms + direction * self.step_ms())
            .clamp(full.begin_ms, self.view.end_ms);
    }

    /// Move the right edge by `direction` steps; clamped to `[begin, full.end]`.
    pub fn adjust_end(&mut self, direction: i64) {
        let Some(full) = self.full else { return };
        self.view.end_ms = (self.view.end_ms + direction * self.step_ms())
            .clamp(self.view.begin_ms, full.end_ms);
    }

    /// Tighten (`+1`) or widen (`-1`) both edges by one step.
    pub fn zoom(&mut self, direction: i64) {
        self.adjust_begin(direction);
        self.adjust_end(-direction);
    }

    pub fn reset_view(&mut self) {
        if let Some(full) = self.full {
            self.view = full;
        }
    }

    pub fn cycle_step(&mut self) {
        self.step = self.step.next();
        self.set_status(format!("step: 1 {}", self.step.label()));
    }

    pub fn toggle_markers(&mut self) {
        self.show_markers = !self.show_markers;
        let state = if self.show_markers { "on" } else { "off" };
        self.set_status(format!("signal markers {state}"));
    }

    pub fn set_status(&mut self, message: String) {
        self.status = Some((message, StatusLevel::Info));
    }

    /// Human-readable `begin — end` label for the current view.
    pub fn range_label(&self) -> String {
        format!(
            "{} — {}",
            date_of_ms(self.view.begin_ms),
            date_of_ms(self.view.end_ms)
        )
    }
}

/// Calendar date of a millisecond timestamp (UTC).
pub fn date_of_ms(time_ms: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(time_ms)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;
    use proptest::prelude::*;

    #[test]
    fn new_app_views_the_full_range() {
        let app = sample_app(30);
        assert_eq!(Some(app.view), app.full);
        assert_eq!(app.visible().len(), 30);
    }

    #[test]
    fn empty_load_has_no_full_range_and_mutators_are_inert() {
        let mut app = sample_app(0);
        assert!(app.full.is_none());
        app.shift_view(5);
        app.adjust_begin(-3);
        app.zoom(1);
        app.reset_view();
        assert!(app.visible().is_empty());
    }

    #[test]
    fn adjust_begin_narrows_the_view() {
        let mut app = sample_app(30);
        app.step = StepSize::Week;
        app.adjust_begin(1);
        assert_eq!(app.visible().len(), 23);
        // Left edge never crosses the right edge.
        app.step = StepSize::Year;
        app.adjust_begin(10);
        assert_eq!(app.view.begin_ms, app.view.end_ms);
        assert_eq!(app.visible().len(), 1);
    }

    #[test]
    fn reset_restores_the_full_range() {
        let mut app = sample_app(30);
        app.step = StepSize::Week;
        app.adjust_begin(2);
        app.adjust_end(-1);
        app.reset_view();
        assert_eq!(Some(app.view), app.full);
    }

    #[test]
    fn shift_preserves_width_and_stays_in_bounds() {
        let mut app = sample_app(30);
        app.step = StepSize::Week;
        app.adjust_begin(3); // 9-day window at the right edge
        let width = app.view.span_ms();

        app.shift_view(-1);
        assert_eq!(app.view.span_ms(), width);

        // Slamming into the left edge keeps the width.
        app.shift_view(-100);
        let full = app.full.unwrap();
        assert_eq!(app.view.begin_ms, full.begin_ms);
        assert_eq!(app.view.span_ms(), width);
    }

    #[test]
    fn step_cycles_through_all_sizes() {
        let mut step = StepSize::Day;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(step);
            step = step.next();
        }
        assert_eq!(step, StepSize::Day);
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn range_label_shows_both_dates() {
        let app = sample_app(5);
        let label = app.range_label();
        assert!(label.contains(" — "));
        assert!(label.starts_with("2024-01-02"));
    }

    proptest! {
        /// Any sequence of range mutations keeps the view well-formed:
        /// begin <= end and both edges inside the full interval.
        #[test]
        fn mutators_never_break_the_view_invariant(ops in prop::collection::vec(0..6_u8, 0..60)) {
            let mut app = sample_app(45);
            app.step = StepSize::Week;
            let full = app.full.unwrap();

            for op in ops {
                match op {
                    0 => app.shift_view(1),
                    1 => app.shift_view(-1),
                    2 => app.adjust_begin(1),
                    3 => app.adjust_end(-1),
                    4 => app.zoom(1),
                    _ => app.zoom(-1),
                }
                prop_assert!(app.view.begin_ms <= app.view.end_ms);
                prop_assert!(app.view.begin_ms >= full.begin_ms);
                prop_assert!(app.view.end_ms <= full.end_ms);
            }
        }
    }
}
