//! Chart panel — closing price with trailing-average overlay.
//!
//! Displays, for the quotes in the current view:
//! - Close line (primary)
//! - SMA line (starts once enough history exists)
//! - Buy/sell markers at signal quotes (toggleable)
//!
//! Fewer than two drawable points degrades to an informative empty frame;
//! it never panics.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

use quotelab_core::domain::Quote;
use quotelab_core::signals::Signal;

use crate::app::date_of_ms;
use crate::theme;

pub struct ChartPanel<'a> {
    quotes: &'a [Quote],
    period: usize,
    show_markers: bool,
    label: &'a str,
}

impl<'a> ChartPanel<'a> {
    pub fn new(quotes: &'a [Quote], period: usize, show_markers: bool, label: &'a str) -> Self {
        Self {
            quotes,
            period,
            show_markers,
            label,
        }
    }

    fn title(&self) -> String {
        let buys = self
            .quotes
            .iter()
            .filter(|q| q.signal() == Some(Signal::Buy))
            .count();
        let sells = self
            .quotes
            .iter()
            .filter(|q| q.signal() == Some(Signal::Sell))
            .count();
        format!(
            " {} | {} quotes | ▲ {} ▼ {} ",
            self.label,
            self.quotes.len(),
            buys,
            sells
        )
    }
}

impl Widget for ChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border())
            .title(self.title())
            .title_style(theme::panel_title())
            .style(Style::default().bg(theme::BACKGROUND));

        // Points with a NaN close have no y position; leave them out of the
        // line but keep their quotes counted in the title.
        let close_data: Vec<(f64, f64)> = self
            .quotes
            .iter()
            .filter(|q| !q.close.is_nan())
            .map(|q| (q.time_ms as f64, q.close))
            .collect();

        let sma_data: Vec<(f64, f64)> = self
            .quotes
            .iter()
            .filter_map(|q| q.sma.map(|sma| (q.time_ms as f64, sma)))
            .collect();

        if close_data.is_empty() && sma_data.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled(
                "No quotes in the selected range.",
                theme::muted(),
            ))
            .render(inner, buf);
            return;
        }

        // Y bounds span both series; the lower bound follows whichever of
        // close/SMA dips lower in the window.
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(_, v) in close_data.iter().chain(sma_data.iter()) {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
        let y_range = y_max - y_min;
        let y_pad = if y_range > 0.0 { y_range * 0.05 } else { 1.0 };
        let y_lower = y_min - y_pad;
        let y_upper = y_max + y_pad;

        // X bounds come from the visible quotes themselves.
        let first_ms = self.quotes[0].time_ms;
        let last_ms = self.quotes[self.quotes.len() - 1].time_ms;
        let x_min = first_ms as f64;
        let x_max = if last_ms > first_ms {
            last_ms as f64
        } else {
            (first_ms + 1) as f64 // singleton view
        };

        let mid_ms = first_ms + (last_ms - first_ms) / 2;
        let x_labels = vec![
            Span::raw(date_of_ms(first_ms).to_string()),
            Span::raw(date_of_ms(mid_ms).to_string()),
            Span::raw(date_of_ms(last_ms).to_string()),
        ];
        let y_labels = vec![
            Span::raw(format!("{y_lower:.0}")),
            Span::raw(format!("{:.0}", (y_lower + y_upper) / 2.0)),
            Span::raw(format!("{y_upper:.0}")),
        ];

        let sma_name = format!("SMA({})", self.period);
        let datasets = vec![
            Dataset::default()
                .name("Close")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme::accent())
                .data(&close_data),
            Dataset::default()
                .name(sma_name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme::neutral())
                .data(&sma_data),
        ];

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title(Span::styled("Time", theme::secondary()))
                    .style(theme::muted())
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("Close", theme::secondary()))
                    .style(theme::muted())
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        chart.render(area, buf);

        if self.show_markers {
            self.render_markers(area, buf, x_min, x_max, y_lower, y_upper);
        }
    }
}

impl ChartPanel<'_> {
    /// Paint signal markers directly into the buffer after the chart.
    ///
    /// Ratatui's Chart widget has no point annotations, so the glyphs are
    /// written at approximate plot positions: the inner area minus the
    /// Y-label gutter (~8 columns) and the bottom axis rows.
    fn render_markers(
        &self,
        area: Rect,
        buf: &mut Buffer,
        x_min: f64,
        x_max: f64,
        y_lower: f64,
        y_upper: f64,
    ) {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let plot_left = inner.x + 8;
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(8);
        let plot_height = inner.height.saturating_sub(2);

        if plot_width == 0 || plot_height == 0 || x_max <= x_min {
            return;
        }

        for quote in self.quotes {
            let Some(signal) = quote.signal() else { continue };
            if quote.close.is_nan() {
                continue;
            }

            let x_frac = (quote.time_ms as f64 - x_min) / (x_max - x_min);
            let y_frac = if (y_upper - y_lower).abs() > 1e-9 {
                (quote.close - y_lower) / (y_upper - y_lower)
            } else {
                0.5
            };

            let px = plot_left + (x_frac * f64::from(plot_width - 1)) as u16;
            // Y is inverted (0 = top of screen).
            let py = plot_top + plot_height.saturating_sub(1)
                - (y_frac * f64::from(plot_height.saturating_sub(1))) as u16;

            if px < area.right().saturating_sub(1)
                && py >= plot_top
                && py < plot_top + plot_height
            {
                buf.set_string(px, py, theme::signal_glyph(signal), theme::signal_style(signal));
            }
        }
    }
}
