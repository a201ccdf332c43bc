//! Range slider widget — the selected date window inside the full history.
//!
//! Keyboard-driven equivalent of a two-handle range slider: a track spanning
//! the full history with the selected `[begin, end]` span highlighted, and
//! the window's dates printed underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use quotelab_core::domain::TimeInterval;

use crate::app::date_of_ms;
use crate::theme;

const TRACK: &str = "─";
const SELECTED: &str = "█";

pub struct RangeSlider<'a> {
    full: TimeInterval,
    view: TimeInterval,
    step_label: &'a str,
}

impl<'a> RangeSlider<'a> {
    pub fn new(full: TimeInterval, view: TimeInterval, step_label: &'a str) -> Self {
        Self {
            full,
            view,
            step_label,
        }
    }

    /// Column span of the selected window on a track of `width` cells.
    ///
    /// A zero-span full interval (single-quote history) selects the whole
    /// track rather than dividing by zero.
    fn selected_columns(&self, width: u16) -> (u16, u16) {
        let width = width.max(1);
        let span = self.full.span_ms();
        if span == 0 {
            return (0, width - 1);
        }

        let frac = |t: i64| (t - self.full.begin_ms) as f64 / span as f64;
        let first = (frac(self.view.begin_ms) * f64::from(width - 1)).round() as u16;
        let last = (frac(self.view.end_ms) * f64::from(width - 1)).round() as u16;
        (first.min(width - 1), last.min(width - 1).max(first))
    }
}

impl Widget for RangeSlider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border())
            .title(format!(
                " Range  h/l:slide  [/]:begin  {{/}}:end  j/k:zoom  s:step({})  r:reset ",
                self.step_label
            ))
            .title_style(theme::panel_title());

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Line 1: the track.
        let (first, last) = self.selected_columns(inner.width);
        let mut track = Vec::with_capacity(inner.width as usize);
        for col in 0..inner.width {
            if col >= first && col <= last {
                track.push(Span::styled(SELECTED, theme::accent()));
            } else {
                track.push(Span::styled(TRACK, theme::muted()));
            }
        }
        buf.set_line(inner.x, inner.y, &Line::from(track), inner.width);

        // Line 2: window dates, left- and right-aligned.
        if inner.height >= 2 {
            let begin = date_of_ms(self.view.begin_ms).to_string();
            let end = date_of_ms(self.view.end_ms).to_string();
            let label_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);

            let pad = (inner.width as usize).saturating_sub(begin.len() + end.len());
            let line = Line::from(vec![
                Span::styled(begin, theme::secondary()),
                Span::raw(" ".repeat(pad)),
                Span::styled(end, theme::secondary()),
            ]);
            Paragraph::new(line).render(label_area, buf);
        }
    }
}
