//! Bottom status bar — key hints, range label, signal totals, last message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(" q:quit  ?:help", theme::muted()));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(app.range_label(), theme::accent()));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("▲ {}", app.signals.buy.len()),
        theme::positive(),
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        format!("▼ {}", app.signals.sell.len()),
        theme::negative(),
    ));

    if !app.warnings.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} warning(s) [w]", app.warnings.len()),
            theme::warning(),
        ));
    }

    if let Some((msg, level)) = &app.status {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
