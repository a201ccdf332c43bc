//! Overlay widgets — help and the parse-warning report.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// Keyboard reference overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys ")
        .title_style(theme::accent_bold());

    let entries = [
        ("h / l, ←/→", "slide the window by one step"),
        ("[ / ]", "move the begin edge"),
        ("{ / }", "move the end edge"),
        ("k / j, ↑/↓", "zoom in / out"),
        ("s", "cycle step size (day/week/month/year)"),
        ("r", "reset to the full range"),
        ("m", "toggle buy/sell markers"),
        ("w", "show parse warnings"),
        ("q, Esc", "quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (keys, what) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<12}"), theme::accent()),
            Span::styled(what, theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to dismiss...",
        theme::neutral(),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

/// Parse-warning report overlay.
pub fn render_warnings(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::warning())
        .title(format!(
            " Parse Warnings ({}) [Esc]close [j/k]scroll ",
            app.warnings.len()
        ))
        .title_style(theme::warning());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.warnings.is_empty() {
        let text = Paragraph::new(Span::styled("No warnings recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.warning_scroll;
    let end = (start + visible_height).min(app.warnings.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let style = if i == app.warning_scroll {
            theme::warning().add_modifier(Modifier::BOLD)
        } else {
            theme::secondary()
        };
        lines.push(Line::from(Span::styled(
            format!("{:>4}. {}", i + 1, app.warnings[i]),
            style,
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
