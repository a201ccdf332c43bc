//! Top-level UI layout — chart, slider, status bar, overlays.

pub mod chart_panel;
pub mod overlays;
pub mod slider;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;
use crate::ui::chart_panel::ChartPanel;
use crate::ui::slider::RangeSlider;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: chart + 4-line slider + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(f.area());

    let chart_area = chunks[0];
    let slider_area = chunks[1];
    let status_area = chunks[2];

    f.render_widget(
        ChartPanel::new(app.visible(), app.period, app.show_markers, &app.source_label),
        chart_area,
    );

    match app.full {
        Some(full) => f.render_widget(
            RangeSlider::new(full, app.view, app.step.label()),
            slider_area,
        ),
        None => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border())
                .title(" Range ");
            let inner = block.inner(slider_area);
            f.render_widget(block, slider_area);
            f.render_widget(
                Paragraph::new(Span::styled("no data loaded", theme::muted())),
                inner,
            );
        }
    }

    status_bar::render(f, status_area, app);

    // Overlays on top.
    match app.overlay {
        Overlay::Help => overlays::render_help(f, chart_area),
        Overlay::Warnings => overlays::render_warnings(f, chart_area, app),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
