//! Keyboard input dispatch — overlays first, then global keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Overlay};

/// Handle a key event. Every range mutation is synchronous; the next frame
/// redraws from the freshly filtered view.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Warnings => {
            handle_warnings_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('w') => {
            app.warning_scroll = 0;
            app.overlay = Overlay::Warnings;
        }

        KeyCode::Char('r') => app.reset_view(),
        KeyCode::Char('s') => app.cycle_step(),
        KeyCode::Char('m') => app.toggle_markers(),

        // Slide the window.
        KeyCode::Char('h') | KeyCode::Left => app.shift_view(-1),
        KeyCode::Char('l') | KeyCode::Right => app.shift_view(1),

        // Move individual edges.
        KeyCode::Char('[') => app.adjust_begin(-1),
        KeyCode::Char(']') => app.adjust_begin(1),
        KeyCode::Char('{') => app.adjust_end(-1),
        KeyCode::Char('}') => app.adjust_end(1),

        // Zoom.
        KeyCode::Char('k') | KeyCode::Up => app.zoom(1),
        KeyCode::Char('j') | KeyCode::Down => app.zoom(-1),

        _ => {}
    }
}

fn handle_warnings_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('w') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.warning_scroll + 1 < app.warnings.len() {
                app.warning_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.warning_scroll = app.warning_scroll.saturating_sub(1);
        }
        _ => {}
    }
}
