//! Neon-on-dark style helpers shared by all widgets.

use ratatui::style::{Color, Modifier, Style};

use quotelab_core::signals::Signal;

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border() -> Style {
    accent()
}

pub fn panel_title() -> Style {
    accent_bold()
}

/// Marker style for a buy/sell signal on the chart.
pub fn signal_style(signal: Signal) -> Style {
    match signal {
        Signal::Buy => positive().add_modifier(Modifier::BOLD),
        Signal::Sell => negative().add_modifier(Modifier::BOLD),
    }
}

/// Marker glyph for a buy/sell signal on the chart.
pub fn signal_glyph(signal: Signal) -> &'static str {
    match signal {
        Signal::Buy => "▲",
        Signal::Sell => "▼",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_styles_use_the_pnl_colors() {
        assert_eq!(signal_style(Signal::Buy).fg, Some(POSITIVE));
        assert_eq!(signal_style(Signal::Sell).fg, Some(NEGATIVE));
    }

    #[test]
    fn signal_glyphs_point_the_right_way() {
        assert_eq!(signal_glyph(Signal::Buy), "▲");
        assert_eq!(signal_glyph(Signal::Sell), "▼");
    }
}
