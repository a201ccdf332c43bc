//! QuoteLab TUI — interactive close/SMA chart over a single quote history.
//!
//! One chart, one slider, one status line:
//! - Chart — closing price and its trailing average for the selected range,
//!   with optional buy/sell markers
//! - Slider — the selected date window inside the full history
//! - Status bar — key hints, range label, signal totals, parse warnings
//!
//! The analysis pipeline runs once at startup; every slider movement only
//! re-filters the already-analyzed sequence and redraws on the next frame.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod test_helpers;
