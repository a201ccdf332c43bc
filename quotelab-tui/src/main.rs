//! QuoteLab — interactive close/SMA chart with a date-range slider.
//!
//! Loads a quote CSV, runs the analysis pipeline once (parse → SMA →
//! classify), then enters a synchronous render loop. Slider movements only
//! re-filter the already-analyzed sequence.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use quotelab_core::analysis::{SmaAnalyzer, DEFAULT_PERIOD};
use quotelab_core::data::load_csv;
use quotelab_core::signals::classify;

use quotelab_tui::app::AppState;
use quotelab_tui::{input, ui};

#[derive(Parser)]
#[command(
    name = "quotelab",
    about = "QuoteLab — closing price and trailing average over a selectable date range"
)]
struct Cli {
    /// Quote CSV with columns Date,Open,High,Low,Close,AdjClose,Volume.
    csv: PathBuf,

    /// SMA window length in trading days.
    #[arg(long, default_value_t = DEFAULT_PERIOD)]
    period: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(cli.period >= 1, "--period must be >= 1");

    // The whole pipeline runs once, before the terminal is touched.
    let load = load_csv(&cli.csv)
        .with_context(|| format!("failed to load quotes from {}", cli.csv.display()))?;
    let quotes = SmaAnalyzer::new(cli.period).analyze(load.quotes);
    let signals = classify(quotes.as_slice());

    let source_label = cli
        .csv
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.csv.display().to_string());

    let mut app = AppState::new(quotes, signals, load.warnings, source_label, cli.period);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render from the current view.
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input (50ms timeout for ~20 FPS tick). Each event is
        //    handled to completion before the next draw.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
