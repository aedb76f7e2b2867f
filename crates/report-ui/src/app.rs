//! Application state and TUI event loop for the usage report viewer.
//!
//! [`App`] owns the theme and the report data handed over by the pipeline,
//! and drives the chart view until the user quits.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use report_core::models::DailyTotal;

use crate::chart_view;
use crate::themes::Theme;

/// Root application state for the report TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
}

impl App {
    /// Construct the application with the given theme name.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
        }
    }

    /// Run the static chart view, then wait for `q` / `Ctrl+C`.
    ///
    /// The report was fully built before this is called, so the loop only
    /// redraws and polls the keyboard; there is no background work.
    pub fn run_chart(
        self,
        totals: Vec<DailyTotal>,
        grand_total: f64,
        skipped_rows: usize,
    ) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                if totals.is_empty() {
                    chart_view::render_no_data(frame, area, &self.theme);
                } else {
                    chart_view::render_chart_view(
                        frame,
                        area,
                        &totals,
                        grand_total,
                        skipped_rows,
                        &self.theme,
                    );
                }
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        _ => {}
                    }
                }
            }
        }

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
