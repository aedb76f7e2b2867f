use ratatui::style::{Color, Modifier, Style};

/// Theme definition carrying all UI styles used by the chart view.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub warning: Style,

    // ── Chart ────────────────────────────────────────────────────────────────
    /// Filled portion of each day's bar.
    pub bar: Style,
    /// The value rendered on top of a bar.
    pub bar_value: Style,
    /// The date label under a bar.
    pub bar_label: Style,

    // ── Summary ──────────────────────────────────────────────────────────────
    /// The grand-total line below the chart.
    pub total: Style,
    pub border: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            warning: Style::default().fg(Color::Yellow),

            bar: Style::default().fg(Color::Cyan),
            bar_value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            bar_label: Style::default().fg(Color::Gray),

            total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            warning: Style::default().fg(Color::Magenta),

            bar: Style::default().fg(Color::Blue),
            bar_value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            bar_label: Style::default().fg(Color::DarkGray),

            total: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
        }
    }

    /// Resolve a theme by name, falling back to dark for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
