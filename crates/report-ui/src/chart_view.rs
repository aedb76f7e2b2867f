//! Per-day cost bar chart for the usage report TUI.
//!
//! Renders one bar per day in first-seen report order, a grand-total line
//! underneath, and a skipped-rows notice when the pipeline recorded issues.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use report_core::formatting::{format_date_range, format_price};
use report_core::models::DailyTotal;

use crate::themes::Theme;

/// Render the daily cost chart plus the summary footer into `area`.
///
/// Bar heights are the day totals in cents; the printed value on each bar
/// is the formatted dollar amount.
pub fn render_chart_view(
    frame: &mut Frame,
    area: Rect,
    totals: &[DailyTotal],
    grand_total: f64,
    skipped_rows: usize,
    theme: &Theme,
) {
    let [chart_area, footer_area] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(5)]).areas(area);

    let bars: Vec<Bar> = totals
        .iter()
        .map(|day| {
            // Sub-cent days still deserve a visible sliver, hence max(1).
            let cents = ((day.price * 100.0).round() as u64).max(1);
            Bar::default()
                .value(cents)
                .text_value(format_price(day.price))
                .label(Line::from(day.date.clone()))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" Cost per day "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(theme.bar)
        .value_style(theme.bar_value)
        .label_style(theme.bar_label);

    frame.render_widget(chart, chart_area);

    let mut footer = Vec::with_capacity(3);
    if let Some(range) = format_date_range(totals) {
        footer.push(Line::from(Span::styled(range, theme.text)));
    }
    footer.push(Line::from(Span::styled(
        format!("Total: {}", format_price(grand_total)),
        theme.total,
    )));
    if skipped_rows > 0 {
        footer.push(Line::from(Span::styled(
            format!("{} row(s) skipped — see the log for details", skipped_rows),
            theme.warning,
        )));
    } else {
        footer.push(Line::from(Span::styled(
            "Press 'q' or Ctrl+C to exit",
            theme.dim,
        )));
    }

    frame.render_widget(
        Paragraph::new(footer).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border),
        ),
        footer_area,
    );
}

/// Render a "no data" placeholder when the report has no data rows.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No usage rows in this report", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "The file parsed, but every data row was empty or skipped.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" GitHub Usage Report "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
