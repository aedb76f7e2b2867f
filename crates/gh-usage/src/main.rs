mod bootstrap;

use anyhow::Result;
use clap::Parser;
use report_core::formatting::{format_date_range, format_price};
use report_core::settings::Settings;
use report_data::report::UsageReport;
use report_runtime::store::ReportStore;
use report_ui::app::App;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("gh-usage v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Report: {}, View: {}, Theme: {}",
        settings.report.display(),
        settings.view,
        settings.theme
    );

    let mut store = ReportStore::new();
    store.load(&settings.report)?;
    let report = store
        .current()
        .ok_or_else(|| anyhow::anyhow!("no report loaded"))?;

    match settings.view.as_str() {
        "plain" => print_plain(report),

        // "chart" is the clap default; value_parser admits nothing else.
        _ => {
            let totals = report.daily_totals.clone();
            let grand_total = report.grand_total;
            let skipped = report.issues.len();

            let app = App::new(&settings.theme);
            app.run_chart(totals, grand_total, skipped)?;

            // Repeat the skip summary after the alternate screen closes so
            // it is not lost with the TUI.
            if skipped > 0 {
                eprintln!("{} row(s) skipped; rerun with --view plain or --log-level DEBUG", skipped);
            }
        }
    }

    Ok(())
}

/// Print the per-day totals, the report's date range and the grand total
/// as plain text. Skipped rows go to stderr.
fn print_plain(report: &UsageReport) {
    for line in plain_summary(report) {
        println!("{line}");
    }

    if !report.issues.is_empty() {
        eprintln!("Skipped {} row(s):", report.issues.len());
        for issue in &report.issues {
            eprintln!("  line {}: {}", issue.line, issue.reason);
        }
    }
}

/// The stdout lines of the plain view: one per day, then the date range,
/// then the total.
fn plain_summary(report: &UsageReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .daily_totals
        .iter()
        .map(|day| format!("{}  {}", day.date, format_price(day.price)))
        .collect();
    if let Some(range) = format_date_range(&report.daily_totals) {
        lines.push(range);
    }
    lines.push(format!("Total: {}", format_price(report.grand_total)));
    lines
}

// ── Tests ──────────────────────────────────────────────────────────────────────
