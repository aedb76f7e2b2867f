//! Terminal UI layer for the usage report viewer.
//!
//! Provides themes, the per-day cost bar chart view, and the application
//! event loop built on top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod themes;

pub use report_core as core;
