//! Runtime layer for the usage report viewer.
//!
//! Owns the current report between uploads and defines the
//! replace-on-new-load lifecycle the UI consumes.

pub mod store;

pub use report_core as core;
pub use report_data as data;
