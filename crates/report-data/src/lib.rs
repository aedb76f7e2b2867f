//! Data ingestion layer for the usage report viewer.
//!
//! Responsible for reading the uploaded CSV, normalizing headers, parsing
//! typed records, pricing them, bucketing costs by day and running the
//! top-level report pipeline.

pub mod aggregator;
pub mod parser;
pub mod report;

pub use report_core as core;
