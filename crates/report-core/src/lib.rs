//! Core domain layer for the GitHub usage report viewer.
//!
//! Holds the record and daily-total types, header normalization, the price
//! calculator, display formatting, error types and CLI settings shared by
//! the data, runtime and UI crates.

pub mod error;
pub mod formatting;
pub mod headers;
pub mod models;
pub mod pricing;
pub mod settings;
