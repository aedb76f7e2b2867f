//! Header normalization for usage report CSV files.
//!
//! GitHub ships the report with human-readable headers such as
//! `"Price Per Unit ($)"` whose exact spelling has drifted between export
//! versions. All lookups therefore go through [`normalize_header`], which
//! collapses every header into a canonical camel-case key.

/// Canonical column keys produced by [`normalize_header`].
pub mod columns {
    pub const ACTIONS_WORKFLOW: &str = "actionsWorkflow";
    pub const DATE: &str = "date";
    pub const PRICE_PER_UNIT: &str = "pricePerUnit";
    pub const PRODUCT: &str = "product";
    pub const QUANTITY: &str = "quantity";
    pub const REPOSITORY_SLUG: &str = "repositorySlug";
    pub const UNIT_TYPE: &str = "unitType";
}

/// The logical columns every usage report must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    columns::ACTIONS_WORKFLOW,
    columns::DATE,
    columns::PRICE_PER_UNIT,
    columns::PRODUCT,
    columns::QUANTITY,
    columns::REPOSITORY_SLUG,
    columns::UNIT_TYPE,
];

/// Normalize a raw header string into a camel-case identifier.
///
/// The whole string is lower-cased, then every run of one-or-more
/// non-alphanumeric characters is dropped and the character following the
/// run is upper-cased. Leading and trailing separator runs are dropped
/// outright. Idempotent on already-normalized input.
///
/// # Examples
///
/// ```
/// use report_core::headers::normalize_header;
///
/// assert_eq!(normalize_header("Price Per Unit"), "pricePerUnit");
/// assert_eq!(normalize_header("Repository Slug"), "repositorySlug");
/// assert_eq!(normalize_header("pricePerUnit"), "pricePerUnit");
/// assert_eq!(normalize_header(""), "");
/// ```
pub fn normalize_header(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    out
}
