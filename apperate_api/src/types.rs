//! Response types for the Apperate data API.

use serde::{Deserialize, Serialize};

/// A single end-of-day price record from the `HISTORICAL_PRICES` dataset.
///
/// The response is a JSON array of these records, one per trading day.
/// Price fields come in three variants: raw (`open`/`close`),
/// split/dividend-adjusted (`fopen`/`fclose`), and unadjusted
/// (`uopen`/`uclose`). Every field except the date key is optional; the
/// dataset omits fields it has no value for, so partial records must parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    /// Calendar date key in "YYYY-MM-DD" form.
    pub price_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fopen: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fclose: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uopen: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uclose: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
}
