//! Date-keyed merge of a subject price series against a benchmark series.

use apperate_api::types::PriceRecord;
use serde::Serialize;

/// One day of the subject/benchmark comparison.
///
/// The subject side is always the full record; the benchmark side is the
/// first benchmark record sharing the subject's date, or `None` when the
/// date has no match. `alpha_volume` is the volume differential, `NaN`
/// (JSON `null`) when either side's volume is absent.
#[derive(Debug, Clone, Serialize)]
pub struct AlphaEntry {
    #[serde(rename = "priceDate")]
    pub price_date: String,
    #[serde(rename = "ticker")]
    pub subject: PriceRecord,
    #[serde(rename = "benchmark")]
    pub benchmark: Option<PriceRecord>,
    #[serde(rename = "alpha-volume")]
    pub alpha_volume: f64,
}

fn volume_diff(subject: &PriceRecord, benchmark: Option<&PriceRecord>) -> f64 {
    match (subject.volume, benchmark.and_then(|b| b.volume)) {
        (Some(s), Some(b)) => (s - b) as f64,
        _ => f64::NAN,
    }
}

/// Left-joins the subject series against the benchmark series by date key.
///
/// One entry per subject record, in subject order; benchmark-only dates are
/// dropped. When several benchmark records share a date, the first match
/// wins.
pub fn merge_alpha(subject: Vec<PriceRecord>, benchmark: &[PriceRecord]) -> Vec<AlphaEntry> {
    subject
        .into_iter()
        .map(|record| {
            let matched = benchmark
                .iter()
                .find(|candidate| candidate.price_date == record.price_date);
            let alpha_volume = volume_diff(&record, matched);
            AlphaEntry {
                price_date: record.price_date.clone(),
                subject: record,
                benchmark: matched.cloned(),
                alpha_volume,
            }
        })
        .collect()
}
