//! Daily-return projection over raw price records.

use apperate_api::types::PriceRecord;
use serde::Serialize;

/// A price record augmented with close-minus-open returns for each of the
/// three price variants. A missing operand on either side yields `NaN`,
/// which serializes as JSON `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReturn {
    #[serde(flatten)]
    pub record: PriceRecord,
    pub daily_return: f64,
    pub f_daily_return: f64,
    pub u_daily_return: f64,
}

/// Rounds to two decimal places, half away from zero. Prices cannot be
/// below cents.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn spread(close: Option<f64>, open: Option<f64>) -> f64 {
    match (close, open) {
        (Some(close), Some(open)) => round2(close - open),
        _ => f64::NAN,
    }
}

/// Derives the three daily-return fields for every record, in order.
///
/// This is a pure projection: the derived fields are computed only from the
/// source record, so recomputing from an output's inner record gives the
/// same values.
pub fn add_returns(records: Vec<PriceRecord>) -> Vec<DailyReturn> {
    records
        .into_iter()
        .map(|record| {
            let daily_return = spread(record.close, record.open);
            let f_daily_return = spread(record.fclose, record.fopen);
            let u_daily_return = spread(record.uclose, record.uopen);
            DailyReturn {
                record,
                daily_return,
                f_daily_return,
                u_daily_return,
            }
        })
        .collect()
}
