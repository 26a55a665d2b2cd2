//! Classification of a requested from/to date range.
//!
//! The day count is floor division of the millisecond difference between
//! the two bounds, both pinned to UTC midnight. Ranges of exactly 30 days
//! are valid; the cap rejects strictly more than 30.

use chrono::NaiveDate;

use crate::error::MetricsError;

const MS_PER_DAY: i64 = 86_400_000;

/// Longest span, in days, a bounded query may cover.
pub const MAX_RANGE_DAYS: i64 = 30;

/// A fully specified range with its computed day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Inclusive-start day difference; negative when the bounds are inverted.
    pub days: i64,
}

/// Outcome of classifying an optional from/to pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// Neither bound given; the caller substitutes a provider-native
    /// relative range.
    BothMissing,
    /// Exactly one bound given; the request must be rejected.
    OneMissing,
    /// Both bounds given, ordered, and within the cap.
    Valid(BoundedRange),
    /// Both bounds given and ordered, but more than [`MAX_RANGE_DAYS`] apart.
    TooLong(BoundedRange),
    /// The `from` bound is after the `to` bound.
    Inverted(BoundedRange),
}

/// Parses a "YYYY-MM-DD" bound. Strings with time components or any other
/// shape are errors, not guesses.
fn parse_date(input: &str) -> Result<NaiveDate, MetricsError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| MetricsError::DateParse(input.to_string()))
}

/// Parses both bounds and computes the day difference.
pub fn bounded(from: &str, to: &str) -> Result<BoundedRange, MetricsError> {
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    let diff_ms = to.signed_duration_since(from).num_milliseconds();
    Ok(BoundedRange {
        from,
        to,
        days: diff_ms.div_euclid(MS_PER_DAY),
    })
}

/// Classifies an optional from/to pair.
pub fn classify(from: Option<&str>, to: Option<&str>) -> Result<DateRange, MetricsError> {
    match (from, to) {
        (None, None) => Ok(DateRange::BothMissing),
        (Some(_), None) | (None, Some(_)) => Ok(DateRange::OneMissing),
        (Some(from), Some(to)) => {
            let range = bounded(from, to)?;
            Ok(if range.days < 0 {
                DateRange::Inverted(range)
            } else if range.days > MAX_RANGE_DAYS {
                DateRange::TooLong(range)
            } else {
                DateRange::Valid(range)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_day_range_is_valid() {
        let range = classify(Some("2023-01-01"), Some("2023-01-31")).unwrap();
        assert_eq!(
            range,
            DateRange::Valid(BoundedRange {
                from: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
                days: 30,
            })
        );
    }

    #[test]
    fn thirty_one_day_range_is_too_long() {
        match classify(Some("2023-01-01"), Some("2023-02-01")).unwrap() {
            DateRange::TooLong(range) => assert_eq!(range.days, 31),
            other => panic!("expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn inverted_range_reports_negative_days() {
        match classify(Some("2023-02-01"), Some("2023-01-01")).unwrap() {
            DateRange::Inverted(range) => assert_eq!(range.days, -31),
            other => panic!("expected Inverted, got {:?}", other),
        }
    }

    #[test]
    fn same_day_range_is_valid() {
        match classify(Some("2023-01-15"), Some("2023-01-15")).unwrap() {
            DateRange::Valid(range) => assert_eq!(range.days, 0),
            other => panic!("expected Valid, got {:?}", other),
        }
    }

    #[test]
    fn missing_from_is_one_missing() {
        assert_eq!(
            classify(None, Some("2023-01-01")).unwrap(),
            DateRange::OneMissing
        );
    }

    #[test]
    fn missing_to_is_one_missing() {
        assert_eq!(
            classify(Some("2023-01-01"), None).unwrap(),
            DateRange::OneMissing
        );
    }

    #[test]
    fn both_missing() {
        assert_eq!(classify(None, None).unwrap(), DateRange::BothMissing);
    }

    #[test]
    fn unparseable_bound_is_an_error() {
        assert!(classify(Some("not-a-date"), Some("2023-01-01")).is_err());
        assert!(classify(Some("2023-01-01"), Some("2023-01-01T00:00:00")).is_err());
    }

    #[test]
    fn invalid_calendar_date_is_an_error() {
        assert!(classify(Some("2023-02-30"), Some("2023-03-01")).is_err());
    }
}
