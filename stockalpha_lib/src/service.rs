//! Request pipelines for the two endpoints, plus the provider factory that
//! handlers use to reach the Apperate client.
//!
//! Each pipeline returns `Ok` for both success envelopes and validation
//! rejections; `Err` is reserved for failures the handler boundary
//! collapses to the generic fallback envelope.

use apperate_api::{Client, DateSelection, PriceQuery, RelativeRange};

use crate::alpha::{merge_alpha, AlphaEntry};
use crate::daterange::{self, DateRange};
use crate::envelope::Envelope;
use crate::error::MetricsError;
use crate::returns::{add_returns, DailyReturn};

const MSG_ONE_MISSING: &str = "Kindly provide both FROM and TO to obtain values in a range";
const MSG_INVERTED: &str = "From Date cannot be greater than To Date";
const MSG_TOO_LONG: &str = "From and To Dates cannot have difference more than 30 days";

const STATUS_NOT_ACCEPTABLE: u16 = 406;

/// Builds a fresh provider client per request from configuration captured
/// once at startup. No connection or client is shared across requests.
#[derive(Debug, Clone)]
pub struct ProviderFactory {
    api_token: String,
    base_url: Option<String>,
}

impl ProviderFactory {
    /// Factory for the production API.
    pub fn new(api_token: String) -> Self {
        Self {
            api_token,
            base_url: None,
        }
    }

    /// Factory with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_token: String) -> Self {
        Self {
            api_token,
            base_url: Some(base_url.to_string()),
        }
    }

    fn client(&self) -> Result<Client, MetricsError> {
        let client = match &self.base_url {
            Some(base) => Client::with_base_url(base, self.api_token.clone()),
            None => Client::new(self.api_token.clone()),
        }?;
        Ok(client)
    }
}

/// Empty query values behave as absent bounds.
fn presence(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `GET /return/{ticker}` pipeline: classify the range, fetch, project
/// daily returns.
pub async fn daily_returns(
    provider: &ProviderFactory,
    ticker: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Envelope<DailyReturn>, MetricsError> {
    let selection = match daterange::classify(presence(from), presence(to))? {
        DateRange::BothMissing => DateSelection::Relative(RelativeRange::YearToDate),
        DateRange::OneMissing => {
            return Ok(Envelope::rejected(STATUS_NOT_ACCEPTABLE, MSG_ONE_MISSING));
        }
        DateRange::Inverted(_) => {
            return Ok(Envelope::rejected(STATUS_NOT_ACCEPTABLE, MSG_INVERTED));
        }
        DateRange::TooLong(_) => {
            return Ok(Envelope::rejected(STATUS_NOT_ACCEPTABLE, MSG_TOO_LONG));
        }
        DateRange::Valid(range) => DateSelection::Between {
            from: range.from,
            to: range.to,
        },
    };

    let query = PriceQuery::new(ticker).over(selection);
    let records = provider.client()?.query_daily_prices(&query).await?;
    Ok(Envelope::ok(add_returns(records)))
}

/// `GET /alpha/{ticker}` pipeline: fetch subject and benchmark series over
/// the same explicit bounds, then merge by date.
///
/// Only the inverted-range rule applies here; the 30-day cap does not.
pub async fn alpha(
    provider: &ProviderFactory,
    ticker: &str,
    benchmark: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Envelope<AlphaEntry>, MetricsError> {
    let benchmark = presence(benchmark).ok_or(MetricsError::MissingParameter("benchmark"))?;
    let from = presence(from).ok_or(MetricsError::MissingParameter("from"))?;
    let to = presence(to).ok_or(MetricsError::MissingParameter("to"))?;

    let range = daterange::bounded(from, to)?;
    if range.days < 0 {
        return Ok(Envelope::rejected(STATUS_NOT_ACCEPTABLE, MSG_INVERTED));
    }

    let selection = DateSelection::Between {
        from: range.from,
        to: range.to,
    };
    let subject_query = PriceQuery::new(ticker).over(selection);
    let benchmark_query = PriceQuery::new(benchmark).over(selection);

    // Independent fetches; both must land before the merge.
    let client = provider.client()?;
    let (subject_records, benchmark_records) = tokio::try_join!(
        client.query_daily_prices(&subject_query),
        client.query_daily_prices(&benchmark_query),
    )?;
    tracing::debug!(
        benchmark_rows = benchmark_records.len(),
        "fetched benchmark series"
    );

    Ok(Envelope::ok(merge_alpha(subject_records, &benchmark_records)))
}
