//! Typed query for the Apperate `queryData` endpoint: dataset coordinates
//! plus either a provider-native relative range token or explicit bounds.

use chrono::NaiveDate;
use url::Url;

/// Workspace used for the hosted core datasets.
pub const WORKSPACE_CORE: &str = "CORE";
/// Dataset identifier for end-of-day price history.
pub const DATASET_HISTORICAL_PRICES: &str = "HISTORICAL_PRICES";

/// Relative range tokens resolved by the provider, not the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelativeRange {
    FiveDay,
    OneMonth,
    ThreeMonths,
    SixMonths,
    /// Start of the current calendar year through today.
    #[default]
    YearToDate,
    OneYear,
    TwoYears,
    FiveYears,
    Max,
}

impl RelativeRange {
    /// The token the API expects in the `range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeRange::FiveDay => "5d",
            RelativeRange::OneMonth => "1m",
            RelativeRange::ThreeMonths => "3m",
            RelativeRange::SixMonths => "6m",
            RelativeRange::YearToDate => "ytd",
            RelativeRange::OneYear => "1y",
            RelativeRange::TwoYears => "2y",
            RelativeRange::FiveYears => "5y",
            RelativeRange::Max => "max",
        }
    }
}

/// How a query selects its date window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateSelection {
    /// A provider-resolved token such as `ytd`.
    Relative(RelativeRange),
    /// Explicit inclusive bounds, sent verbatim as `from`/`to`.
    Between { from: NaiveDate, to: NaiveDate },
}

/// Query for one ticker's rows in a dataset.
#[derive(Debug, Clone)]
pub struct PriceQuery {
    /// Workspace the dataset lives in. Defaults to [`WORKSPACE_CORE`].
    pub workspace: String,
    /// Dataset identifier. Defaults to [`DATASET_HISTORICAL_PRICES`].
    pub dataset: String,
    /// Ticker symbol used as the dataset row key.
    pub ticker: String,
    /// Date window for the query.
    pub selection: DateSelection,
}

impl PriceQuery {
    /// Creates a query against the core historical-prices dataset,
    /// defaulting to the year-to-date window.
    pub fn new(ticker: &str) -> Self {
        Self {
            workspace: WORKSPACE_CORE.to_string(),
            dataset: DATASET_HISTORICAL_PRICES.to_string(),
            ticker: ticker.to_string(),
            selection: DateSelection::Relative(RelativeRange::default()),
        }
    }

    /// Sets the date window.
    pub fn over(mut self, selection: DateSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Path portion of the request URL: `/v1/data/{workspace}/{dataset}/{ticker}`.
    pub fn path(&self) -> String {
        format!("/v1/data/{}/{}/{}", self.workspace, self.dataset, self.ticker)
    }

    /// Appends this query's date parameters to the given URL, returning the
    /// modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        match &self.selection {
            DateSelection::Relative(range) => {
                url.query_pairs_mut().append_pair("range", range.as_str());
            }
            DateSelection::Between { from, to } => {
                url.query_pairs_mut()
                    .append_pair("from", &from.format("%Y-%m-%d").to_string())
                    .append_pair("to", &to.format("%Y-%m-%d").to_string());
            }
        }
        url
    }
}
