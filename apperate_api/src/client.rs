//! HTTP client for the Apperate `queryData` REST API.

use std::time::Duration;

use url::Url;

use crate::errors::Error;
use crate::query::PriceQuery;
use crate::types::PriceRecord;

/// Request timeout for Apperate API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// REST client for querying hosted Apperate datasets.
///
/// Authenticates with a `token` query parameter on every request.
pub struct Client {
    http: reqwest::Client,
    api_token: String,
    base_url: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_token: String) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_token,
            base_url: "https://api.iex.cloud".to_string(),
        })
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_token: String) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_token,
            base_url: base_url.to_string(),
        })
    }

    fn get_url(&self, query: &PriceQuery) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", self.base_url, query.path()).as_str()).map_err(
            |e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::ParseFailed(format!("invalid request URL: {}", e))
            },
        )?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("token", &self.api_token);
        Ok(url)
    }

    /// Fetches one ticker's daily price rows for the query's date window.
    ///
    /// The dataset responds with a JSON array of records. A non-array body
    /// (the API answers with an object for some malformed queries) is
    /// treated as an empty result rather than an error. Records with
    /// missing optional fields deserialize with those fields unset.
    pub async fn query_daily_prices(&self, query: &PriceQuery) -> Result<Vec<PriceRecord>, Error> {
        let url = self.get_url(query)?;
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to query {}: {}", query.path(), e);
            Error::Network(e)
        })?;

        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::InvalidToken);
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::ParseFailed(format!("failed to deserialize response: {}", e))
        })?;

        if !value.is_array() {
            tracing::warn!(
                "Non-array payload for {}, treating as empty result",
                query.path()
            );
            return Ok(Vec::new());
        }

        serde_json::from_value(value).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse price records: {} | body: {}", e, snippet);
            Error::ParseFailed(format!("failed to deserialize price records: {}", e))
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::DateSelection;
    use chrono::NaiveDate;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_prices_json() -> serde_json::Value {
        serde_json::json!([
            {
                "priceDate": "2023-01-03",
                "open": 130.28,
                "close": 125.07,
                "fopen": 129.69,
                "fclose": 124.5,
                "uopen": 130.28,
                "uclose": 125.07,
                "volume": 112117471
            },
            {
                "priceDate": "2023-01-04",
                "open": 126.89,
                "close": 126.36,
                "fopen": 126.31,
                "fclose": 125.79,
                "uopen": 126.89,
                "uclose": 126.36,
                "volume": 89113633
            }
        ])
    }

    #[tokio::test]
    async fn ytd_query_parses_records() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/data/CORE/HISTORICAL_PRICES/AAPL"))
            .and(query_param("range", "ytd"))
            .and(query_param("token", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_prices_json()))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
        let query = PriceQuery::new("AAPL");
        let records = client.query_daily_prices(&query).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].price_date, "2023-01-03");
        assert_eq!(records[1].volume, Some(89113633));
    }

    #[tokio::test]
    async fn bounded_query_sends_from_and_to() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/data/CORE/HISTORICAL_PRICES/AAPL"))
            .and(query_param("from", "2023-01-01"))
            .and(query_param("to", "2023-01-31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_prices_json()))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
        let query = PriceQuery::new("AAPL").over(DateSelection::Between {
            from: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        });
        let records = client.query_daily_prices(&query).await.unwrap();

        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn unauthorized_returns_invalid_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/data/CORE/HISTORICAL_PRICES/AAPL"))
            .respond_with(ResponseTemplate::new(401).set_body_string("The API token is invalid"))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "bad-key".to_string()).unwrap();
        let result = client.query_daily_prices(&PriceQuery::new("AAPL")).await;

        assert!(matches!(result.unwrap_err(), Error::InvalidToken));
    }

    #[tokio::test]
    async fn server_error_returns_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/data/CORE/HISTORICAL_PRICES/AAPL"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
        let result = client.query_daily_prices(&PriceQuery::new("AAPL")).await;

        assert!(matches!(
            result.unwrap_err(),
            Error::HttpStatus { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn malformed_json_returns_parse_failed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/data/CORE/HISTORICAL_PRICES/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
        let result = client.query_daily_prices(&PriceQuery::new("AAPL")).await;

        assert!(matches!(result.unwrap_err(), Error::ParseFailed(_)));
    }

    #[tokio::test]
    async fn non_array_body_is_empty_result() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/data/CORE/HISTORICAL_PRICES/AAPL"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "no rows"})),
            )
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
        let records = client
            .query_daily_prices(&PriceQuery::new("AAPL"))
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn partial_records_parse() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/data/CORE/HISTORICAL_PRICES/AAPL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "priceDate": "2023-01-03", "close": 125.07 }
            ])))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
        let records = client
            .query_daily_prices(&PriceQuery::new("AAPL"))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].open, None);
        assert_eq!(records[0].close, Some(125.07));
    }

    #[test]
    fn client_creation_with_defaults() {
        let client = Client::new("test-key".to_string());
        assert!(client.is_ok());
    }
}
