//! Machine-readable API documentation served at `/api`.

use serde_json::{json, Value};

fn date_param(name: &str, required: bool, description: &str) -> Value {
    json!({
        "in": "query",
        "name": name,
        "required": required,
        "description": description,
        "schema": { "type": "string", "format": "date" }
    })
}

/// OpenAPI 3.0 document for the service.
pub fn openapi() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "API for stock data",
            "version": "1.0.0"
        },
        "servers": [
            { "url": "http://localhost:3000/" }
        ],
        "paths": {
            "/return/{ticker}": {
                "get": {
                    "summary": "Daily returns for a ticker within the timerange provided",
                    "description": "Close-minus-open returns per trading day, in raw, adjusted, and unadjusted variants. Without from/to the range defaults to year-to-date.",
                    "parameters": [
                        {
                            "in": "path",
                            "name": "ticker",
                            "required": true,
                            "description": "Stock Ticker",
                            "schema": { "type": "string" }
                        },
                        date_param("from", false, "Start of the timerange (YYYY-MM-DD)"),
                        date_param("to", false, "End of the timerange (YYYY-MM-DD)")
                    ],
                    "responses": {
                        "200": {
                            "description": "Ticker info within the timerange provided",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "object" }
                                }
                            }
                        }
                    }
                }
            },
            "/alpha/{ticker}": {
                "get": {
                    "summary": "Per-day volume alpha of a ticker against a benchmark",
                    "description": "Joins the ticker's series with the benchmark's by date and reports the volume differential for each day.",
                    "parameters": [
                        {
                            "in": "path",
                            "name": "ticker",
                            "required": true,
                            "description": "Stock Ticker",
                            "schema": { "type": "string" }
                        },
                        {
                            "in": "query",
                            "name": "benchmark",
                            "required": true,
                            "description": "Benchmark Ticker",
                            "schema": { "type": "string" }
                        },
                        date_param("from", true, "Start of the timerange (YYYY-MM-DD)"),
                        date_param("to", true, "End of the timerange (YYYY-MM-DD)")
                    ],
                    "responses": {
                        "200": {
                            "description": "Ticker info along with the benchmark ticker",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "object" }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_endpoints() {
        let doc = openapi();
        assert_eq!(doc["openapi"], "3.0.0");
        assert!(doc["paths"]["/return/{ticker}"]["get"].is_object());
        assert!(doc["paths"]["/alpha/{ticker}"]["get"].is_object());
    }

    #[test]
    fn alpha_parameters_are_required() {
        let doc = openapi();
        let params = doc["paths"]["/alpha/{ticker}"]["get"]["parameters"]
            .as_array()
            .unwrap();
        assert_eq!(params.len(), 4);
        assert!(params.iter().all(|p| p["required"] == true));
    }
}
