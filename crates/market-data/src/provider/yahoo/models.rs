//! Yahoo Finance chart API response models.
//!
//! Only the fields the normalizer needs are modelled; everything else in the
//! payload (meta, adjclose, volumes) is ignored.

use serde::Deserialize;

/// Top-level wrapper of the v8 chart endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct YahooChartResponse {
    pub chart: Option<YahooChart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct YahooChart {
    pub result: Option<Vec<YahooChartResult>>,
    pub error: Option<YahooChartError>,
}

/// One chart series. `timestamp` and the close array are index-aligned.
#[derive(Debug, Default, Deserialize)]
pub struct YahooChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: Option<YahooIndicators>,
}

#[derive(Debug, Default, Deserialize)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Option<Vec<YahooQuoteIndicator>>,
}

/// Close prices; `null` marks a gap (holiday, halt).
#[derive(Debug, Default, Deserialize)]
pub struct YahooQuoteIndicator {
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
pub struct YahooChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl YahooChartResponse {
    /// First result entry, if any.
    pub fn first_result(&self) -> Option<&YahooChartResult> {
        self.chart
            .as_ref()
            .and_then(|chart| chart.result.as_ref())
            .and_then(|results| results.first())
    }
}

impl YahooChartResult {
    pub fn timestamps(&self) -> &[i64] {
        self.timestamp.as_deref().unwrap_or(&[])
    }

    /// `indicators.quote[0].close`, or an empty slice when any level is absent.
    pub fn closes(&self) -> &[Option<f64>] {
        self.indicators
            .as_ref()
            .and_then(|ind| ind.quote.as_ref())
            .and_then(|quotes| quotes.first())
            .and_then(|quote| quote.close.as_deref())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_chart_with_gaps() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {"currency": "USD", "symbol": "^GSPC"},
                    "timestamp": [1717421400, 1717507800, 1717594200],
                    "indicators": {
                        "quote": [{"close": [5283.39, null, 5354.03], "volume": [1, 2, 3]}],
                        "adjclose": [{"adjclose": [5283.39, null, 5354.03]}]
                    }
                }],
                "error": null
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        let result = response.first_result().unwrap();
        assert_eq!(result.timestamps().len(), 3);
        assert_eq!(result.closes(), &[Some(5283.39), None, Some(5354.03)]);
    }

    #[test]
    fn test_deserialize_missing_indicators() {
        let json = r#"{"chart": {"result": [{"timestamp": [1717421400]}]}}"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        let result = response.first_result().unwrap();
        assert_eq!(result.timestamps(), &[1717421400]);
        assert!(result.closes().is_empty());
    }

    #[test]
    fn test_deserialize_empty_quote_array() {
        let json = r#"{"chart": {"result": [{"timestamp": [], "indicators": {"quote": []}}]}}"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        let result = response.first_result().unwrap();
        assert!(result.timestamps().is_empty());
        assert!(result.closes().is_empty());
    }

    #[test]
    fn test_deserialize_error_payload() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_result().is_none());
        let error = response.chart.unwrap().error.unwrap();
        assert_eq!(error.code.as_deref(), Some("Not Found"));
    }

    #[test]
    fn test_deserialize_without_chart() {
        let response: YahooChartResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_result().is_none());
    }
}
