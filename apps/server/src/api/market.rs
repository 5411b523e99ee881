//! `/api/market`: cached historical series for a ticker alias.
//!
//! [`dispatch`] holds the whole request-handling state machine and is shared by
//! both entry points: the axum route and the CGI adapter. Each adapter only
//! translates its platform's request into `(method, raw query)` and the
//! returned [`Response`] back out.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use papertrade_market_data::{NormalizedQuote, RangeSpec, DEFAULT_RANGE};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Validated query of a market request.
#[derive(Debug, PartialEq, Eq)]
pub struct MarketQuery {
    pub symbol: String,
    pub range: String,
}

impl MarketQuery {
    /// Parse the raw query string.
    ///
    /// `symbol` must appear exactly once and be non-blank. `range` defaults to
    /// `7d` and must be one of the supported tokens.
    pub fn parse(raw: Option<&str>) -> ApiResult<Self> {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(raw.unwrap_or("")).map_err(|_| ApiError::MissingSymbol)?;

        let symbols: Vec<&str> = values_of(&pairs, "symbol");
        let symbol = match symbols.as_slice() {
            [symbol] if !symbol.trim().is_empty() => symbol.trim().to_string(),
            _ => return Err(ApiError::MissingSymbol),
        };

        let ranges: Vec<&str> = values_of(&pairs, "range");
        let range = match ranges.as_slice() {
            [] => DEFAULT_RANGE.to_string(),
            [range] if RangeSpec::lookup(range).is_some() => range.to_string(),
            [range] => {
                return Err(ApiError::UnsupportedRange(format!(
                    "Unsupported range '{}'; expected one of: {}",
                    range,
                    RangeSpec::supported_tokens()
                )))
            }
            _ => {
                return Err(ApiError::UnsupportedRange(
                    "range must be given at most once".to_string(),
                ))
            }
        };

        Ok(Self { symbol, range })
    }
}

fn values_of<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Attach the permissive CORS headers carried by every market response.
pub fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

async fn get_market_data(
    state: &AppState,
    raw_query: Option<&str>,
) -> ApiResult<Arc<NormalizedQuote>> {
    let query = MarketQuery::parse(raw_query)?;
    tracing::debug!("Market data request: {} ({})", query.symbol, query.range);
    let quote = state
        .quote_service
        .get_quote(&query.symbol, &query.range)
        .await?;
    Ok(quote)
}

/// Handle one market request.
pub async fn dispatch(state: &AppState, method: &Method, raw_query: Option<&str>) -> Response {
    let mut response = if *method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else if *method == Method::GET {
        match get_market_data(state, raw_query).await {
            Ok(quote) => Json(quote.as_ref()).into_response(),
            Err(e) => e.into_response(),
        }
    } else {
        ApiError::MethodNotAllowed.into_response()
    };

    apply_cors_headers(response.headers_mut());
    response
}

pub async fn market_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Response {
    dispatch(&state, &method, query.as_deref()).await
}
