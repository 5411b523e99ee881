use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use papertrade_market_data::MarketDataError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Symbol parameter is required")]
    MissingSymbol,
    #[error("Unsupported range parameter")]
    UnsupportedRange(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
}

/// JSON error body. `message` carries diagnostic detail where there is any.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingSymbol | ApiError::UnsupportedRange(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MarketData(e) if e.is_no_data() => StatusCode::NOT_FOUND,
            ApiError::MarketData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::MissingSymbol | ApiError::MethodNotAllowed => ErrorBody {
                error: self.to_string(),
                message: None,
            },
            ApiError::UnsupportedRange(detail) => ErrorBody {
                error: self.to_string(),
                message: Some(detail.clone()),
            },
            ApiError::MarketData(e) if e.is_no_data() => ErrorBody {
                error: "No data found for symbol".to_string(),
                message: None,
            },
            ApiError::MarketData(e) => ErrorBody {
                error: "Failed to fetch market data".to_string(),
                message: Some(e.to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Market data fetch error: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(err: &ApiError) -> serde_json::Value {
        serde_json::to_value(err.body()).unwrap()
    }

    #[test]
    fn test_missing_symbol() {
        let err = ApiError::MissingSymbol;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(&err),
            serde_json::json!({ "error": "Symbol parameter is required" })
        );
    }

    #[test]
    fn test_method_not_allowed() {
        let err = ApiError::MethodNotAllowed;
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(&err),
            serde_json::json!({ "error": "Method not allowed" })
        );
    }

    #[test]
    fn test_no_data_maps_to_404() {
        for err in [
            MarketDataError::NoData("X".to_string()),
            MarketDataError::InsufficientData("X".to_string()),
        ] {
            let err = ApiError::from(err);
            assert_eq!(err.status(), StatusCode::NOT_FOUND);
            assert_eq!(
                body_json(&err),
                serde_json::json!({ "error": "No data found for symbol" })
            );
        }
    }

    #[test]
    fn test_upstream_maps_to_500_with_message() {
        let err = ApiError::from(MarketDataError::Upstream { status: 502 });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(&err),
            serde_json::json!({
                "error": "Failed to fetch market data",
                "message": "Yahoo Finance API error: 502"
            })
        );
    }

    #[test]
    fn test_unsupported_range_carries_detail() {
        let err = ApiError::UnsupportedRange("decade".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let body = body_json(&err);
        assert_eq!(body["error"], "Unsupported range parameter");
        assert_eq!(body["message"], "decade");
    }
}
