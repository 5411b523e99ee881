//! CGI/1.1 rendering for the short-lived edge adapter.
//!
//! The adapter handles exactly one request per process: the method and query
//! come from `REQUEST_METHOD` / `QUERY_STRING`, and the response is written to
//! stdout as a `Status:` line, header lines, a blank line, then the body.

use anyhow::Context;
use axum::{body::to_bytes, http::Method, response::Response};

/// Largest body the adapter will buffer (market payloads are a few KiB).
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Request method from a CGI `REQUEST_METHOD` value, `GET` when unset.
pub fn request_method(raw: Option<&str>) -> anyhow::Result<Method> {
    match raw.map(str::trim).filter(|m| !m.is_empty()) {
        Some(m) => Method::from_bytes(m.to_ascii_uppercase().as_bytes())
            .with_context(|| format!("Invalid REQUEST_METHOD: {}", m)),
        None => Ok(Method::GET),
    }
}

/// Serialize a response into CGI output bytes.
pub async fn render_response(response: Response) -> anyhow::Result<Vec<u8>> {
    let (parts, body) = response.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .context("Failed to read response body")?;

    let mut out = Vec::with_capacity(body.len() + 256);
    out.extend_from_slice(
        format!(
            "Status: {} {}\r\n",
            parts.status.as_u16(),
            parts.status.canonical_reason().unwrap_or("")
        )
        .as_bytes(),
    );
    for (name, value) in parts.headers.iter() {
        out.extend_from_slice(name.as_str().as_bytes());
        out.extend_from_slice(b": ");
        out.extend_from_slice(value.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(b"\r\n");
    out.extend_from_slice(&body);
    Ok(out)
}
