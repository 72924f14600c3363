//! Shared HTTP response helpers.
//!
//! Centralizes status-code classification (429 with `Retry-After`, 401, 403
//! with anti-forgery detection, other 4xx, 5xx) so the resource modules stay
//! focused on request construction and response mapping.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::csrf::is_csrf_rejection;
use crate::error::ApiError;

const MAX_RAW_MESSAGE: usize = 200;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ApiError::RateLimited`] with `Retry-After`
///   parsing (falls back to 60 s if absent or unparseable).
/// - **401** → [`ApiError::Unauthorized`].
/// - **403** → [`ApiError::Forbidden`], flagged when the payload looks like an
///   anti-forgery rejection.
/// - **5xx** → [`ApiError::Server`]; other non-success → [`ApiError::Rejected`].
///
/// # Errors
///
/// Returns the classified [`ApiError`] for any non-success status.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ApiError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if status.is_success() {
        return Ok(resp);
    }

    let raw = resp.text().await.unwrap_or_default();
    let body = serde_json::from_str::<Value>(&raw).ok();
    let message = error_message(body.as_ref())
        .unwrap_or_else(|| raw_message(&raw, status.canonical_reason()));

    Err(match status.as_u16() {
        401 => ApiError::Unauthorized { message },
        403 => {
            let probe = rejection_probe(body.as_ref()).unwrap_or(&raw);
            ApiError::Forbidden {
                csrf: is_csrf_rejection(probe),
                message,
            }
        }
        code if code >= 500 => ApiError::Server {
            status: code,
            message,
        },
        code => ApiError::Rejected {
            status: code,
            message,
            body,
        },
    })
}

/// Read the body and deserialize it as JSON.
///
/// # Errors
///
/// [`ApiError::Transport`] if the body cannot be read,
/// [`ApiError::Decode`] if it is not the expected shape.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

/// First of `detail`, `error`, `message` that is a string.
pub(crate) fn error_message(body: Option<&Value>) -> Option<String> {
    let body = body?;
    ["detail", "error", "message"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| first_field_error(body))
}

/// Field-level validation errors (`{"name": ["This field is required."]}`)
/// flattened to `name: This field is required.`.
fn first_field_error(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    object.iter().find_map(|(field, value)| {
        let text = match value {
            Value::Array(items) => items.iter().find_map(Value::as_str),
            Value::String(text) => Some(text.as_str()),
            _ => None,
        }?;
        Some(format!("{field}: {text}"))
    })
}

/// Text searched for an anti-forgery signature: `detail`, then `error`.
fn rejection_probe(body: Option<&Value>) -> Option<&str> {
    let body = body?;
    body.get("detail")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
}

fn raw_message(raw: &str, reason: Option<&str>) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return reason.unwrap_or("request failed").to_string();
    }
    if trimmed.chars().count() > MAX_RAW_MESSAGE {
        let cut: String = trimmed.chars().take(MAX_RAW_MESSAGE).collect();
        return format!("{cut}…");
    }
    trimmed.to_string()
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "soon");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn rate_limited_default() {
        let err = check_response(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn forbidden_csrf_detail_is_flagged() {
        let body = json!({"detail": "CSRF Failed: CSRF token missing."}).to_string();
        let err = check_response(mock_response(403, &body)).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { csrf: true, .. }));
    }

    #[tokio::test]
    async fn forbidden_permission_is_not_flagged() {
        let body =
            json!({"detail": "You do not have permission to perform this action."}).to_string();
        let err = check_response(mock_response(403, &body)).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { csrf: false, .. }));
    }

    #[tokio::test]
    async fn forbidden_html_page_uses_raw_body() {
        let err = check_response(mock_response(
            403,
            "<h1>Forbidden (403)</h1><p>CSRF verification failed. Request aborted.</p>",
        ))
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { csrf: true, .. }));
    }

    #[tokio::test]
    async fn unauthorized() {
        let body = json!({"detail": "Authentication credentials were not provided."}).to_string();
        let err = check_response(mock_response(401, &body)).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn rejected_keeps_body_and_field_message() {
        let body = json!({"name": ["This field is required."]}).to_string();
        let err = check_response(mock_response(400, &body)).await.unwrap_err();
        match err {
            ApiError::Rejected {
                status,
                message,
                body,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "name: This field is required.");
                assert!(body.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_with_empty_body_uses_reason() {
        let err = check_response(mock_response(502, "")).await.unwrap_err();
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }

    #[tokio::test]
    async fn decode_reports_shape_mismatch() {
        let err = decode::<Vec<u32>>(mock_response(200, "{\"a\":1}"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
