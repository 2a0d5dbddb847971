use axum::http::HeaderMap;
use uuid::Uuid;

use crate::middleware::REQUEST_ID_HEADER;

/// Longest caller-supplied request id we are willing to echo back.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Per-request context resolved by the request middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Reuse the caller's `x-request-id` when it is usable, otherwise mint a UUIDv7.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let supplied = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN);

        match supplied {
            Some(id) => Self::new(id),
            None => Self::new(Uuid::now_v7().to_string()),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn echoes_a_supplied_request_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(RequestContext::from_headers(&headers).request_id(), "abc-123");
    }

    #[test]
    fn mints_a_uuid_when_absent_or_unusable() {
        let ctx = RequestContext::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(ctx.request_id()).is_ok());

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&"x".repeat(500)).unwrap());
        let ctx = RequestContext::from_headers(&headers);
        assert!(Uuid::parse_str(ctx.request_id()).is_ok());
    }
}
