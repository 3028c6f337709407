use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use tracing::debug;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Header set by the authentication gateway in front of this service.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity stored in request extensions.
#[derive(Clone, Debug)]
pub struct UserContext {
    pub user_id: Uuid,
}

/// Rejects requests without a valid `X-User-Id` and exposes the id to handlers
/// as a [`UserContext`] extension.
pub async fn user_middleware(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let user_id = user_id_from_headers(req.headers())?;

    req.extensions_mut().insert(UserContext { user_id });

    Ok(next.run(req).await)
}

pub fn user_id_from_headers(headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing X-User-Id header".to_string()))?;

    Uuid::parse_str(raw).map_err(|e| {
        debug!("Rejected malformed user id {}: {}", raw, e);
        ApiError::Unauthorized("malformed X-User-Id header".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_user_id_is_parsed_from_header() {
        let user_id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_ID_HEADER,
            HeaderValue::from_str(&user_id.to_string()).unwrap(),
        );

        assert_eq!(user_id_from_headers(&headers).unwrap(), user_id);
    }

    #[test]
    fn test_missing_or_malformed_user_id_is_unauthorized() {
        let mut headers = HeaderMap::new();
        assert!(matches!(
            user_id_from_headers(&headers),
            Err(ApiError::Unauthorized(_))
        ));

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        assert!(matches!(
            user_id_from_headers(&headers),
            Err(ApiError::Unauthorized(_))
        ));
    }
}
