use axum::http::{header, HeaderMap};

use crate::error::{AppError, Result};
use crate::models::SessionRecord;
use crate::store::SessionStore;
use crate::AppState;

/// Extract the bearer token from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve the caller's session from the Authorization header
///
/// Accepts `Authorization: Bearer <token>`. A missing header, unknown token,
/// or expired session all resolve to `Unauthorized`.
pub async fn require_session(state: &AppState, headers: &HeaderMap) -> Result<SessionRecord> {
    let token = bearer_token(headers)
        .ok_or(AppError::Unauthorized)?
        .to_string();

    let db = state.db.clone();
    tokio::task::spawn_blocking(move || SessionStore::new(db).lookup(&token)).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );

        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic abc123"),
        );

        assert_eq!(bearer_token(&headers), None);
    }
}
