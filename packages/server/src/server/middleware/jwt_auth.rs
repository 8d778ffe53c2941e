use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

use crate::domains::auth::models::Role;
use crate::domains::auth::JwtService;

/// Authenticated identity derived from a verified JWT.
///
/// Materialized once per request and discarded with it; never persisted.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub role: Role,
    pub email: String,
}

/// JWT authentication middleware
///
/// Extracts the token from the Authorization header, verifies it, and adds
/// AuthUser to request extensions. If no token or invalid token, the request
/// continues without AuthUser (public access).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(&request, &jwt_service);

    if let Some(user) = auth_user {
        debug!("Authenticated user: {} ({:?})", user.user_id, user.role);
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify the bearer token from a request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Handle both "Bearer <token>" and raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service.verify(token).ok()?;

    Some(AuthUser {
        user_id: claims.sub,
        role: claims.role,
        email: claims.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_token(jwt_service: &JwtService, role: Role) -> String {
        jwt_service
            .issue("64f000000000000000000001", role, "a@example.com")
            .unwrap()
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let jwt_service = JwtService::new("test_secret");
        let token = issue_token(&jwt_service, Role::Admin);

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service).unwrap();
        assert_eq!(auth_user.user_id, "64f000000000000000000001");
        assert_eq!(auth_user.role, Role::Admin);
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let jwt_service = JwtService::new("test_secret");
        let token = issue_token(&jwt_service, Role::Employee);

        let request = axum::http::Request::builder()
            .header("authorization", token)
            .body(axum::body::Body::empty())
            .unwrap();

        let auth_user = extract_auth_user(&request, &jwt_service).unwrap();
        assert_eq!(auth_user.role, Role::Employee);
        assert_eq!(auth_user.email, "a@example.com");
    }

    #[test]
    fn test_no_auth_header() {
        let jwt_service = JwtService::new("test_secret");
        let request = axum::http::Request::builder()
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &jwt_service).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let jwt_service = JwtService::new("test_secret");
        let request = axum::http::Request::builder()
            .header("authorization", "Bearer invalid_token")
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &jwt_service).is_none());
    }
}
