//! Authentication middleware for Axum
//!
//! The token is read from `Authorization: Bearer <jwt>` first and from the
//! `token` cookie set at login otherwise.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims};
use crate::interfaces::http::common::ApiResponse;

/// Name of the cookie carrying the session token
pub const AUTH_COOKIE: &str = "token";

/// Authentication error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl AuthError {
    fn message(self) -> &'static str {
        match self {
            AuthError::MissingToken => "Missing or invalid Authorization header.",
            AuthError::InvalidToken => "Invalid or expired token.",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.message());
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Authentication state containing JWT config
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Operator identity attached to authenticated requests
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    /// Default station for gate requests
    pub interchange: String,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            interchange: claims.interchange,
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn cookie_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|t| !t.is_empty())
}

/// Token from the request, header first.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers).or_else(|| cookie_token(headers))
}

/// Resolve the operator behind a request.
pub fn authenticate(headers: &HeaderMap, config: &JwtConfig) -> Result<AuthenticatedUser, AuthError> {
    let token = extract_token(headers).ok_or(AuthError::MissingToken)?;
    let claims = verify_token(token, config).map_err(|_| AuthError::InvalidToken)?;
    if claims.is_expired() {
        return Err(AuthError::InvalidToken);
    }
    Ok(AuthenticatedUser::from_claims(claims))
}

/// JWT authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &auth_state.jwt_config) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(reason = e.message(), path = %request.uri().path(), "Unauthenticated request");
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::create_token;
    use axum::http::HeaderValue;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test".into(),
            expiration_hours: 1,
            issuer: "toll-gate-test".into(),
        }
    }

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let h = headers(&[
            (header::AUTHORIZATION, "Bearer from-header"),
            (header::COOKIE, "token=from-cookie"),
        ]);
        assert_eq!(extract_token(&h), Some("from-header"));
    }

    #[test]
    fn cookie_used_when_header_missing_or_malformed() {
        let h = headers(&[(header::COOKIE, "theme=dark; token=abc.def.ghi")]);
        assert_eq!(extract_token(&h), Some("abc.def.ghi"));

        let h = headers(&[
            (header::AUTHORIZATION, "Token xyz"),
            (header::COOKIE, "token=abc"),
        ]);
        assert_eq!(extract_token(&h), Some("abc"));
    }

    #[test]
    fn missing_and_malformed_are_missing_token() {
        let cfg = config();
        assert_eq!(
            authenticate(&HeaderMap::new(), &cfg).unwrap_err(),
            AuthError::MissingToken
        );
        let h = headers(&[(header::AUTHORIZATION, "Token xyz")]);
        assert_eq!(authenticate(&h, &cfg).unwrap_err(), AuthError::MissingToken);
    }

    #[test]
    fn bad_or_expired_token_is_invalid() {
        let cfg = config();
        let h = headers(&[(header::AUTHORIZATION, "Bearer invalidtoken")]);
        assert_eq!(authenticate(&h, &cfg).unwrap_err(), AuthError::InvalidToken);

        let expired_cfg = JwtConfig {
            expiration_hours: -2,
            ..config()
        };
        let expired = create_token("u-1", "agent1", "NS Interchange", &expired_cfg).unwrap();
        let h = headers(&[(header::COOKIE, format!("token={}", expired).as_str())]);
        assert_eq!(authenticate(&h, &cfg).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn valid_token_yields_interchange() {
        let cfg = config();
        let token = create_token("u-1", "agent1", "NS Interchange", &cfg).unwrap();
        let h = headers(&[(header::AUTHORIZATION, format!("Bearer {}", token).as_str())]);

        let user = authenticate(&h, &cfg).unwrap();
        assert_eq!(user.username, "agent1");
        assert_eq!(user.interchange, "NS Interchange");
    }
}
