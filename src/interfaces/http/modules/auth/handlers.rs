//! Authentication API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    Extension, Json,
};

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use crate::application::IdentityService;
use crate::interfaces::http::common::{error_response, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::{AuthenticatedUser, AUTH_COOKIE};

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub identity: Arc<IdentityService>,
    /// Add `Secure` to the session cookie
    pub secure_cookies: bool,
}

fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}",
        AUTH_COOKIE, token, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Operator created", body = ApiResponse<UserInfo>),
        (status = 400, description = "Missing field or unknown interchange"),
        (status = 409, description = "Username already exists"),
        (status = 422, description = "Field too long")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserInfo>>), ApiError<UserInfo>> {
    let user = state
        .identity
        .register(&request.username, &request.password, &request.interchange)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(user.into()))))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login; also sets the `token` cookie", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Missing field or unknown interchange"),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<([(header::HeaderName, String); 1], Json<ApiResponse<LoginResponse>>), ApiError<LoginResponse>>
{
    let auth = state
        .identity
        .login(
            &request.username,
            &request.password,
            request.interchange.as_deref(),
        )
        .await
        .map_err(error_response)?;

    let cookie = session_cookie(&auth.token, auth.expires_in, state.secure_cookies);

    let response = LoginResponse {
        message: "Login successful".to_string(),
        token: auth.token,
        token_type: auth.token_type,
        expires_in: auth.expires_in,
        interchange: auth.interchange,
        user: auth.user.into(),
    };

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponse::success(response)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current operator; interchange is the session's station", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Operator no longer exists")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserInfo>>, ApiError<UserInfo>> {
    let db_user = state
        .identity
        .get_user_by_id(&user.user_id)
        .await
        .map_err(error_response)?;

    let Some(db_user) = db_user else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("User not found")),
        ));
    };

    Ok(Json(ApiResponse::success(UserInfo {
        id: db_user.id,
        username: db_user.username,
        interchange: user.interchange,
    })))
}

#[cfg(test)]
mod tests {
    use super::session_cookie;

    #[test]
    fn cookie_flags() {
        let plain = session_cookie("abc", 3600, false);
        assert_eq!(plain, "token=abc; HttpOnly; SameSite=Strict; Path=/; Max-Age=3600");
        assert!(session_cookie("abc", 3600, true).ends_with("; Secure"));
    }
}
