//! Handlers for the `/auth` resource (check, login, logout).

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use wayfarer_core::error::CoreError;
use wayfarer_db::models::user::CreateUser;
use wayfarer_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{issue_session, removal_cookie, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalSession;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public identity embedded in auth responses.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub username: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: SessionInfo,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub authenticated: bool,
    pub user: Option<SessionInfo>,
}

/// GET /api/auth/check
///
/// Report whether the request carries a valid session.
pub async fn check(OptionalSession(session): OptionalSession) -> Json<CheckResponse> {
    let user = session.map(|s| SessionInfo {
        username: s.username,
        role: s.role,
    });
    Json(CheckResponse {
        authenticated: user.is_some(),
        user,
    })
}

/// POST /api/auth/login
///
/// Authenticate with username + password and start a cookie session.
///
/// When the user table is empty and the submitted username matches the
/// configured bootstrap username, the default admin account is created
/// first, so a fresh deployment can be claimed.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let mut user = UserRepo::find_by_username(&state.pool, &input.username).await?;

    if user.is_none()
        && input.username == state.config.bootstrap.username
        && UserRepo::count(&state.pool).await? == 0
    {
        let password_hash = hash_password(&state.config.bootstrap.password)
            .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

        let created = UserRepo::create(
            &state.pool,
            &CreateUser {
                username: state.config.bootstrap.username.clone(),
                password_hash,
                role: "admin".to_string(),
            },
        )
        .await?;

        tracing::warn!(username = %created.username, "Bootstrap admin account created");
        user = Some(created);
    }

    let user = user.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
    })?;

    let valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = issue_session(&user.username, &user.role, &state.config.session)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::info!(username = %user.username, "Login successful");

    Ok((
        jar.add(session_cookie(token)),
        Json(LoginResponse {
            message: "Login successful",
            user: SessionInfo {
                username: user.username,
                role: user.role,
            },
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clear the session cookie.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.remove(removal_cookie()),
        Json(MessageResponse {
            message: "Logged out successfully",
        }),
    )
}
