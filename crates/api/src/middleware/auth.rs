//! Session-cookie authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use wayfarer_core::error::CoreError;

use crate::auth::session::{validate_session, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires a valid
/// session; requests without one are rejected with 401 before the handler
/// body runs.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
    pub role: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unauthorized".into())))?;

        let claims = validate_session(&token, &state.config.session)
            .map_err(|_| AppError::Core(CoreError::Unauthorized("Unauthorized".into())))?;

        Ok(AdminSession {
            username: claims.sub,
            role: claims.role,
        })
    }
}

/// Like [`AdminSession`] but never rejects: absent or invalid cookies read
/// as `None`. Used by `GET /api/auth/check`.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<AdminSession>);

impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = AdminSession::from_request_parts(parts, state).await.ok();
        Ok(OptionalSession(session))
    }
}
