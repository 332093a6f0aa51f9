//! Bearer token middleware and the `RequireAuth` extractor.
//!
//! The middleware hands every Bearer token to the `SessionValidator` port
//! and stores the resulting `AuthenticatedUser` in request extensions.
//! Requests without a token pass through untouched, so each handler opts
//! into enforcement by taking `RequireAuth` as an argument.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// State handed to `auth_middleware`: the session validator behind the port.
pub type AuthState = Arc<dyn SessionValidator>;

/// Reads the Bearer token out of the Authorization header, if any.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Validates the Bearer token, if one is present, and injects the user.
///
/// An invalid or expired token is rejected here with 401 (503 when the
/// auth service itself is down). A missing token is not an error at this
/// layer; `RequireAuth` rejects it in handlers that need a user.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(AuthError::ServiceUnavailable(msg)) => {
            tracing::error!("Auth service unavailable: {}", msg);
            reject(
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
        }
        Err(AuthError::TokenExpired) => reject(StatusCode::UNAUTHORIZED, "Token expired"),
        Err(AuthError::InvalidToken) => reject(StatusCode::UNAUTHORIZED, "Invalid token"),
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    let body = Json(serde_json::json!({
        "error": message,
        "code": "AUTH_ERROR"
    }));
    (status, body).into_response()
}

/// Extractor yielding the validated user, rejecting with 401 when absent.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection)
        })
    }
}

/// Rejection emitted when no validated user is attached to the request.
#[derive(Debug, Clone)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": "Authentication required",
            "code": "UNAUTHENTICATED"
        }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
