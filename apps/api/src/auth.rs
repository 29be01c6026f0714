//! Request-scoped bearer credential for the screening routes.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Who is calling. With no `API_TOKEN` configured every caller is `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Open,
    Authenticated,
}

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.api_token.as_deref() else {
            return Ok(Caller::Open);
        };

        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);

        match presented {
            Some(token) if token == expected => Ok(Caller::Authenticated),
            Some(_) => {
                warn!("Rejected request with invalid bearer token");
                Err(AppError::Unauthorized)
            }
            None => {
                warn!("Rejected request without Authorization header");
                Err(AppError::Unauthorized)
            }
        }
    }
}
