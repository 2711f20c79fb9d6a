use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use crate::error::AppError;
use crate::state::AppState;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{warn, Span};

/// Guards admin routes with the static `ADMIN_TOKEN` bearer token.
pub struct AdminUser;

impl FromRequestParts<Arc<AppState>> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            warn!("Admin request rejected: ADMIN_TOKEN is not configured");
            return Err(AppError::Unauthorized);
        };

        let provided = parts.headers.get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;

        // Compare digests so the check does not short-circuit on the first differing byte.
        if Sha256::digest(provided.trim().as_bytes()) != Sha256::digest(expected.as_bytes()) {
            return Err(AppError::Unauthorized);
        }

        Span::current().record("admin", true);
        Ok(AdminUser)
    }
}
