// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication gate.
//!
//! Middleware stage mounted in front of protected routes. It extracts the
//! bearer token, invokes the validator and either forwards the request with
//! the verified [`Claims`] attached or raises a [`PipelineFailure`]. The
//! gate never writes an error body: authentication decides, the failure
//! interceptor renders.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use super::claims::Claims;
use super::error::AuthError;
use super::trust::TrustConfig;
use super::validator::validate;
use crate::error::PipelineFailure;
use crate::state::AppState;

/// Require a valid bearer token on every request passing through.
///
/// Mount with `axum::middleware::from_fn_with_state` on the protected
/// subtree; routes mounted elsewhere are exempt by construction.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, PipelineFailure> {
    let claims = authenticate(req.headers(), &state.trust)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Pull the bearer token out of the request headers and validate it.
///
/// A missing or non-`Bearer` header rejects immediately, without invoking
/// the validator.
fn authenticate(headers: &HeaderMap, trust: &TrustConfig) -> Result<Claims, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?
        .trim();

    validate(token, trust, Utc::now())
}
