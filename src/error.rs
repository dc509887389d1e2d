// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Pipeline failure taxonomy.
//!
//! Every failure the pipeline can surface - an authentication rejection from
//! the gate or a fault escaping an application handler - is represented as a
//! [`PipelineFailure`] value. Stages never write the error response
//! themselves: converting a failure into a response body is the failure
//! interceptor's job (`middleware::failure`), so exactly one error response
//! is written per request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::auth::AuthError;

/// A failure raised somewhere in the request pipeline.
///
/// The client contract distinguishes exactly one case: an expired token,
/// which is the "please refresh" signal. Every other failure - missing or
/// malformed credentials, signature/issuer/audience mismatches, and unhandled
/// application faults - renders as the generic error shape.
#[derive(Debug, Clone, Error)]
pub enum PipelineFailure {
    /// Token was structurally valid but past its lifetime window.
    #[error("Token has expired")]
    AuthenticationExpired,
    /// Credentials were missing, malformed, or failed verification.
    #[error("{0}")]
    AuthenticationInvalid(String),
    /// A fault escaped downstream application code.
    #[error("{0}")]
    Unhandled(String),
}

impl PipelineFailure {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::AuthenticationInvalid(message.into())
    }

    pub fn unhandled(message: impl Into<String>) -> Self {
        Self::Unhandled(message.into())
    }
}

impl From<AuthError> for PipelineFailure {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired => Self::AuthenticationExpired,
            other => Self::AuthenticationInvalid(other.to_string()),
        }
    }
}

/// Raising a failure produces a bodiless response carrying the failure value
/// in its extensions. The failure interceptor is the single point that turns
/// it into the wire-format JSON error; it must be mounted outside every stage
/// that can fail.
impl IntoResponse for PipelineFailure {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}
