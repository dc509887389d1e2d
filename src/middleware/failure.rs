// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Failure interceptor.
//!
//! Outermost pipeline stage around the authentication gate and application
//! handlers. Every exit path is observed: normal completion passes through
//! untouched, a raised [`PipelineFailure`] is rendered into the JSON error
//! contract, and a panic unwinding out of downstream code is caught and
//! rendered as an unhandled fault. This is the pipeline's terminal safety
//! net - no failure propagates past it, and it is the only place an error
//! body is written.
//!
//! Wire contract:
//!
//! | Failure | Status | Body |
//! |---|---|---|
//! | expired token | 401 | `{"authenticated": false, "tokenExpired": true}` |
//! | anything else | 500 | `{"success": false, "error": "<message>"}` |

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use futures::FutureExt;
use serde::Serialize;

use crate::error::PipelineFailure;

#[derive(Debug, Serialize)]
struct ExpiredBody {
    authenticated: bool,
    #[serde(rename = "tokenExpired")]
    token_expired: bool,
}

#[derive(Debug, Serialize)]
struct FaultBody {
    success: bool,
    error: String,
}

/// Wrap the downstream pipeline, converting every failure into exactly one
/// JSON error response.
pub async fn intercept_failures(req: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(mut response) => match response.extensions_mut().remove::<PipelineFailure>() {
            Some(failure) => {
                log_failure(&failure);
                render(&failure)
            }
            None => response,
        },
        Err(panic) => {
            let failure = PipelineFailure::unhandled(panic_message(panic));
            log_failure(&failure);
            render(&failure)
        }
    }
}

fn log_failure(failure: &PipelineFailure) {
    match failure {
        PipelineFailure::Unhandled(message) => {
            tracing::error!(%message, "unhandled failure escaped the pipeline");
        }
        other => {
            tracing::warn!(reason = %other, "request rejected by authentication");
        }
    }
}

/// Render a failure into the client-facing error contract.
///
/// Expired tokens get the distinguishable 401 "please refresh" shape; every
/// other failure - invalid credentials included - gets the generic 500 error
/// shape.
fn render(failure: &PipelineFailure) -> Response {
    match failure {
        PipelineFailure::AuthenticationExpired => (
            StatusCode::UNAUTHORIZED,
            Json(ExpiredBody {
                authenticated: false,
                token_expired: true,
            }),
        )
            .into_response(),
        PipelineFailure::AuthenticationInvalid(message) | PipelineFailure::Unhandled(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FaultBody {
                success: false,
                error: message.clone(),
            }),
        )
            .into_response(),
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unhandled internal error".to_string()
    }
}
